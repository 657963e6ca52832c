//! Home Page Component
//!
//! Greeting, stats, recent notes and all notes grouped by day, filtered by
//! the selected folder.

use chrono::{Local, Timelike};
use leptos::prelude::*;

use crate::components::{card_key, NoteCard, QuickStats, SidebarToggle};
use crate::context::AppContext;
use crate::models::Note;
use crate::note_text::{greeting, group_by_date, recent_notes, NoteStats};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let notes = Memo::new(move |_| {
        let folder = ctx.selected_folder.get();
        ctx.notes.with_notes(|all| {
            all.iter()
                .filter(|n| folder.is_none() || n.folder_id == folder)
                .cloned()
                .collect::<Vec<Note>>()
        })
    });

    let stats = Signal::derive(move || notes.with(|n| NoteStats::compute(n, &Local::now())));
    let recent = move || notes.with(|n| recent_notes(n, ctx.config.recent_notes_limit));
    let groups = move || notes.with(|n| group_by_date(n, &Local));

    let breadcrumb = move || {
        ctx.selected_folder
            .get()
            .map(|id| ctx.folders.get_path(id))
            .filter(|path| !path.is_empty())
    };

    let subtitle = move || match notes.with(|n| n.len()) {
        0 => "Ready to capture your first thought?".to_string(),
        1 => "You have 1 note in your workspace".to_string(),
        n => format!("You have {} notes in your workspace", n),
    };

    view! {
        <Show
            when=move || !ctx.notes.is_loading()
            fallback=|| view! {
                <div class="page-loading">
                    <div class="spinner"></div>
                    <p>"Loading your workspace..."</p>
                </div>
            }
        >
            <div class="page home-page">
                <div class="page-header">
                    <SidebarToggle />
                    <div class="page-heading">
                        {move || breadcrumb().map(|path| view! {
                            <nav class="breadcrumb">
                                <button class="crumb" on:click=move |_| ctx.select_folder(None)>
                                    "All Notes"
                                </button>
                                {path.into_iter().map(|folder| {
                                    let id = folder.id;
                                    view! {
                                        <span class="crumb-sep">"/"</span>
                                        <button class="crumb" on:click=move |_| ctx.select_folder(Some(id))>
                                            {folder.name}
                                        </button>
                                    }
                                }).collect_view()}
                            </nav>
                        })}
                        <h1>{format!("{}! 👋", greeting(Local::now().hour()))}</h1>
                        <p class="page-subtitle">{subtitle}</p>
                    </div>
                    <button class="btn-primary" on:click=move |_| ctx.create_note()>
                        "+ New Note"
                    </button>
                </div>

                <div class="page-body">
                    <QuickStats stats=stats />

                    <Show when=move || notes.with(|n| !n.is_empty())>
                        <section class="recent-notes">
                            <h2>"Recent Notes"</h2>
                            <div class="card-grid">
                                <For each=recent key=card_key let:note>
                                    <NoteCard note=note />
                                </For>
                            </div>
                        </section>
                    </Show>

                    <section class="all-notes">
                        <h2>"All Notes"</h2>
                        <Show
                            when=move || notes.with(|n| !n.is_empty())
                            fallback=move || view! {
                                <div class="empty-state">
                                    <p>"No notes yet"</p>
                                    <button class="btn-primary" on:click=move |_| ctx.create_note()>
                                        "Create your first note"
                                    </button>
                                </div>
                            }
                        >
                            <For
                                each=groups
                                key=|(label, bucket)| (label.clone(), bucket.iter().map(card_key).collect::<Vec<_>>())
                                children=|(label, bucket)| view! {
                                    <div class="date-group">
                                        <h3 class="date-label">{label}</h3>
                                        <div class="card-grid">
                                            {bucket.into_iter().map(|note| view! { <NoteCard note=note /> }).collect_view()}
                                        </div>
                                    </div>
                                }
                            />
                        </Show>
                    </section>
                </div>
            </div>
        </Show>
    }
}
