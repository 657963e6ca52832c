//! Note Card Component
//!
//! Draggable note summary used by the home and starred pages.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::make_on_mousedown;

use crate::context::AppContext;
use crate::models::Note;
use crate::note_text::{format_relative, preview_text, word_count};

/// Identity of a rendered card; changes whenever the card must re-render
pub fn card_key(note: &Note) -> (i64, i64, bool, Option<i64>) {
    (note.id, note.updated_at.timestamp_millis(), note.is_starred, note.folder_id)
}

#[component]
pub fn NoteCard(
    note: Note,
    #[prop(default = true)] show_folder: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = note.id;
    let starred = note.is_starred;
    let title = note.display_title().to_string();
    let preview = (!note.content.trim().is_empty())
        .then(|| preview_text(&note.content, ctx.config.preview_chars));
    let updated = format_relative(&note.updated_at, &Local::now());
    let words = word_count(&note.content);

    let folder_badge = note
        .folder_id
        .filter(|_| show_folder)
        .map(|folder_id| move || ctx.folders.get_by_id(folder_id).map(|f| f.name));

    let on_mousedown = make_on_mousedown(ctx.dnd, note.clone());
    let is_dragged = move || ctx.dnd.is_dragging_where(|n| n.id == id);

    let open = note.clone();
    let on_click = move |_| {
        // Trailing click of a drag
        if ctx.dnd.drag_just_ended.get_untracked() {
            return;
        }
        ctx.open_note(open.clone());
    };

    let on_star = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        spawn_local(async move {
            let _ = ctx.notes.toggle_starred(id).await;
        });
    };

    view! {
        <div
            class=move || if is_dragged() { "note-card dragging" } else { "note-card" }
            on:mousedown=on_mousedown
            on:click=on_click
        >
            <div class="note-card-header">
                <h3 class="note-card-title">{title}</h3>
                {folder_badge.map(|name| view! {
                    {move || name().map(|name| view! {
                        <span class="folder-badge">"📁 " {name}</span>
                    })}
                })}
                <button
                    class=if starred { "star-btn starred" } else { "star-btn" }
                    title=if starred { "Unstar note" } else { "Star note" }
                    on:click=on_star
                >
                    {if starred { "★" } else { "☆" }}
                </button>
            </div>

            <p class="note-card-preview">
                {match preview {
                    Some(text) => view! { <span>{text}</span> }.into_any(),
                    None => view! { <span class="empty">"No content"</span> }.into_any(),
                }}
            </p>

            <div class="note-card-footer">
                <span class="note-card-date">{updated}</span>
                <span class="note-card-words">{format!("{} words", words)}</span>
            </div>
        </div>
    }
}
