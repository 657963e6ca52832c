use leptos::prelude::*;

use crate::components::{card_key, NoteCard, SidebarToggle};
use crate::context::AppContext;
use crate::models::Note;

/// Starred notes; un-starring a card drops it from the list
#[component]
pub fn StarredPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let starred = move || {
        ctx.notes
            .with_notes(|all| all.iter().filter(|n| n.is_starred).cloned().collect::<Vec<Note>>())
    };
    let count = move || ctx.notes.with_notes(|all| all.iter().filter(|n| n.is_starred).count());

    view! {
        <div class="page starred-page">
            <div class="page-header">
                <SidebarToggle />
                <div class="page-heading">
                    <h1>"Starred Notes"</h1>
                    <p class="page-subtitle">
                        {move || match count() {
                            0 => "No starred notes yet".to_string(),
                            1 => "1 starred note".to_string(),
                            n => format!("{} starred notes", n),
                        }}
                    </p>
                </div>
            </div>

            <div class="page-body">
                <Show
                    when=move || (count() > 0)
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"Star notes to keep them close at hand."</p>
                        </div>
                    }
                >
                    <div class="card-grid">
                        <For each=starred key=card_key let:note>
                            <NoteCard note=note />
                        </For>
                    </div>
                </Show>
            </div>
        </div>
    }
}
