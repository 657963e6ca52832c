//! Drag Overlay Component
//!
//! Proxy card that follows the pointer while a note is dragged.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let title = move || ctx.dnd.dragged().map(|note| note.display_title().to_string());
    let style = move || {
        let (x, y) = ctx.dnd.pointer.get();
        format!("left: {}px; top: {}px;", x + 12, y + 12)
    };

    view! {
        {move || title().map(|title| view! {
            <div class="drag-overlay" style=style>
                <span class="drag-overlay-icon">"📝"</span>
                <span class="drag-overlay-title">{title}</span>
            </div>
        })}
    }
}
