//! Quill Frontend App
//!
//! View shell: sidebar, main content switch, drag overlay and global
//! shortcuts.

use leptos::ev::keydown;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::TauriBackend;
use crate::components::{
    ComingSoon, DragOverlay, Header, HomePage, NoteEditor, Sidebar, StarredPage,
};
use crate::config::UiConfig;
use crate::context::{AppContext, Folders, Notes, View};
use crate::dnd::create_note_dnd;
use crate::keyboard::{shortcut_of, Shortcut};

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::default();
    let notes = Notes::new(TauriBackend);
    let folders = Folders::new(TauriBackend);
    let dnd = create_note_dnd(notes, config.drag_threshold_px);

    let ctx = AppContext::new(notes, folders, dnd, config);
    provide_context(ctx);

    // Both loads run concurrently; each fills its own slice
    spawn_local(async move {
        let _ = notes.load().await;
    });
    spawn_local(async move {
        let _ = folders.load().await;
    });

    let handle_keydown = window_event_listener(keydown, move |ev| {
        match shortcut_of(&ev) {
            Some(Shortcut::ToggleSidebar) => {
                ev.prevent_default();
                ctx.handle_shortcut(Shortcut::ToggleSidebar);
            }
            Some(Shortcut::CloseSidebar) => ctx.handle_shortcut(Shortcut::CloseSidebar),
            // Handled by the editor
            Some(Shortcut::Save) | None => {}
        }
    });
    on_cleanup(move || drop(handle_keydown));

    let layout_class = move || {
        let mut c = String::from("app-layout");
        if ctx.sidebar.get().collapsed { c.push_str(" sidebar-collapsed"); }
        if ctx.dnd.is_dragging() { c.push_str(" is-dragging"); }
        c
    };

    let main_content = move || match ctx.view.get() {
        View::Home => view! { <HomePage /> }.into_any(),
        View::Editor => view! { <NoteEditor /> }.into_any(),
        View::Starred => view! { <StarredPage /> }.into_any(),
        page => view! { <ComingSoon page=page /> }.into_any(),
    };

    view! {
        <div class=layout_class>
            <Header />
            <Sidebar />
            <main class="main-content">
                {main_content}
            </main>
            <button
                class="fab"
                title="New note"
                aria-label="New note"
                on:click=move |_| ctx.create_note()
            >
                "+"
            </button>
            <DragOverlay />
        </div>
    }
}
