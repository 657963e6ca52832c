//! Sidebar Component
//!
//! Navigation, the folder tree, and the "All Notes" drop zone.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_target_mouseenter, make_on_target_mouseleave};

use crate::components::{FolderDialog, FolderDialogMode, FolderTree};
use crate::context::{AppContext, View};
use crate::dnd::NoteDropTarget;
use crate::notify;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dialog = RwSignal::new(None::<FolderDialogMode>);

    let on_create_child = Callback::new(move |parent_id: i64| {
        dialog.set(Some(FolderDialogMode::Create { parent_id: Some(parent_id) }));
    });

    let on_rename = Callback::new(move |id: i64| {
        if let Some(folder) = untrack(|| ctx.folders.get_by_id(id)) {
            dialog.set(Some(FolderDialogMode::Rename { folder }));
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            match ctx.folders.delete(id).await {
                Ok(()) => {
                    if ctx.selected_folder.get_untracked() == Some(id) {
                        ctx.select_folder(None);
                    }
                    // The backend re-files notes and subfolders of the deleted folder
                    let _ = ctx.folders.load().await;
                    let _ = ctx.notes.load().await;
                }
                Err(e) => notify::alert(&format!("Failed to delete folder: {}", e)),
            }
        });
    });

    let on_select = Callback::new(move |id: i64| ctx.select_folder(Some(id)));

    let root_target = NoteDropTarget::Root;
    let on_root_enter = make_on_target_mouseenter(ctx.dnd, root_target);
    let on_root_leave = make_on_target_mouseleave(ctx.dnd, root_target);

    let root_class = move || {
        let mut c = String::from("nav-item all-notes");
        if ctx.view.get() == View::Home && ctx.selected_folder.get().is_none() {
            c.push_str(" active");
        }
        if ctx.dnd.is_dragging() { c.push_str(" drop-ready"); }
        if ctx.dnd.is_over(root_target) { c.push_str(" drop-pending"); }
        c
    };

    let sidebar_class = move || {
        let state = ctx.sidebar.get();
        let mut c = String::from("sidebar");
        if state.open { c.push_str(" open"); }
        if state.collapsed { c.push_str(" collapsed"); }
        c
    };

    let nav_button = move |target: View| {
        view! {
            <button
                class=move || if ctx.view.get() == target { "nav-item active" } else { "nav-item" }
                on:click=move |_| ctx.navigate(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <Show when=move || ctx.sidebar.get().open>
            <div class="sidebar-backdrop" on:click=move |_| ctx.close_sidebar()></div>
        </Show>

        <aside class=sidebar_class>
            <div class="sidebar-header">
                <div class="sidebar-brand">
                    <h1>"Quill"</h1>
                    <button
                        class="sidebar-close"
                        aria-label="Close sidebar"
                        on:click=move |_| ctx.close_sidebar()
                    >
                        "×"
                    </button>
                </div>
                <button
                    class="btn-primary new-note-btn"
                    on:click=move |_| {
                        ctx.create_note();
                        ctx.close_sidebar();
                    }
                >
                    "New Note"
                </button>
            </div>

            <nav class="sidebar-nav">
                {View::NAV.into_iter().map(nav_button).collect_view()}
            </nav>

            <section class="sidebar-folders">
                <div class="section-header">
                    <h3>"Folders"</h3>
                    <button
                        class="add-folder-btn"
                        title="New folder"
                        on:click=move |_| dialog.set(Some(FolderDialogMode::Create { parent_id: None }))
                    >
                        "+"
                    </button>
                </div>

                <div
                    class=root_class
                    on:click=move |_| ctx.select_folder(None)
                    on:mouseenter=on_root_enter
                    on:mouseleave=on_root_leave
                >
                    "All Notes"
                </div>

                <Show when=move || ctx.folders.is_loading()>
                    <p class="sidebar-loading">"Loading folders..."</p>
                </Show>

                <Show when=move || ctx.folders.error().is_some()>
                    <p class="sidebar-error">"Couldn't load folders"</p>
                </Show>

                <FolderTree
                    on_select=on_select
                    on_create_child=on_create_child
                    on_rename=on_rename
                    on_delete=on_delete
                />
            </section>

            <div class="sidebar-footer">
                {nav_button(View::Trash)}
                {nav_button(View::Settings)}
            </div>
        </aside>

        <FolderDialog mode=dialog />
    }
}
