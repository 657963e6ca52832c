//! Folder Tree Component
//!
//! Sidebar folder hierarchy. Rows are rendered flat with indentation; each
//! row is a drop target for dragged notes.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_target_mouseenter, make_on_target_mouseleave};

use crate::context::AppContext;
use crate::dnd::NoteDropTarget;
use crate::notify;
use crate::tree::{flatten_tree, mark_expanded, ExpandedSet, FolderRow};

/// Folder tree with per-node disclosure and a context menu
#[component]
pub fn FolderTree(
    /// Row click (selects the folder filter)
    #[prop(into)] on_select: Callback<i64>,
    /// "New Subfolder" with the parent id
    #[prop(into)] on_create_child: Callback<i64>,
    #[prop(into)] on_rename: Callback<i64>,
    /// Called only after the user confirmed
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Lives as long as this tree is mounted
    let expanded = RwSignal::new(ExpandedSet::default());
    // Folder whose menu is open (one at a time)
    let menu_for = RwSignal::new(None::<i64>);

    let rows = move || {
        let mut nodes = ctx.folders.tree();
        expanded.with(|set| mark_expanded(&mut nodes, set));
        flatten_tree(&nodes)
    };

    view! {
        <div class="folder-tree">
            <Show when=move || menu_for.get().is_some()>
                <div class="menu-backdrop" on:click=move |_| menu_for.set(None)></div>
            </Show>
            <For
                each=rows
                key=|row| (
                    row.folder.id,
                    row.depth,
                    row.folder.name.clone(),
                    row.has_children,
                    row.expanded,
                )
                children=move |row: FolderRow| {
                    let id = row.folder.id;
                    let name = row.folder.name.clone();
                    let has_children = row.has_children;
                    let indent = 12 + row.depth * 20;
                    let target = NoteDropTarget::Folder(id);

                    let on_mouseenter = make_on_target_mouseenter(ctx.dnd, target);
                    let on_mouseleave = make_on_target_mouseleave(ctx.dnd, target);

                    let row_class = move || {
                        let mut c = String::from("folder-row");
                        if ctx.selected_folder.get() == Some(id) { c.push_str(" selected"); }
                        if ctx.dnd.is_over(target) { c.push_str(" drop-pending"); }
                        c
                    };

                    let on_toggle = move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        expanded.update(|set| {
                            set.toggle(id, has_children);
                        });
                    };

                    let on_contextmenu = move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        menu_for.set(Some(id));
                    };

                    let delete_name = name.clone();
                    let on_delete_click = move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        menu_for.set(None);
                        let message = format!(
                            "Delete folder \"{}\"? Notes in this folder will be moved to the root.",
                            delete_name
                        );
                        if notify::confirm(&message) {
                            on_delete.run(id);
                        }
                    };

                    view! {
                        <div
                            class=row_class
                            style=format!("padding-left: {}px;", indent)
                            on:click=move |_| on_select.run(id)
                            on:contextmenu=on_contextmenu
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            // Leaf toggles stay for alignment but do nothing
                            <button
                                class=if has_children { "folder-toggle" } else { "folder-toggle inert" }
                                on:click=on_toggle
                            >
                                {if row.expanded { "▾" } else { "▸" }}
                            </button>
                            <span class="folder-icon">{if row.expanded { "📂" } else { "📁" }}</span>
                            <span class="folder-name">{name}</span>
                            <button
                                class="folder-menu-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    menu_for.update(|m| {
                                        *m = if *m == Some(id) { None } else { Some(id) };
                                    });
                                }
                            >
                                "⋯"
                            </button>

                            <Show when=move || menu_for.get() == Some(id)>
                                <div class="folder-menu" on:click=|ev| ev.stop_propagation()>
                                    <button on:click=move |_| {
                                        menu_for.set(None);
                                        expanded.update(|set| set.expand(id));
                                        on_create_child.run(id);
                                    }>
                                        "New Subfolder"
                                    </button>
                                    <button on:click=move |_| {
                                        menu_for.set(None);
                                        on_rename.run(id);
                                    }>
                                        "Rename"
                                    </button>
                                    <button class="danger" on:click=on_delete_click.clone()>
                                        "Delete"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
