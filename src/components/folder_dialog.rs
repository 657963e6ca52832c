//! Folder Dialog Component
//!
//! Modal name prompt for creating and renaming folders.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::Folder;
use crate::notify;

/// What the dialog is doing
#[derive(Clone, Debug, PartialEq)]
pub enum FolderDialogMode {
    /// New folder, at root or under `parent_id`
    Create { parent_id: Option<i64> },
    Rename { folder: Folder },
}

impl FolderDialogMode {
    fn heading(&self) -> &'static str {
        match self {
            FolderDialogMode::Create { parent_id: None } => "New Folder",
            FolderDialogMode::Create { parent_id: Some(_) } => "New Subfolder",
            FolderDialogMode::Rename { .. } => "Rename Folder",
        }
    }

    fn initial_name(&self) -> String {
        match self {
            FolderDialogMode::Create { .. } => String::new(),
            FolderDialogMode::Rename { folder } => folder.name.clone(),
        }
    }
}

/// Modal folder name dialog, shown while `mode` is Some
#[component]
pub fn FolderDialog(mode: RwSignal<Option<FolderDialogMode>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // Reset the form whenever the dialog opens
    Effect::new(move |_| {
        if let Some(m) = mode.get() {
            set_name.set(m.initial_name());
            set_error.set(None);
            set_saving.set(false);
        }
    });

    let close = move || mode.set(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = mode.get_untracked() else { return };
        if saving.get_untracked() {
            return;
        }
        let value = name.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            let result = match &current {
                FolderDialogMode::Create { parent_id } => {
                    ctx.folders.create(&value, *parent_id).await.map(|_| ())
                }
                FolderDialogMode::Rename { folder } => {
                    ctx.folders.update(folder.id, &value, folder.parent_id).await.map(|_| ())
                }
            };
            set_saving.set(false);

            match result {
                Ok(()) => close(),
                Err(e) if e.is_validation() => set_error.set(Some(e.to_string())),
                Err(e) => notify::alert(&format!("Failed to save folder: {}", e)),
            }
        });
    };

    view! {
        <Show when=move || mode.with(|m| m.is_some())>
            <div class="modal-backdrop" on:click=move |_| close()>
                <form
                    class="modal folder-dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=submit
                >
                    <h3>{move || mode.with(|m| m.as_ref().map(|m| m.heading()).unwrap_or_default())}</h3>
                    <input
                        type="text"
                        placeholder="Folder name"
                        autofocus=true
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            if let Some(input) = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                set_name.set(input.value());
                                set_error.set(None);
                            }
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ev.stop_propagation();
                                close();
                            }
                        }
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
