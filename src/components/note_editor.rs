//! Note Editor Component
//!
//! Title and body editing for the open note. Saves on demand (button or
//! Mod+S), never on every keystroke.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, SidebarToggle};
use crate::context::{AppContext, View};
use crate::keyboard::{shortcut_of, Shortcut};
use crate::models::Note;
use crate::notify;

/// Whether the edited fields differ from the stored note
pub fn has_changes(note: &Note, title: &str, content: &str) -> bool {
    note.title != title || note.content != content
}

/// Whether a refresh of the open note must keep the fields as typed
fn keeps_edits(prev_id: Option<i64>, id: i64, dirty: bool) -> bool {
    dirty && prev_id == Some(id)
}

fn input_value(ev: &web_sys::Event) -> Option<String> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<web_sys::HtmlTextAreaElement>().map(|t| t.value())
}

#[component]
pub fn NoteEditor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (dirty, set_dirty) = signal(false);
    let (saved_flash, set_saved_flash) = signal(false);

    // Load fields whenever the open note changes; a refresh of the note
    // being edited leaves unsaved text alone
    Effect::new(move |prev_id: Option<Option<i64>>| {
        let note = ctx.notes.open_note()?;
        if !keeps_edits(prev_id.flatten(), note.id, dirty.get_untracked()) {
            set_title.set(note.title);
            set_content.set(note.content);
            set_dirty.set(false);
        }
        Some(note.id)
    });

    let save = move || {
        let Some(note) = untrack(|| ctx.notes.open_note()) else { return };
        let (new_title, new_content) = (title.get_untracked(), content.get_untracked());
        if !has_changes(&note, &new_title, &new_content) {
            set_dirty.set(false);
            return;
        }
        spawn_local(async move {
            if ctx.notes.update(note.id, &new_title, &new_content).await.is_ok() {
                set_dirty.set(false);
                set_saved_flash.set(true);
                TimeoutFuture::new(ctx.config.saved_flash_ms).await;
                set_saved_flash.set(false);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if shortcut_of(&ev) == Some(Shortcut::Save) {
            ev.prevent_default();
            save();
        }
    };

    let on_delete = Callback::new(move |_| {
        let Some(id) = untrack(|| ctx.notes.open_note_id()) else { return };
        spawn_local(async move {
            match ctx.notes.delete(id).await {
                Ok(()) => ctx.navigate(View::Home),
                Err(_) => notify::alert("Failed to delete note. Please try again."),
            }
        });
    });

    let last_updated = move || {
        ctx.notes.open_note().map(|n| {
            n.updated_at
                .with_timezone(&Local)
                .format("%b %-d, %Y %H:%M")
                .to_string()
        })
    };

    view! {
        <Show
            when=move || ctx.notes.open_note_id().is_some()
            fallback=|| view! {
                <div class="editor-empty">
                    <h2>"Your ideas await"</h2>
                    <p>
                        "Select a note to start editing, or create a new note to capture your thoughts."
                    </p>
                </div>
            }
        >
            <div class="note-editor" on:keydown=on_keydown>
                <div class="editor-header">
                    <SidebarToggle />
                    <input
                        class="editor-title"
                        type="text"
                        placeholder="Untitled note..."
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                set_title.set(value);
                                set_dirty.set(true);
                            }
                        }
                    />
                    <Show when=move || dirty.get()>
                        <button class="btn-primary" on:click=move |_| save()>"Save"</button>
                    </Show>
                    <DeleteConfirmButton
                        label="Delete"
                        prompt="Delete this note?"
                        on_confirm=on_delete
                    />
                </div>

                <div class="editor-meta">
                    <span>"Last updated: " {last_updated}</span>
                    <Show when=move || dirty.get()>
                        <span class="unsaved">"Unsaved changes"</span>
                    </Show>
                    <Show when=move || saved_flash.get()>
                        <span class="saved">"Saved"</span>
                    </Show>
                    <span class="hint">"Ctrl/Cmd+S to save"</span>
                </div>

                <textarea
                    class="editor-body"
                    placeholder="Start writing your thoughts here..."
                    prop:value=move || content.get()
                    on:input=move |ev| {
                        if let Some(value) = input_value(&ev) {
                            set_content.set(value);
                            set_dirty.set(true);
                        }
                    }
                ></textarea>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::note;

    #[test]
    fn test_has_changes() {
        let mut n = note(1, "Plan", None);
        n.content = "body".into();
        assert!(!has_changes(&n, "Plan", "body"));
        assert!(has_changes(&n, "Plan!", "body"));
        assert!(has_changes(&n, "Plan", "body\n"));
    }

    #[test]
    fn test_refresh_keeps_unsaved_edits() {
        assert!(keeps_edits(Some(3), 3, true));
        // Clean fields follow the store
        assert!(!keeps_edits(Some(3), 3, false));
        // Switching notes always loads the new one
        assert!(!keeps_edits(Some(3), 4, true));
        assert!(!keeps_edits(None, 3, true));
    }
}
