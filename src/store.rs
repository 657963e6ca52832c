//! Note Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Owns the note list
//! and the currently open note; every change lands only after the backend
//! returns the updated entity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::backend::Backend;
use crate::error::AppResult;
use crate::models::Note;

/// Note slice of the app state
#[derive(Clone, Debug, Default, Store)]
pub struct NoteState {
    /// All notes, as last returned by the backend
    pub notes: Vec<Note>,
    /// Note shown in the editor
    pub open_note: Option<Note>,
    pub loading: bool,
}

#[derive(Clone, Copy)]
pub struct NoteStore<B> {
    state: Store<NoteState>,
    backend: B,
}

impl<B: Backend> NoteStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: Store::new(NoteState {
                loading: true,
                ..Default::default()
            }),
            backend,
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    #[cfg(test)]
    pub fn list(&self) -> Vec<Note> {
        self.state.notes().get()
    }

    pub fn with_notes<R>(&self, f: impl FnOnce(&Vec<Note>) -> R) -> R {
        self.state.notes().with(f)
    }

    pub fn open_note(&self) -> Option<Note> {
        self.state.open_note().get()
    }

    pub fn open_note_id(&self) -> Option<i64> {
        self.state.open_note().with(|n| n.as_ref().map(|n| n.id))
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading().get()
    }

    pub fn set_open(&self, note: Option<Note>) {
        *self.state.open_note().write() = note;
    }

    // ========================
    // Store helpers
    // ========================

    /// Replace a note by id, and the open note too if it is the same one
    fn store_replace(&self, updated: Note) {
        if let Some(note) = self.state.notes().write().iter_mut().find(|n| n.id == updated.id) {
            *note = updated.clone();
        }
        let is_open = self
            .state
            .open_note()
            .with_untracked(|open| open.as_ref().is_some_and(|n| n.id == updated.id));
        if is_open {
            *self.state.open_note().write() = Some(updated);
        }
    }

    // ========================
    // Backend round trips
    // ========================

    /// Replace the list. Opens the first note when nothing is open yet and
    /// refreshes the open note otherwise. A failure keeps the previous list.
    pub async fn load(&self) -> AppResult<()> {
        let result = self.backend.get_notes().await;
        *self.state.loading().write() = false;

        let notes = result.inspect_err(|e| log::error!("[NOTES] Failed to load notes: {}", e))?;
        log::debug!("[NOTES] Loaded {} notes", notes.len());

        let refreshed = self
            .state
            .open_note()
            .with_untracked(|open| refreshed_open_note(open.as_ref(), &notes));
        *self.state.notes().write() = notes;
        // An unchanged open note is not rewritten
        if let Some(open) = refreshed {
            *self.state.open_note().write() = open;
        }
        Ok(())
    }

    /// Create a note (filed under `folder_id` when given) and open it
    pub async fn create(&self, title: &str, content: &str, folder_id: Option<i64>) -> AppResult<Note> {
        let note = self
            .backend
            .add_note(title, content, folder_id)
            .await
            .inspect_err(|e| log::error!("[NOTES] Failed to create note: {}", e))?;

        self.state.notes().write().insert(0, note.clone());
        *self.state.open_note().write() = Some(note.clone());
        Ok(note)
    }

    pub async fn update(&self, id: i64, title: &str, content: &str) -> AppResult<Note> {
        let updated = self
            .backend
            .update_note(id, title, content)
            .await
            .inspect_err(|e| log::error!("[NOTES] Failed to update note {}: {}", id, e))?;

        if let Some(note) = self.state.notes().write().iter_mut().find(|n| n.id == id) {
            *note = updated.clone();
        }
        *self.state.open_note().write() = Some(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.backend
            .delete_note(id)
            .await
            .inspect_err(|e| log::error!("[NOTES] Failed to delete note {}: {}", id, e))?;

        self.state.notes().write().retain(|n| n.id != id);
        if self.open_note_id_untracked() == Some(id) {
            *self.state.open_note().write() = None;
        }
        Ok(())
    }

    pub async fn toggle_starred(&self, id: i64) -> AppResult<Note> {
        let updated = self
            .backend
            .toggle_note_starred(id)
            .await
            .inspect_err(|e| log::error!("[NOTES] Failed to toggle star on {}: {}", id, e))?;

        self.store_replace(updated.clone());
        Ok(updated)
    }

    /// File the note under `folder_id`, or un-file it with `None`
    pub async fn move_to_folder(&self, id: i64, folder_id: Option<i64>) -> AppResult<Note> {
        let updated = self
            .backend
            .move_note_to_folder(id, folder_id)
            .await
            .inspect_err(|e| log::error!("[NOTES] Failed to move note {}: {}", id, e))?;

        self.store_replace(updated.clone());
        Ok(updated)
    }

    fn open_note_id_untracked(&self) -> Option<i64> {
        self.state.open_note().with_untracked(|n| n.as_ref().map(|n| n.id))
    }
}

/// Open note after a reload: the same note refreshed, or the first note when
/// nothing was open. `None` when the open note did not change.
fn refreshed_open_note(current: Option<&Note>, notes: &[Note]) -> Option<Option<Note>> {
    let next = match current {
        Some(open) => notes.iter().find(|n| n.id == open.id),
        None => notes.first(),
    };
    (next != current).then(|| next.cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::models::fixtures::note;
    use futures::executor::block_on;

    fn loaded(notes: Vec<Note>) -> (NoteStore<MockBackend>, MockBackend) {
        let backend = MockBackend::with(notes, vec![]);
        let store = NoteStore::new(backend.clone());
        block_on(store.load()).expect("load should succeed");
        (store, backend)
    }

    #[test]
    fn test_load_opens_first_note() {
        let (store, _) = loaded(vec![note(1, "a", None), note(2, "b", None)]);
        assert_eq!(store.open_note_id(), Some(1));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_load_failure_keeps_list() {
        let (store, backend) = loaded(vec![note(1, "a", None)]);
        backend.set_failing(true);
        assert!(block_on(store.load()).is_err());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_create_prepends_and_opens() {
        let (store, backend) = loaded(vec![note(1, "a", None)]);

        let created = block_on(store.create("New Note", "", Some(4))).unwrap();

        assert_eq!(store.list()[0], created);
        assert_eq!(store.open_note(), Some(created));
        assert_eq!(backend.calls().last().unwrap(), "add_note New Note Some(4)");
    }

    #[test]
    fn test_move_updates_list_and_open_note() {
        let (store, backend) = loaded(vec![note(1, "a", None), note(2, "b", Some(3))]);
        assert_eq!(store.open_note_id(), Some(1));

        block_on(store.move_to_folder(1, Some(7))).unwrap();
        assert_eq!(store.list()[0].folder_id, Some(7));
        assert_eq!(store.open_note().unwrap().folder_id, Some(7));

        // Un-filing a note that is not open leaves the open note alone
        block_on(store.move_to_folder(2, None)).unwrap();
        assert_eq!(store.list()[1].folder_id, None);
        assert_eq!(store.open_note_id(), Some(1));

        assert_eq!(
            backend.calls()[1..].to_vec(),
            vec!["move_note_to_folder 1 Some(7)", "move_note_to_folder 2 None"]
        );
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let (store, backend) = loaded(vec![note(1, "a", Some(2))]);
        backend.set_failing(true);

        assert!(block_on(store.move_to_folder(1, None)).is_err());

        assert_eq!(store.list()[0].folder_id, Some(2));
        assert_eq!(store.open_note().unwrap().folder_id, Some(2));
    }

    #[test]
    fn test_toggle_star_refreshes_open_note() {
        let (store, _) = loaded(vec![note(1, "a", None)]);
        block_on(store.toggle_starred(1)).unwrap();
        assert!(store.list()[0].is_starred);
        assert!(store.open_note().unwrap().is_starred);
    }

    #[test]
    fn test_update_and_delete() {
        let (store, _) = loaded(vec![note(1, "a", None), note(2, "b", None)]);

        block_on(store.update(2, "B", "body")).unwrap();
        assert_eq!(store.list()[1].title, "B");
        assert_eq!(store.open_note_id(), Some(2));

        block_on(store.delete(2)).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.open_note(), None);
    }

    #[test]
    fn test_reload_refreshes_open_note() {
        let (store, backend) = loaded(vec![note(1, "a", None), note(2, "b", None)]);
        store.set_open(Some(note(2, "b", None)));
        backend.0.borrow_mut().notes[1].title = "renamed".into();

        block_on(store.load()).unwrap();

        assert_eq!(store.open_note().unwrap().title, "renamed");
    }

    #[test]
    fn test_reload_with_same_data_keeps_open_note() {
        let notes = vec![note(1, "a", None), note(2, "b", None)];
        assert_eq!(refreshed_open_note(Some(&notes[1]), &notes), None);

        let mut edited = notes.clone();
        edited[1].title = "renamed".into();
        assert_eq!(refreshed_open_note(Some(&notes[1]), &edited), Some(Some(edited[1].clone())));

        // Open note gone from the backend
        assert_eq!(refreshed_open_note(Some(&notes[1]), &notes[..1]), Some(None));
        assert_eq!(refreshed_open_note(None, &notes), Some(Some(notes[0].clone())));
        assert_eq!(refreshed_open_note(None, &[]), None);
    }

    #[test]
    fn test_reload_after_folder_delete_keeps_open_note() {
        let (store, backend) = loaded(vec![note(1, "a", Some(4)), note(2, "b", None)]);
        let open = store.open_note();

        block_on(store.load()).unwrap();

        assert_eq!(store.open_note(), open);
        assert_eq!(backend.calls(), vec!["get_notes", "get_notes"]);
    }
}
