//! Note Drag-And-Drop Coordinator
//!
//! Binds the generic drag session to notes and folder targets, and turns a
//! drop into a move request.

use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DndSignals};

use crate::backend::Backend;
use crate::context::Notes;
use crate::error::AppResult;
use crate::models::Note;
use crate::notify;
use crate::store::NoteStore;

/// Where a note can be dropped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteDropTarget {
    /// A folder row in the tree
    Folder(i64),
    /// The "All Notes" zone; un-files the note
    Root,
}

impl NoteDropTarget {
    pub fn folder_id(self) -> Option<i64> {
        match self {
            NoteDropTarget::Folder(id) => Some(id),
            NoteDropTarget::Root => None,
        }
    }
}

/// DnD signals for dragging notes
pub type NoteDnd = DndSignals<Note, NoteDropTarget>;

/// What a completed drop asks the backend to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub note_id: i64,
    pub folder_id: Option<i64>,
}

impl MoveRequest {
    pub fn for_drop(note: &Note, target: NoteDropTarget) -> Self {
        Self {
            note_id: note.id,
            folder_id: target.folder_id(),
        }
    }
}

/// Send one move request for a released drag. A failed move leaves the
/// store as it was.
pub async fn commit_drop<B: Backend>(notes: &NoteStore<B>, note: &Note, target: NoteDropTarget) -> AppResult<Note> {
    let request = MoveRequest::for_drop(note, target);
    log::info!("[DND] Drop note {} on {:?}", request.note_id, target);
    notes.move_to_folder(request.note_id, request.folder_id).await
}

/// Create the note drag session, wire the document listeners, and send each
/// drop to the note store. Failures are alerted.
pub fn create_note_dnd(notes: Notes, threshold: i32) -> NoteDnd {
    let dnd: NoteDnd = create_dnd_signals(threshold);

    bind_global_mouseup(dnd, move |note: Note, target| {
        spawn_local(async move {
            if commit_drop(&notes, &note, target).await.is_err() {
                notify::alert("Failed to move note. Please try again.");
            }
        });
    });

    dnd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::note;
    use leptos_dragdrop::DragState;

    fn drop_after(events: impl FnOnce(&mut DragState<Note, NoteDropTarget>)) -> Option<MoveRequest> {
        let mut state = DragState::Idle;
        state.press(note(5, "Draft", Some(1)), 10, 10);
        state.pointer_moved(30, 10, 8);
        events(&mut state);
        state
            .release()
            .map(|(note, target)| MoveRequest::for_drop(&note, target))
    }

    #[test]
    fn test_drop_on_folder_requests_move() {
        let request = drop_after(|s| s.enter(NoteDropTarget::Folder(9)));
        assert_eq!(request, Some(MoveRequest { note_id: 5, folder_id: Some(9) }));
    }

    #[test]
    fn test_drop_on_root_unfiles() {
        let request = drop_after(|s| s.enter(NoteDropTarget::Root));
        assert_eq!(request, Some(MoveRequest { note_id: 5, folder_id: None }));
    }

    #[test]
    fn test_drop_on_nothing_requests_nothing() {
        assert_eq!(drop_after(|_| {}), None);
        assert_eq!(
            drop_after(|s| {
                s.enter(NoteDropTarget::Folder(9));
                s.leave(NoteDropTarget::Folder(9));
            }),
            None
        );
    }

    #[test]
    fn test_cancel_requests_nothing() {
        let request = drop_after(|s| {
            s.enter(NoteDropTarget::Folder(9));
            s.cancel();
        });
        assert_eq!(request, None);
    }

    mod dispatch {
        use super::*;
        use crate::backend::mock::MockBackend;
        use futures::executor::block_on;

        fn store_with(notes: Vec<Note>) -> (NoteStore<MockBackend>, MockBackend) {
            let backend = MockBackend::with(notes, vec![]);
            let store = NoteStore::new(backend.clone());
            block_on(store.load()).expect("load should succeed");
            (store, backend)
        }

        /// Release a drag session and commit whatever it drops
        fn release(
            store: &NoteStore<MockBackend>,
            events: impl FnOnce(&mut DragState<Note, NoteDropTarget>),
        ) -> Option<AppResult<Note>> {
            let mut state = DragState::Idle;
            state.press(note(5, "Draft", Some(1)), 10, 10);
            state.pointer_moved(30, 10, 8);
            events(&mut state);
            let (note, target) = state.release()?;
            Some(block_on(commit_drop(store, &note, target)))
        }

        #[test]
        fn test_folder_drop_sends_one_move() {
            let (store, backend) = store_with(vec![note(5, "Draft", Some(1))]);
            let before = backend.calls().len();

            let moved = release(&store, |s| s.enter(NoteDropTarget::Folder(9)))
                .expect("drop should commit")
                .unwrap();

            assert_eq!(moved.folder_id, Some(9));
            assert_eq!(backend.calls().len(), before + 1);
            assert_eq!(backend.calls().last().unwrap(), "move_note_to_folder 5 Some(9)");
            assert_eq!(store.list()[0].folder_id, Some(9));
        }

        #[test]
        fn test_root_drop_sends_null_folder() {
            let (store, backend) = store_with(vec![note(5, "Draft", Some(1))]);

            release(&store, |s| s.enter(NoteDropTarget::Root))
                .expect("drop should commit")
                .unwrap();

            assert_eq!(backend.calls().last().unwrap(), "move_note_to_folder 5 None");
            assert_eq!(store.list()[0].folder_id, None);
        }

        #[test]
        fn test_drop_on_nothing_sends_nothing() {
            let (store, backend) = store_with(vec![note(5, "Draft", Some(1))]);
            let before = backend.calls();

            assert!(release(&store, |_| {}).is_none());
            assert!(release(&store, |s| {
                s.enter(NoteDropTarget::Folder(9));
                s.cancel();
            })
            .is_none());

            assert_eq!(backend.calls(), before);
        }

        #[test]
        fn test_failed_drop_keeps_folder() {
            let (store, backend) = store_with(vec![note(5, "Draft", Some(1))]);
            backend.set_failing(true);

            let result = release(&store, |s| s.enter(NoteDropTarget::Folder(9))).expect("drop should commit");

            assert!(result.is_err());
            assert_eq!(store.list()[0].folder_id, Some(1));
            assert_eq!(store.open_note().unwrap().folder_id, Some(1));
        }
    }
}
