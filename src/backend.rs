//! Backend Seam
//!
//! The command contract as a trait, so stores can run against the Tauri
//! backend in the app and against an in-memory recorder in tests.

use async_trait::async_trait;

use crate::commands;
use crate::error::AppResult;
use crate::models::{Folder, Note};

/// The backend command contract. All calls are single round trips.
///
/// `?Send`: futures run on the single browser thread.
#[async_trait(?Send)]
pub trait Backend {
    async fn get_notes(&self) -> AppResult<Vec<Note>>;
    async fn add_note(&self, title: &str, content: &str, folder_id: Option<i64>) -> AppResult<Note>;
    async fn update_note(&self, id: i64, title: &str, content: &str) -> AppResult<Note>;
    async fn delete_note(&self, id: i64) -> AppResult<()>;
    async fn toggle_note_starred(&self, note_id: i64) -> AppResult<Note>;
    async fn move_note_to_folder(&self, note_id: i64, folder_id: Option<i64>) -> AppResult<Note>;

    async fn get_folders(&self) -> AppResult<Vec<Folder>>;
    async fn create_folder(&self, name: &str, parent_id: Option<i64>) -> AppResult<Folder>;
    async fn update_folder(&self, id: i64, name: &str, parent_id: Option<i64>) -> AppResult<Folder>;
    async fn delete_folder(&self, id: i64) -> AppResult<()>;
}

/// Production backend over Tauri IPC
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBackend;

#[async_trait(?Send)]
impl Backend for TauriBackend {
    async fn get_notes(&self) -> AppResult<Vec<Note>> {
        commands::get_notes().await
    }

    async fn add_note(&self, title: &str, content: &str, folder_id: Option<i64>) -> AppResult<Note> {
        commands::add_note(title, content, folder_id).await
    }

    async fn update_note(&self, id: i64, title: &str, content: &str) -> AppResult<Note> {
        commands::update_note(id, title, content).await
    }

    async fn delete_note(&self, id: i64) -> AppResult<()> {
        commands::delete_note(id).await
    }

    async fn toggle_note_starred(&self, note_id: i64) -> AppResult<Note> {
        commands::toggle_note_starred(note_id).await
    }

    async fn move_note_to_folder(&self, note_id: i64, folder_id: Option<i64>) -> AppResult<Note> {
        commands::move_note_to_folder(note_id, folder_id).await
    }

    async fn get_folders(&self) -> AppResult<Vec<Folder>> {
        commands::get_folders().await
    }

    async fn create_folder(&self, name: &str, parent_id: Option<i64>) -> AppResult<Folder> {
        commands::create_folder(name, parent_id).await
    }

    async fn update_folder(&self, id: i64, name: &str, parent_id: Option<i64>) -> AppResult<Folder> {
        commands::update_folder(id, name, parent_id).await
    }

    async fn delete_folder(&self, id: i64) -> AppResult<()> {
        commands::delete_folder(id).await
    }
}
