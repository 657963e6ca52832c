//! Folder Store
//!
//! Single owner of the flat folder list and the only caller of the folder
//! commands. Local state changes only after the backend confirms.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::backend::Backend;
use crate::error::{validate_name, AppResult};
use crate::models::Folder;
use crate::tree::{build_folder_tree, folder_path, FolderTreeNode};

/// Folder slice of the app state
#[derive(Clone, Debug, Default, Store)]
pub struct FolderState {
    pub folders: Vec<Folder>,
    pub loading: bool,
    /// Message of the last failed load, cleared on the next attempt
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct FolderStore<B> {
    state: Store<FolderState>,
    backend: B,
}

impl<B: Backend> FolderStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: Store::new(FolderState::default()),
            backend,
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    #[cfg(test)]
    pub fn list(&self) -> Vec<Folder> {
        self.state.folders().get()
    }

    pub fn tree(&self) -> Vec<FolderTreeNode> {
        self.state.folders().with(|folders| build_folder_tree(folders))
    }

    pub fn get_by_id(&self, id: i64) -> Option<Folder> {
        self.state
            .folders()
            .with(|folders| folders.iter().find(|f| f.id == id).cloned())
    }

    /// Root-first breadcrumb ending at `id`
    pub fn get_path(&self, id: i64) -> Vec<Folder> {
        self.state.folders().with(|folders| folder_path(folders, id))
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading().get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    // ========================
    // Backend round trips
    // ========================

    /// Replace the list wholesale. On failure the previous list stays and
    /// the error flag is set.
    pub async fn load(&self) -> AppResult<()> {
        *self.state.loading().write() = true;
        *self.state.error().write() = None;

        let result = self.backend.get_folders().await;
        *self.state.loading().write() = false;

        match result {
            Ok(folders) => {
                log::debug!("[FOLDERS] Loaded {} folders", folders.len());
                *self.state.folders().write() = folders;
                Ok(())
            }
            Err(e) => {
                log::error!("[FOLDERS] Failed to load folders: {}", e);
                *self.state.error().write() = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn create(&self, name: &str, parent_id: Option<i64>) -> AppResult<Folder> {
        let name = validate_name(name)?;
        let folder = self
            .backend
            .create_folder(name, parent_id)
            .await
            .inspect_err(|e| log::error!("[FOLDERS] Failed to create folder: {}", e))?;

        self.state.folders().write().push(folder.clone());
        Ok(folder)
    }

    pub async fn update(&self, id: i64, name: &str, parent_id: Option<i64>) -> AppResult<Folder> {
        let name = validate_name(name)?;
        let updated = self
            .backend
            .update_folder(id, name, parent_id)
            .await
            .inspect_err(|e| log::error!("[FOLDERS] Failed to update folder {}: {}", id, e))?;

        if let Some(folder) = self.state.folders().write().iter_mut().find(|f| f.id == id) {
            *folder = updated.clone();
        }
        Ok(updated)
    }

    /// Caller is responsible for asking the user first
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.backend
            .delete_folder(id)
            .await
            .inspect_err(|e| log::error!("[FOLDERS] Failed to delete folder {}: {}", id, e))?;

        self.state.folders().write().retain(|f| f.id != id);
        Ok(())
    }
}
