//! Note Commands
//!
//! Frontend bindings for note-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, call_decode, to_args};
use crate::error::AppResult;
use crate::models::Note;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub(crate) struct AddNoteArgs<'a> {
    pub title: &'a str,
    pub content: &'a str,
    #[serde(rename = "folderId")]
    pub folder_id: Option<i64>,
}

#[derive(Serialize)]
pub(crate) struct UpdateNoteArgs<'a> {
    pub id: i64,
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
pub(crate) struct NoteIdArgs {
    #[serde(rename = "noteId")]
    pub note_id: i64,
}

#[derive(Serialize)]
pub(crate) struct MoveNoteArgs {
    #[serde(rename = "noteId")]
    pub note_id: i64,
    #[serde(rename = "folderId")]
    pub folder_id: Option<i64>,
}

// ========================
// Commands
// ========================

pub async fn get_notes() -> AppResult<Vec<Note>> {
    call_decode("get_notes", JsValue::NULL).await
}

pub async fn add_note(title: &str, content: &str, folder_id: Option<i64>) -> AppResult<Note> {
    let js_args = to_args(&AddNoteArgs { title, content, folder_id })?;
    call_decode("add_note", js_args).await
}

pub async fn update_note(id: i64, title: &str, content: &str) -> AppResult<Note> {
    let js_args = to_args(&UpdateNoteArgs { id, title, content })?;
    call_decode("update_note", js_args).await
}

pub async fn delete_note(id: i64) -> AppResult<()> {
    let js_args = to_args(&IdArgs { id })?;
    call("delete_note", js_args).await?;
    Ok(())
}

pub async fn toggle_note_starred(note_id: i64) -> AppResult<Note> {
    let js_args = to_args(&NoteIdArgs { note_id })?;
    call_decode("toggle_note_starred", js_args).await
}

/// `folder_id = None` un-files the note
pub async fn move_note_to_folder(note_id: i64, folder_id: Option<i64>) -> AppResult<Note> {
    let js_args = to_args(&MoveNoteArgs { note_id, folder_id })?;
    call_decode("move_note_to_folder", js_args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_note_args_are_camel_case() {
        let args = AddNoteArgs { title: "New Note", content: "", folder_id: Some(3) };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "title": "New Note", "content": "", "folderId": 3 })
        );
    }

    #[test]
    fn test_unfile_sends_null_folder() {
        let args = MoveNoteArgs { note_id: 9, folder_id: None };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "noteId": 9, "folderId": null })
        );
    }

    #[test]
    fn test_star_args() {
        assert_eq!(
            serde_json::to_value(&NoteIdArgs { note_id: 2 }).unwrap(),
            json!({ "noteId": 2 })
        );
        assert_eq!(
            serde_json::to_value(&UpdateNoteArgs { id: 2, title: "t", content: "c" }).unwrap(),
            json!({ "id": 2, "title": "t", "content": "c" })
        );
    }
}
