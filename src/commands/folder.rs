//! Folder Commands
//!
//! Frontend bindings for folder-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, call_decode, to_args};
use crate::error::AppResult;
use crate::models::Folder;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFolderArgs<'a> {
    pub name: &'a str,
    pub parent_id: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateFolderArgs<'a> {
    pub id: i64,
    pub name: &'a str,
    pub parent_id: Option<i64>,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

pub async fn get_folders() -> AppResult<Vec<Folder>> {
    call_decode("get_folders", JsValue::NULL).await
}

pub async fn create_folder(name: &str, parent_id: Option<i64>) -> AppResult<Folder> {
    let js_args = to_args(&CreateFolderArgs { name, parent_id })?;
    call_decode("create_folder", js_args).await
}

pub async fn update_folder(id: i64, name: &str, parent_id: Option<i64>) -> AppResult<Folder> {
    let js_args = to_args(&UpdateFolderArgs { id, name, parent_id })?;
    call_decode("update_folder", js_args).await
}

/// Backend moves the folder's notes to root
pub async fn delete_folder(id: i64) -> AppResult<()> {
    let js_args = to_args(&IdArgs { id })?;
    call("delete_folder", js_args).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_folder_args() {
        assert_eq!(
            serde_json::to_value(&CreateFolderArgs { name: "Work", parent_id: None }).unwrap(),
            json!({ "name": "Work", "parentId": null })
        );
        assert_eq!(
            serde_json::to_value(&UpdateFolderArgs { id: 5, name: "Home", parent_id: Some(1) }).unwrap(),
            json!({ "id": 5, "name": "Home", "parentId": 1 })
        );
    }
}
