//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub is_starred: bool,
}

impl Note {
    /// Title for display; blank titles read as "Untitled"
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Folder data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_deserializes_backend_shape() {
        let json = r#"{
            "id": 4,
            "title": "Groceries",
            "content": "eggs",
            "created_at": "2026-10-18T09:30:00Z",
            "updated_at": "2026-10-19T10:00:00+00:00",
            "folder_id": null,
            "is_starred": true
        }"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.id, 4);
        assert_eq!(note.folder_id, None);
        assert!(note.is_starred);
        assert!(note.updated_at > note.created_at);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": 1,
            "name": "Work",
            "created_at": "2026-10-18T09:30:00Z",
            "updated_at": "2026-10-18T09:30:00Z"
        }"#;
        let folder: Folder = serde_json::from_str(json).expect("folder should parse");
        assert_eq!(folder.parent_id, None);
    }

    #[test]
    fn test_display_title() {
        let mut note = fixtures::note(1, "  ", None);
        assert_eq!(note.display_title(), "Untitled");
        note.title = "Plan".into();
        assert_eq!(note.display_title(), "Plan");
    }
}
