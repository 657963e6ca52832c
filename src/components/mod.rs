//! UI Components
//!
//! Leptos components for the shell, pages and folder tree.

mod coming_soon;
mod delete_confirm_button;
mod drag_overlay;
mod folder_dialog;
mod folder_tree;
mod header;
mod home_page;
mod note_card;
mod note_editor;
mod quick_stats;
mod sidebar;
mod starred_page;

pub use coming_soon::ComingSoon;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_overlay::DragOverlay;
pub use folder_dialog::{FolderDialog, FolderDialogMode};
pub use folder_tree::FolderTree;
pub use header::{Header, SidebarToggle};
pub use home_page::HomePage;
pub use note_card::{card_key, NoteCard};
pub use note_editor::NoteEditor;
pub use quick_stats::QuickStats;
pub use sidebar::Sidebar;
pub use starred_page::StarredPage;
