//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::TauriBackend;
use crate::config::UiConfig;
use crate::dnd::NoteDnd;
use crate::folders::FolderStore;
use crate::keyboard::Shortcut;
use crate::models::Note;
use crate::store::NoteStore;

pub type Notes = NoteStore<TauriBackend>;
pub type Folders = FolderStore<TauriBackend>;

/// Main content views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Editor,
    Starred,
    QuickNotes,
    Search,
    Trash,
    Settings,
}

impl View {
    /// Primary sidebar navigation, in order
    pub const NAV: [View; 4] = [View::Home, View::Starred, View::QuickNotes, View::Search];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Editor => "Editor",
            View::Starred => "Starred",
            View::QuickNotes => "Quick Notes",
            View::Search => "Search",
            View::Trash => "Trash",
            View::Settings => "Settings",
        }
    }

    /// Header title
    pub fn title(self) -> &'static str {
        match self {
            View::Starred => "Starred Notes",
            other => other.label(),
        }
    }
}

/// Sidebar visibility. `open` drives the overlay on narrow viewports,
/// `collapsed` hides the docked sidebar on desktop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub collapsed: bool,
}

impl SidebarState {
    pub fn apply(&mut self, shortcut: Shortcut, is_desktop: bool) {
        match shortcut {
            Shortcut::ToggleSidebar if is_desktop => self.collapsed = !self.collapsed,
            Shortcut::ToggleSidebar => self.open = !self.open,
            Shortcut::CloseSidebar => self.open = false,
            Shortcut::Save => {}
        }
    }
}

/// App-wide signals and stores provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current main view - read
    pub view: ReadSignal<View>,
    /// Current main view - write
    set_view: WriteSignal<View>,
    /// Folder filter for the home view (None = all notes) - read
    pub selected_folder: ReadSignal<Option<i64>>,
    /// Folder filter for the home view - write
    set_selected_folder: WriteSignal<Option<i64>>,
    /// Sidebar visibility - read
    pub sidebar: ReadSignal<SidebarState>,
    /// Sidebar visibility - write
    set_sidebar: WriteSignal<SidebarState>,
    pub notes: Notes,
    pub folders: Folders,
    pub dnd: NoteDnd,
    pub config: UiConfig,
}

impl AppContext {
    pub fn new(notes: Notes, folders: Folders, dnd: NoteDnd, config: UiConfig) -> Self {
        let (view, set_view) = signal(View::Home);
        let (selected_folder, set_selected_folder) = signal(None::<i64>);
        let (sidebar, set_sidebar) = signal(SidebarState::default());
        Self {
            view,
            set_view,
            selected_folder,
            set_selected_folder,
            sidebar,
            set_sidebar,
            notes,
            folders,
            dnd,
            config,
        }
    }

    /// Switch view; on narrow viewports the sidebar overlay closes too
    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
        if !self.config.viewport_is_desktop() {
            self.close_sidebar();
        }
    }

    /// Filter the home view by folder (None = all notes)
    pub fn select_folder(&self, folder_id: Option<i64>) {
        self.set_selected_folder.set(folder_id);
        self.navigate(View::Home);
    }

    pub fn open_note(&self, note: Note) {
        self.notes.set_open(Some(note));
        self.set_view.set(View::Editor);
    }

    /// Create "New Note" in the selected folder and open it in the editor
    pub fn create_note(&self) {
        let ctx = *self;
        let folder_id = self.selected_folder.get_untracked();
        spawn_local(async move {
            if ctx.notes.create("New Note", "", folder_id).await.is_ok() {
                ctx.navigate(View::Editor);
            }
        });
    }

    pub fn handle_shortcut(&self, shortcut: Shortcut) {
        let is_desktop = self.config.viewport_is_desktop();
        self.set_sidebar.update(|s| s.apply(shortcut, is_desktop));
    }

    /// Docked sidebar collapse toggle (desktop button)
    pub fn toggle_sidebar_collapse(&self) {
        self.set_sidebar.update(|s| s.collapsed = !s.collapsed);
    }

    /// Overlay toggle (mobile header button)
    pub fn toggle_sidebar_open(&self) {
        self.set_sidebar.update(|s| s.open = !s.open);
    }

    pub fn close_sidebar(&self) {
        if self.sidebar.get_untracked().open {
            self.set_sidebar.update(|s| s.open = false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_depends_on_viewport() {
        let mut desktop = SidebarState::default();
        desktop.apply(Shortcut::ToggleSidebar, true);
        assert_eq!(desktop, SidebarState { open: false, collapsed: true });

        let mut mobile = SidebarState::default();
        mobile.apply(Shortcut::ToggleSidebar, false);
        assert_eq!(mobile, SidebarState { open: true, collapsed: false });

        mobile.apply(Shortcut::CloseSidebar, false);
        assert!(!mobile.open);
    }

    #[test]
    fn test_escape_leaves_collapse_alone() {
        let mut state = SidebarState { open: false, collapsed: true };
        state.apply(Shortcut::CloseSidebar, true);
        state.apply(Shortcut::Save, true);
        assert_eq!(state, SidebarState { open: false, collapsed: true });
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::Starred.title(), "Starred Notes");
        assert_eq!(View::Starred.label(), "Starred");
        assert_eq!(View::QuickNotes.title(), "Quick Notes");
    }
}
