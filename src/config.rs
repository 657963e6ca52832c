//! UI Configuration
//!
//! Tunables shared through context. This layer has no config files or
//! environment variables; everything here is a compiled-in default.

/// UI tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
    /// Viewports at least this wide get the docked, collapsible sidebar
    pub desktop_breakpoint_px: f64,
    /// Cards in the home page "Recent" strip
    pub recent_notes_limit: usize,
    /// Preview length on note cards, in characters
    pub preview_chars: usize,
    /// How long the editor shows "Saved"
    pub saved_flash_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            desktop_breakpoint_px: 1024.0,
            recent_notes_limit: 6,
            preview_chars: 120,
            saved_flash_ms: 1500,
        }
    }
}

impl UiConfig {
    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width >= self.desktop_breakpoint_px
    }

    /// Current viewport check against the window
    pub fn viewport_is_desktop(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| self.is_desktop(w))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        let config = UiConfig::default();
        assert!(config.is_desktop(1024.0));
        assert!(config.is_desktop(1920.0));
        assert!(!config.is_desktop(800.0));
    }
}
