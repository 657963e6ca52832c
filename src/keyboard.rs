//! Keyboard Shortcuts

/// App-level shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Mod+B
    ToggleSidebar,
    /// Escape
    CloseSidebar,
    /// Mod+S (editor only)
    Save,
}

/// Map a key press to a shortcut. "Mod" is Ctrl, or Cmd on macOS.
pub fn match_shortcut(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    let modifier = ctrl || meta;
    match key {
        "Escape" => Some(Shortcut::CloseSidebar),
        k if modifier && k.eq_ignore_ascii_case("b") => Some(Shortcut::ToggleSidebar),
        k if modifier && k.eq_ignore_ascii_case("s") => Some(Shortcut::Save),
        _ => None,
    }
}

pub fn shortcut_of(ev: &web_sys::KeyboardEvent) -> Option<Shortcut> {
    match_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_shortcut() {
        assert_eq!(match_shortcut("b", true, false), Some(Shortcut::ToggleSidebar));
        assert_eq!(match_shortcut("B", false, true), Some(Shortcut::ToggleSidebar));
        assert_eq!(match_shortcut("s", true, false), Some(Shortcut::Save));
        assert_eq!(match_shortcut("Escape", false, false), Some(Shortcut::CloseSidebar));
        assert_eq!(match_shortcut("b", false, false), None);
        assert_eq!(match_shortcut("s", false, false), None);
        assert_eq!(match_shortcut("x", true, false), None);
    }
}
