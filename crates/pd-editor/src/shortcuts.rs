//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The keyboard
//! collaborator feeds raw key events through `ShortcutMap::resolve` and
//! dispatches the resulting action to the session; the map itself never
//! touches editor state.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Delete,
    Duplicate,
    Undo,
    Redo,
    SelectNext,
    SelectPrev,
    Deselect,
    ShowHelp,
}

/// One row of the shortcut help table.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutHelp {
    pub keys: &'static str,
    pub action: &'static str,
}

/// The help table the presentation collaborator renders for `?`.
pub const HELP: &[ShortcutHelp] = &[
    ShortcutHelp {
        keys: "Del / Backspace",
        action: "Delete selected component",
    },
    ShortcutHelp {
        keys: "Mod+D",
        action: "Duplicate selected component",
    },
    ShortcutHelp {
        keys: "Mod+Z",
        action: "Undo last action",
    },
    ShortcutHelp {
        keys: "Mod+Shift+Z / Mod+Y",
        action: "Redo action",
    },
    ShortcutHelp {
        keys: "Up / Down",
        action: "Navigate between components",
    },
    ShortcutHelp {
        keys: "Esc",
        action: "Deselect component",
    },
    ShortcutHelp {
        keys: "?",
        action: "Show this help",
    },
];

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘, elsewhere
/// `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// While a text-entry field has focus (`in_text_field`) every shortcut
    /// is suppressed so typing never mutates the canvas. Returns `None`
    /// for unbound combos.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        in_text_field: bool,
    ) -> Option<ShortcutAction> {
        if in_text_field {
            return None;
        }
        let cmd = ctrl || meta;

        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "d" | "D" => Some(ShortcutAction::Duplicate),
                _ => None,
            };
        }

        if shift {
            // `?` needs Shift on most layouts; the event still reports "?".
            return match key {
                "?" => Some(ShortcutAction::ShowHelp),
                _ => None,
            };
        }

        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "ArrowDown" if !alt => Some(ShortcutAction::SelectNext),
            "ArrowUp" if !alt => Some(ShortcutAction::SelectPrev),
            "Escape" => Some(ShortcutAction::Deselect),
            "?" => Some(ShortcutAction::ShowHelp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(key: &str) -> Option<ShortcutAction> {
        ShortcutMap::resolve(key, false, false, false, false, false)
    }

    #[test]
    fn resolve_delete() {
        assert_eq!(plain("Delete"), Some(ShortcutAction::Delete));
        assert_eq!(plain("Backspace"), Some(ShortcutAction::Delete));
    }

    #[test]
    fn resolve_undo_redo() {
        // Ctrl+Z and Cmd+Z → Undo
        assert_eq!(
            ShortcutMap::resolve("z", true, false, false, false, false),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            ShortcutMap::resolve("z", false, false, false, true, false),
            Some(ShortcutAction::Undo)
        );
        // Mod+Shift+Z and Mod+Y → Redo
        assert_eq!(
            ShortcutMap::resolve("Z", true, true, false, false, false),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            ShortcutMap::resolve("y", false, false, false, true, false),
            Some(ShortcutAction::Redo)
        );
    }

    #[test]
    fn resolve_duplicate() {
        assert_eq!(
            ShortcutMap::resolve("d", true, false, false, false, false),
            Some(ShortcutAction::Duplicate)
        );
        assert_eq!(plain("d"), None, "bare d is not bound");
    }

    #[test]
    fn resolve_navigation_and_deselect() {
        assert_eq!(plain("ArrowDown"), Some(ShortcutAction::SelectNext));
        assert_eq!(plain("ArrowUp"), Some(ShortcutAction::SelectPrev));
        assert_eq!(plain("Escape"), Some(ShortcutAction::Deselect));

        // Alt+arrow is left to the browser.
        assert_eq!(
            ShortcutMap::resolve("ArrowDown", false, false, true, false, false),
            None
        );
    }

    #[test]
    fn resolve_help_with_and_without_shift() {
        assert_eq!(plain("?"), Some(ShortcutAction::ShowHelp));
        assert_eq!(
            ShortcutMap::resolve("?", false, true, false, false, false),
            Some(ShortcutAction::ShowHelp)
        );
        assert_eq!(
            ShortcutMap::resolve("?", true, false, false, false, false),
            None,
            "mod+? is unbound"
        );
    }

    #[test]
    fn text_field_focus_suppresses_everything() {
        assert_eq!(
            ShortcutMap::resolve("Delete", false, false, false, false, true),
            None
        );
        assert_eq!(
            ShortcutMap::resolve("z", true, false, false, false, true),
            None
        );
    }

    #[test]
    fn unknown_keys_are_unbound() {
        assert_eq!(plain("q"), None);
        assert_eq!(plain("7"), None);
        assert_eq!(ShortcutMap::resolve("q", true, true, true, true, false), None);
    }

    #[test]
    fn help_table_covers_every_action() {
        assert_eq!(HELP.len(), 7);
        assert!(HELP.iter().any(|h| h.action.contains("Undo")));
        assert!(HELP.iter().any(|h| h.action.contains("Redo")));
    }
}
