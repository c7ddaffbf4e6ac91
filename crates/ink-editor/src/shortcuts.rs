//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s, resolved by
//! the session on key-down. Mode keys follow the toolbar: P draw, V
//! select, E erase, Space (held) pan.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    ToolSelect,
    ToolDraw,
    ToolErase,
    /// Pan while Space is held; key-up reverts to Select.
    PanStart,

    // ── Edit ──
    /// Pop the most recently committed shape.
    Undo,
    /// Remove the shape targeted in Select mode.
    DeleteTarget,

    // ── UI ──
    /// Invoke the host color picker.
    PickColor,
    /// Toggle toolbar visibility.
    ToggleUi,
}

/// Resolves key events into shortcut actions.
///
/// `ctrl` and `meta` are interchangeable, so ⌘Z and Ctrl+Z both undo.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"p"`, `"Delete"`,
    /// `" "` for Space). Returns `None` for unbound combos.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.ctrl || modifiers.meta;

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                _ => None,
            };
        }

        match key {
            "v" | "V" => Some(ShortcutAction::ToolSelect),
            "p" | "P" => Some(ShortcutAction::ToolDraw),
            "e" | "E" => Some(ShortcutAction::ToolErase),
            " " => Some(ShortcutAction::PanStart),
            "i" | "I" => Some(ShortcutAction::PickColor),
            "`" => Some(ShortcutAction::ToggleUi),
            "Delete" | "Backspace" => Some(ShortcutAction::DeleteTarget),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_tool_shortcuts() {
        assert_eq!(
            ShortcutMap::resolve("p", Modifiers::NONE),
            Some(ShortcutAction::ToolDraw)
        );
        assert_eq!(
            ShortcutMap::resolve("V", Modifiers::NONE),
            Some(ShortcutAction::ToolSelect)
        );
        assert_eq!(
            ShortcutMap::resolve("e", Modifiers::NONE),
            Some(ShortcutAction::ToolErase)
        );
        assert_eq!(
            ShortcutMap::resolve(" ", Modifiers::NONE),
            Some(ShortcutAction::PanStart)
        );
    }

    #[test]
    fn resolve_undo() {
        assert_eq!(
            ShortcutMap::resolve("z", Modifiers::CTRL),
            Some(ShortcutAction::Undo)
        );
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(
            ShortcutMap::resolve("Z", meta),
            Some(ShortcutAction::Undo)
        );
        // plain z is unbound
        assert_eq!(ShortcutMap::resolve("z", Modifiers::NONE), None);
    }

    #[test]
    fn resolve_ui_keys() {
        assert_eq!(
            ShortcutMap::resolve("i", Modifiers::NONE),
            Some(ShortcutAction::PickColor)
        );
        assert_eq!(
            ShortcutMap::resolve("`", Modifiers::NONE),
            Some(ShortcutAction::ToggleUi)
        );
        assert_eq!(
            ShortcutMap::resolve("Delete", Modifiers::NONE),
            Some(ShortcutAction::DeleteTarget)
        );
    }

    #[test]
    fn resolve_unknown_key() {
        assert_eq!(ShortcutMap::resolve("q", Modifiers::NONE), None);
        assert_eq!(ShortcutMap::resolve("7", Modifiers::NONE), None);
        assert_eq!(ShortcutMap::resolve("p", Modifiers::CTRL), None);
    }
}
