//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. Lives in Rust
//! so every host (browser bridge, tests) shares one table.

use crate::input::Modifiers;
use crate::tools::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Tool(ToolKind),
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

/// Resolves key events into shortcut actions.
///
/// `meta` is ⌘ on macOS and `ctrl` plays the same role elsewhere, so both
/// count as the command key.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.cmd();

        if cmd && modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                "+" => Some(ShortcutAction::ZoomIn),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                "0" => Some(ShortcutAction::ZoomReset),
                _ => None,
            };
        }

        if modifiers.alt {
            return None;
        }

        let tool = match key {
            "v" | "V" => ToolKind::Selection,
            "l" | "L" => ToolKind::Line,
            "r" | "R" => ToolKind::Rectangle,
            "o" | "O" => ToolKind::Circle,
            "p" | "P" => ToolKind::Pencil,
            "t" | "T" => ToolKind::Text,
            "h" | "H" => ToolKind::Pan,
            _ => return None,
        };
        Some(ShortcutAction::Tool(tool))
    }
}
