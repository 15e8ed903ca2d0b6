//! Pointer cursor derived from tool, action, and hover classification.

use crate::tools::ToolKind;
use sk_core::{Handle, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    /// Diagonal resize along tl↔br.
    NwseResize,
    /// Diagonal resize along tr↔bl.
    NeswResize,
    Grab,
    Grabbing,
    Text,
}

impl CursorStyle {
    /// CSS `cursor` value.
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Move => "move",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::NeswResize => "nesw-resize",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::Text => "text",
        }
    }

    /// Cursor for hovering at `hover` with `tool`. `panning` is true while a
    /// pan drag is in progress; `writing` while the text overlay is open.
    pub fn resolve(tool: ToolKind, hover: Position, panning: bool, writing: bool) -> Self {
        match tool {
            ToolKind::Pan if panning => CursorStyle::Grabbing,
            ToolKind::Pan => CursorStyle::Grab,
            ToolKind::Text if !writing => CursorStyle::Text,
            ToolKind::Selection => Self::for_position(hover),
            _ => CursorStyle::Default,
        }
    }

    pub fn for_position(position: Position) -> Self {
        match position {
            Position::Inside => CursorStyle::Move,
            Position::Handle(Handle::TopLeft | Handle::Start | Handle::BottomRight | Handle::End) => {
                CursorStyle::NwseResize
            }
            Position::Handle(Handle::TopRight | Handle::BottomLeft) => CursorStyle::NeswResize,
            Position::Outside => CursorStyle::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_cursor_follows_hover() {
        let at = |p| CursorStyle::resolve(ToolKind::Selection, p, false, false);
        assert_eq!(at(Position::Inside), CursorStyle::Move);
        assert_eq!(at(Position::Handle(Handle::TopLeft)), CursorStyle::NwseResize);
        assert_eq!(at(Position::Handle(Handle::End)), CursorStyle::NwseResize);
        assert_eq!(at(Position::Handle(Handle::BottomLeft)), CursorStyle::NeswResize);
        assert_eq!(at(Position::Outside), CursorStyle::Default);
    }

    #[test]
    fn pan_tool_grabs() {
        assert_eq!(
            CursorStyle::resolve(ToolKind::Pan, Position::Inside, false, false).as_css(),
            "grab"
        );
        assert_eq!(
            CursorStyle::resolve(ToolKind::Pan, Position::Outside, true, false).as_css(),
            "grabbing"
        );
    }

    #[test]
    fn text_tool_shows_caret_until_writing() {
        assert_eq!(
            CursorStyle::resolve(ToolKind::Text, Position::Outside, false, false),
            CursorStyle::Text
        );
        assert_eq!(
            CursorStyle::resolve(ToolKind::Text, Position::Outside, false, true),
            CursorStyle::Default
        );
    }

    #[test]
    fn drawing_tools_ignore_hover() {
        assert_eq!(
            CursorStyle::resolve(ToolKind::Rectangle, Position::Inside, false, false),
            CursorStyle::Default
        );
    }
}
