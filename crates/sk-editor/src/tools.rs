//! Tool selection.
//!
//! The active tool decides what a pointer-down starts:
//!
//! | Tool        | Pointer-down                               |
//! |-------------|--------------------------------------------|
//! | `selection` | move or resize the element under the pointer |
//! | `line`, `rectangle`, `circle`, `pencil` | draw a new element |
//! | `text`      | place a label and open the text overlay    |
//! | `pan`       | drag the viewport                          |

use sk_core::ElementKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    Selection,
    #[default]
    Line,
    Rectangle,
    Circle,
    Pencil,
    Text,
    Pan,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Selection,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Pencil,
        ToolKind::Text,
        ToolKind::Pan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Selection => "selection",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Pencil => "pencil",
            ToolKind::Text => "text",
            ToolKind::Pan => "pan",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Element kind created by a drawing tool.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Circle => Some(ElementKind::Circle),
            ToolKind::Pencil => Some(ElementKind::Pencil),
            ToolKind::Text => Some(ElementKind::Text),
            ToolKind::Selection | ToolKind::Pan => None,
        }
    }
}
