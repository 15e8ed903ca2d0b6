//! Hit classifications and named resize handles.

use serde::{Deserialize, Serialize};

/// A named resize affordance on an element's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    /// Line endpoint `(x1,y1)`.
    Start,
    /// Line endpoint `(x2,y2)`.
    End,
}

impl Handle {
    pub fn name(self) -> &'static str {
        match self {
            Handle::TopLeft => "tl",
            Handle::TopRight => "tr",
            Handle::BottomRight => "br",
            Handle::BottomLeft => "bl",
            Handle::Start => "start",
            Handle::End => "end",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tl" => Some(Handle::TopLeft),
            "tr" => Some(Handle::TopRight),
            "br" => Some(Handle::BottomRight),
            "bl" => Some(Handle::BottomLeft),
            "start" => Some(Handle::Start),
            "end" => Some(Handle::End),
            _ => None,
        }
    }
}

/// Where a point falls relative to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Handle(Handle),
    Inside,
    Outside,
}

impl Position {
    pub fn name(self) -> &'static str {
        match self {
            Position::Handle(h) => h.name(),
            Position::Inside => "inside",
            Position::Outside => "outside",
        }
    }

    pub fn handle(self) -> Option<Handle> {
        match self {
            Position::Handle(h) => Some(h),
            _ => None,
        }
    }

    pub fn is_hit(self) -> bool {
        !matches!(self, Position::Outside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for h in [
            Handle::TopLeft,
            Handle::TopRight,
            Handle::BottomRight,
            Handle::BottomLeft,
            Handle::Start,
            Handle::End,
        ] {
            assert_eq!(Handle::from_name(h.name()), Some(h));
        }
        assert_eq!(Handle::from_name("up"), None);
    }

    #[test]
    fn handle_positions_are_hits() {
        assert!(Position::Handle(Handle::End).is_hit());
        assert!(Position::Inside.is_hit());
        assert!(!Position::Outside.is_hit());
        assert_eq!(Position::Inside.handle(), None);
    }
}
