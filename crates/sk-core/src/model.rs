//! Scene data model.
//!
//! A scene is an ordered list of [`Element`]s (insertion order = z-order,
//! back to front). Each element is a closed variant over the five shape
//! kinds, sharing one `x1,y1,x2,y2` bounding record whose meaning depends
//! on the kind:
//!
//! | Kind        | `(x1,y1)`            | `(x2,y2)`              |
//! |-------------|----------------------|------------------------|
//! | `line`      | start endpoint       | end endpoint           |
//! | `rectangle` | one corner           | opposite corner        |
//! | `circle`    | bounding-box corner  | opposite corner        |
//! | `pencil`    | min of sample bbox   | max of sample bbox     |
//! | `text`      | anchor (top-left)    | anchor + measured size |
//!
//! [`Snapshot`]s are value-semantic: editing helpers always return a fresh
//! snapshot and never touch one that is already stored in history.

use crate::id::ElementId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Raw two-corner geometry of an element. Not necessarily ordered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Bounds {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Zero-size bounds at a single point.
    pub const fn at(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Bounding box of a point list; `None` when empty.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self::at(*first);
        for p in &points[1..] {
            b.x1 = b.x1.min(p.x);
            b.y1 = b.y1.min(p.y);
            b.x2 = b.x2.max(p.x);
            b.y2 = b.y2.max(p.y);
        }
        Some(b)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn midpoint(&self) -> Point {
        self.start().midpoint(self.end())
    }

    /// Signed extent along x (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed extent along y (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Length of the `(x1,y1)`–`(x2,y2)` diagonal.
    pub fn diagonal(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Same signed extent, with `(x1,y1)` moved to `origin`.
    pub fn moved_to(&self, origin: Point) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + self.width(),
            origin.y + self.height(),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }
}

// ─── Element ─────────────────────────────────────────────────────────────

/// Element tag, one per shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Rectangle,
    Circle,
    Pencil,
    Text,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
            ElementKind::Pencil => "pencil",
            ElementKind::Text => "text",
        }
    }
}

/// Variant-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line,
    Rectangle,
    Circle,
    /// Freehand stroke. `points` is never empty.
    Pencil { points: Vec<Point> },
    Text { content: String },
}

/// One placed shape or text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub bounds: Bounds,
    pub shape: Shape,
}

impl Element {
    /// Create a zero-size element of `kind` at `origin`, as placed by a
    /// pointer-down. Pencil strokes are seeded with `origin` as first sample.
    pub fn new(kind: ElementKind, id: ElementId, origin: Point) -> Self {
        let shape = match kind {
            ElementKind::Line => Shape::Line,
            ElementKind::Rectangle => Shape::Rectangle,
            ElementKind::Circle => Shape::Circle,
            ElementKind::Pencil => Shape::Pencil {
                points: vec![origin],
            },
            ElementKind::Text => Shape::Text {
                content: String::new(),
            },
        };
        Self {
            id,
            bounds: Bounds::at(origin),
            shape,
        }
    }

    /// Same as [`Element::new`] with a fresh kind-prefixed ID.
    pub fn create(kind: ElementKind, origin: Point) -> Self {
        Self::new(kind, ElementId::with_prefix(kind.name()), origin)
    }

    pub fn kind(&self) -> ElementKind {
        match self.shape {
            Shape::Line => ElementKind::Line,
            Shape::Rectangle => ElementKind::Rectangle,
            Shape::Circle => ElementKind::Circle,
            Shape::Pencil { .. } => ElementKind::Pencil,
            Shape::Text { .. } => ElementKind::Text,
        }
    }

    pub fn points(&self) -> Option<&[Point]> {
        match &self.shape {
            Shape::Pencil { points } => Some(points),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { content } => Some(content),
            _ => None,
        }
    }

    pub fn with_bounds(&self, bounds: Bounds) -> Self {
        Self {
            bounds,
            ..self.clone()
        }
    }

    /// Replace a pencil stroke's samples and refit its bounds.
    /// Ignored for non-pencil elements and for an empty list.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        let Some(bounds) = Bounds::of_points(&points) else {
            log::warn!("refusing to empty the stroke of {}", self.id);
            return self.clone();
        };
        match self.shape {
            Shape::Pencil { .. } => Self {
                id: self.id,
                bounds,
                shape: Shape::Pencil { points },
            },
            _ => self.clone(),
        }
    }

    /// Append one sample to a pencil stroke (the live-drawing path).
    pub fn with_appended_point(&self, p: Point) -> Self {
        match &self.shape {
            Shape::Pencil { points } => {
                let mut points = points.clone();
                points.push(p);
                self.with_points(points)
            }
            _ => self.clone(),
        }
    }

    /// Set a text element's content. Ignored for other kinds.
    pub fn with_text(&self, content: &str) -> Self {
        match self.shape {
            Shape::Text { .. } => Self {
                shape: Shape::Text {
                    content: content.to_string(),
                },
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}

// ─── Snapshot ────────────────────────────────────────────────────────────

/// One immutable scene state. Cloning is cheap (shared storage); every
/// `with_*` edit copies the element list before changing it.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    elements: Arc<Vec<Element>>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self {
            elements: Arc::new(elements),
        }
    }

    /// Elements in z-order, back to front.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// New snapshot with `element` on top of the z-order.
    pub fn with_appended(&self, element: Element) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend(self.elements.iter().cloned());
        elements.push(element);
        Self::from_elements(elements)
    }

    /// New snapshot with the element sharing `element.id` replaced,
    /// keeping its z-position. Unknown IDs yield an unchanged copy.
    pub fn with_replaced(&self, element: Element) -> Self {
        let Some(index) = self.elements.iter().position(|e| e.id == element.id) else {
            log::warn!("no element {} in snapshot, replace skipped", element.id);
            return self.clone();
        };
        let mut elements = self.elements.as_ref().clone();
        elements[index] = element;
        Self::from_elements(elements)
    }

    /// Whether both snapshots share the same storage.
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.elements == other.elements
    }
}
