//! Render descriptors: what to draw for each element, in scene space.
//!
//! Descriptors are derived from the current geometry every time the host
//! asks for them, so they never drift from the model. The host applies
//! the viewport's device transform once and draws the list in order.

use kurbo::{BezPath, Circle, Line, Point, Rect};
use sk_core::freehand::{self, StrokeOptions};
use sk_core::{Element, ElementId, FontSpec, Shape, Snapshot};

/// Resolved geometry for one element.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    /// Filled freehand outline.
    Outline(BezPath),
    Text {
        content: String,
        origin: Point,
        font: FontSpec,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    pub id: ElementId,
    pub drawable: Drawable,
}

/// Synchronous text measurement, supplied by the host.
pub trait TextMeasure {
    /// Advance width of `text` rendered in `font`, in scene units.
    fn text_width(&self, text: &str, font: &FontSpec) -> f64;
}

/// Fixed advance per character. Stands in for a real font in headless use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Advance per char as a fraction of the font size.
    pub advance: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, font: &FontSpec) -> f64 {
        text.chars().count() as f64 * font.size_px * self.advance
    }
}

pub fn describe(element: &Element, stroke: &StrokeOptions, font: &FontSpec) -> RenderDescriptor {
    let b = element.bounds;
    let drawable = match &element.shape {
        Shape::Line => Drawable::Line(Line::new(b.start(), b.end())),
        Shape::Rectangle => Drawable::Rect(Rect::from_points(b.start(), b.end())),
        Shape::Circle => Drawable::Circle(Circle::new(b.midpoint(), b.diagonal() / 2.0)),
        Shape::Pencil { points } => Drawable::Outline(freehand::encode(points, stroke)),
        Shape::Text { content } => Drawable::Text {
            content: content.clone(),
            origin: b.start(),
            font: font.clone(),
        },
    };
    RenderDescriptor {
        id: element.id,
        drawable,
    }
}

/// Descriptors for the whole scene in z-order, leaving out `skip`
/// (the element whose text is being edited in the overlay).
pub fn render_list(
    snapshot: &Snapshot,
    skip: Option<ElementId>,
    stroke: &StrokeOptions,
    font: &FontSpec,
) -> Vec<RenderDescriptor> {
    let list: Vec<_> = snapshot
        .elements()
        .iter()
        .filter(|e| Some(e.id) != skip)
        .map(|e| describe(e, stroke, font))
        .collect();
    log::trace!("render list: {} of {} elements", list.len(), snapshot.len());
    list
}
