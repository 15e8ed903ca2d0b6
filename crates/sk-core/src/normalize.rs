//! Canonical corner/endpoint ordering, applied once a draw or resize
//! gesture is released.

use crate::model::{Bounds, Element, ElementKind, Shape};

/// Rewrite only `x1,y1,x2,y2` into canonical order for the element kind.
///
/// - rectangle/text: `(x1,y1)` becomes the min corner, `(x2,y2)` the max.
/// - line: the leftmost endpoint (topmost when vertical) becomes `start`.
/// - circle/pencil: unchanged.
pub fn normalize(element: &Element) -> Element {
    match element.shape {
        Shape::Rectangle | Shape::Text { .. } => element.with_bounds(ordered_box(element.bounds)),
        Shape::Line => element.with_bounds(ordered_line(element.bounds)),
        Shape::Circle | Shape::Pencil { .. } => element.clone(),
    }
}

/// Only line and rectangle drawings are canonicalized on release.
pub fn adjustment_required(kind: ElementKind) -> bool {
    matches!(kind, ElementKind::Line | ElementKind::Rectangle)
}

fn ordered_box(b: Bounds) -> Bounds {
    Bounds::new(b.x1.min(b.x2), b.y1.min(b.y2), b.x1.max(b.x2), b.y1.max(b.y2))
}

fn ordered_line(b: Bounds) -> Bounds {
    let is_vertical = b.x1 == b.x2;
    if b.x1 < b.x2 || (is_vertical && b.y1 < b.y2) {
        b
    } else {
        Bounds::new(b.x2, b.y2, b.x1, b.y1)
    }
}
