//! Hit testing: point → element classification.
//!
//! [`classify`] tells where a scene point falls on one element (a named
//! handle, inside, or outside). [`find_topmost`] walks the scene from the
//! top of the z-order down (last drawn = topmost) and returns the first
//! element that is hit.
//!
//! Handles always take precedence over the interior.

use kurbo::{Point, Rect};
use sk_core::geometry::{is_point_near, on_segment};
use sk_core::{Bounds, Element, Handle, HitTolerance, Position, Shape, Snapshot};

/// Classify `point` against a single element.
pub fn classify(point: Point, element: &Element, tol: &HitTolerance) -> Position {
    let b = element.bounds;
    match &element.shape {
        Shape::Rectangle | Shape::Text { .. } => corner_handle(point, b, tol.corner)
            .map(Position::Handle)
            .unwrap_or_else(|| inside_if(box_contains(b, point))),
        Shape::Circle => corner_handle(point, b, tol.corner)
            .map(Position::Handle)
            .unwrap_or_else(|| inside_if(disc_contains(b, point))),
        Shape::Line => {
            if is_point_near(point, b.start(), tol.corner) {
                Position::Handle(Handle::Start)
            } else if is_point_near(point, b.end(), tol.corner) {
                Position::Handle(Handle::End)
            } else {
                inside_if(on_segment(b.start(), b.end(), point, tol.line))
            }
        }
        Shape::Pencil { points } => inside_if(near_stroke(points, point, tol.pencil)),
    }
}

/// Topmost element under `point` together with its classification.
/// Returns `None` over empty canvas.
pub fn find_topmost<'a>(
    point: Point,
    snapshot: &'a Snapshot,
    tol: &HitTolerance,
) -> Option<(&'a Element, Position)> {
    // Reverse: last painted = topmost
    snapshot.elements().iter().rev().find_map(|e| {
        let position = classify(point, e, tol);
        position.is_hit().then_some((e, position))
    })
}

fn inside_if(hit: bool) -> Position {
    if hit { Position::Inside } else { Position::Outside }
}

/// Corners checked in order tl, tr, br, bl.
fn corner_handle(p: Point, b: Bounds, tolerance: f64) -> Option<Handle> {
    [
        (Handle::TopLeft, Point::new(b.x1, b.y1)),
        (Handle::TopRight, Point::new(b.x2, b.y1)),
        (Handle::BottomRight, Point::new(b.x2, b.y2)),
        (Handle::BottomLeft, Point::new(b.x1, b.y2)),
    ]
    .into_iter()
    .find(|(_, corner)| is_point_near(p, *corner, tolerance))
    .map(|(handle, _)| handle)
}

/// Inclusive interior test. Bounds mid-resize may be unordered.
fn box_contains(b: Bounds, p: Point) -> bool {
    let r = Rect::from_points(b.start(), b.end());
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

fn disc_contains(b: Bounds, p: Point) -> bool {
    b.midpoint().distance(p) <= b.diagonal() / 2.0
}

fn near_stroke(points: &[Point], p: Point, slack: f64) -> bool {
    match points {
        [] => false,
        [only] => on_segment(*only, *only, p, slack),
        _ => points
            .windows(2)
            .any(|pair| on_segment(pair[0], pair[1], p, slack)),
    }
}
