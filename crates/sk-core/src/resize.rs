//! Handle-driven resizing.

use crate::handle::{Handle, Position};
use crate::model::Bounds;
use kurbo::Point;
use std::f64::consts::SQRT_2;

/// Move the corner named by `position` to `pointer`, keeping the opposite
/// corner fixed. Non-handle positions return `bounds` unchanged.
pub fn resize(bounds: Bounds, pointer: Point, position: Position) -> Bounds {
    let Bounds { x1, y1, x2, y2 } = bounds;
    let Some(handle) = position.handle() else {
        log::debug!("resize with non-handle position {}", position.name());
        return bounds;
    };
    match handle {
        Handle::TopLeft | Handle::Start => Bounds::new(pointer.x, pointer.y, x2, y2),
        Handle::TopRight => Bounds::new(x1, pointer.y, pointer.x, y2),
        Handle::BottomLeft => Bounds::new(pointer.x, y1, x2, pointer.y),
        Handle::BottomRight | Handle::End => Bounds::new(x1, y1, pointer.x, pointer.y),
    }
}

/// Radius-driven circle resize.
///
/// The radius is the distance from the current bounding-box midpoint to
/// the pointer; the result is a square box of side `radius·√2` anchored at
/// the original `(x1,y1)`.
pub fn resize_circle(bounds: Bounds, pointer: Point) -> Bounds {
    let radius = bounds.midpoint().distance(pointer);
    let side = radius * SQRT_2;
    Bounds::new(bounds.x1, bounds.y1, bounds.x1 + side, bounds.y1 + side)
}
