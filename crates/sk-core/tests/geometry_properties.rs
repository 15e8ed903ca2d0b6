//! Property-based tests for the pure geometry layer:
//!
//! 1. Normalization is idempotent and orders rectangles min/max
//! 2. Normalized lines start at the leftmost (then topmost) endpoint
//! 3. A bottom-right drag there and back restores the original bounds
//! 4. Device/scene mapping round-trips under any pan and zoom
//! 5. Freehand outlines are deterministic and stay near their samples

use kurbo::{Point, Shape as _, Size, Vec2};
use proptest::prelude::*;
use sk_core::freehand::{StrokeOptions, encode};
use sk_core::{Bounds, Element, ElementKind, Handle, Position, ViewportTransform, normalize, resize};

// ── Strategies ──────────────────────────────────────────────────────────

fn coord() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn bounds() -> impl Strategy<Value = Bounds> {
    (coord(), coord(), coord(), coord()).prop_map(|(a, b, c, d)| Bounds::new(a, b, c, d))
}

fn element(kind: ElementKind, b: Bounds) -> Element {
    Element::create(kind, b.start()).with_bounds(b)
}

proptest! {
    #[test]
    fn rectangle_normalization_is_ordered_and_idempotent(b in bounds()) {
        let once = normalize(&element(ElementKind::Rectangle, b));
        prop_assert!(once.bounds.x1 <= once.bounds.x2);
        prop_assert!(once.bounds.y1 <= once.bounds.y2);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn line_normalization_keeps_endpoints(b in bounds()) {
        let n = normalize(&element(ElementKind::Line, b)).bounds;
        let before = [b.start(), b.end()];
        prop_assert!(before.contains(&n.start()) && before.contains(&n.end()));
        prop_assert!(n.x1 < n.x2 || (n.x1 == n.x2 && n.y1 <= n.y2));
    }

    #[test]
    fn bottom_right_drag_there_and_back(b in bounds(), p in point()) {
        let br = Position::Handle(Handle::BottomRight);
        let dragged = resize(b, p, br);
        prop_assert_eq!(dragged.start(), b.start());
        prop_assert_eq!(resize(dragged, b.end(), br), b);
    }

    #[test]
    fn device_scene_roundtrip(
        p in point(),
        zoom in -0.9f64..4.0,
        pan in (coord(), coord()),
    ) {
        let mut vt = ViewportTransform::new(Size::new(800.0, 600.0));
        vt.zoom_by(zoom);
        vt.pan_by(Vec2::new(pan.0, pan.1));
        let back = vt.to_scene(vt.to_device(p));
        prop_assert!((back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn freehand_outline_is_deterministic_and_local(
        pts in prop::collection::vec(point(), 1..40),
    ) {
        let opts = StrokeOptions::default();
        let a = encode(&pts, &opts);
        prop_assert_eq!(&a, &encode(&pts, &opts));

        let Some(samples) = Bounds::of_points(&pts) else {
            return Ok(());
        };
        // Radius never exceeds 0.75·size; short strokes may cap around a point
        // up to 3 units from the first sample.
        let margin = opts.size * 0.75 + 4.0;
        let bbox = a.bounding_box();
        prop_assert!(bbox.x0 >= samples.x1 - margin && bbox.x1 <= samples.x2 + margin);
        prop_assert!(bbox.y0 >= samples.y1 - margin && bbox.y1 <= samples.y2 + margin);
    }
}
