//! Point/segment primitives shared by the hit tester and the resize engine.

use kurbo::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Per-axis proximity: both `|dx|` and `|dy|` strictly below `tolerance`.
pub fn is_point_near(p: Point, target: Point, tolerance: f64) -> bool {
    (p.x - target.x).abs() < tolerance && (p.y - target.y).abs() < tolerance
}

/// Whether `c` lies on the segment `a`–`b`, within `slack`.
///
/// Compares the segment length against the detour through `c`. The slack
/// absorbs pixel rounding, so points a hair off the line still count.
pub fn on_segment(a: Point, b: Point, c: Point, slack: f64) -> bool {
    let detour = distance(a, c) + distance(b, c);
    (distance(a, b) - detour).abs() < slack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn near_is_strict_per_axis() {
        let target = Point::new(10.0, 10.0);
        assert!(is_point_near(Point::new(19.9, 0.1), target, 10.0));
        assert!(!is_point_near(Point::new(20.0, 10.0), target, 10.0));
        assert!(!is_point_near(Point::new(10.0, 0.0), target, 10.0));
    }

    #[test]
    fn on_segment_accepts_midpoint_and_rejects_offset() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert!(on_segment(a, b, Point::new(50.0, 0.0), 1.0));
        assert!(on_segment(a, b, Point::new(50.0, 2.0), 1.0));
        assert!(!on_segment(a, b, Point::new(50.0, 10.0), 1.0));
        // Beyond the endpoint the detour grows linearly.
        assert!(!on_segment(a, b, Point::new(110.0, 0.0), 1.0));
    }

    #[test]
    fn on_segment_degenerate_segment() {
        let a = Point::new(5.0, 5.0);
        assert!(on_segment(a, a, Point::new(5.5, 5.0), 5.0));
        assert!(!on_segment(a, a, Point::new(9.0, 5.0), 5.0));
    }
}
