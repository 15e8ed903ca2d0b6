//! Freehand stroke → filled outline.
//!
//! Two stages:
//!
//! 1. [`stroke_points`] streamlines the raw pointer samples and annotates
//!    each kept sample with its direction, segment length, and running
//!    length.
//! 2. [`outline_points`] offsets every stroke point to both sides by a
//!    pressure-dependent radius, rounds sharp corners and caps, and returns
//!    the closed polygon (left side, end cap, right side reversed, start
//!    cap).
//!
//! [`encode`] runs both and smooths the polygon into a closed quadratic
//! path by joining each vertex to the midpoint of it and its successor.
//! Pressure is simulated from pointer speed since mice report none.

use kurbo::{BezPath, Point, Vec2};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;
const FIXED_PI: f64 = std::f64::consts::PI + 0.0001;
const DEFAULT_PRESSURE: f64 = 0.5;
/// Points this close to the end of the stroke are dropped (except the last).
const END_NOISE_LENGTH: f64 = 3.0;
const CORNER_STEPS: usize = 13;
const END_CAP_STEPS: usize = 29;

type Cap = SmallVec<[Point; 32]>;

/// Taper/cap settings for one end of the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapOptions {
    /// Length over which the stroke narrows to a point; 0 disables.
    pub taper: f64,
    /// Round cap when not tapered; flat otherwise.
    pub cap: bool,
}

impl Default for CapOptions {
    fn default() -> Self {
        Self {
            taper: 0.0,
            cap: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrokeOptions {
    /// Base diameter of the stroke.
    pub size: f64,
    /// How much pressure affects the width, in `[-1, 1]`.
    pub thinning: f64,
    /// Minimum spacing (relative to `size`) between outline vertices.
    pub smoothing: f64,
    /// How strongly samples are pulled toward the previous point.
    pub streamline: f64,
    /// Maps pressure to width factor.
    pub easing: fn(f64) -> f64,
    pub simulate_pressure: bool,
    /// The stroke is complete: keep the final sample exactly.
    pub last: bool,
    pub start: CapOptions,
    pub end: CapOptions,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 8.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            easing: linear,
            simulate_pressure: true,
            last: true,
            start: CapOptions::default(),
            end: CapOptions::default(),
        }
    }
}

fn linear(t: f64) -> f64 {
    t
}

fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// One streamlined sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub point: Point,
    pub pressure: f64,
    /// Unit vector from this point back to the previous one.
    pub vector: Vec2,
    pub distance: f64,
    pub running_length: f64,
}

/// Encode pointer samples into a closed, fillable outline path.
/// Empty input yields an empty path.
pub fn encode(points: &[Point], options: &StrokeOptions) -> BezPath {
    let stroke = stroke_points(points, options);
    let outline = outline_points(&stroke, options);
    log::trace!(
        "encoded {} samples into {} outline vertices",
        points.len(),
        outline.len()
    );
    outline_to_path(&outline)
}

/// Streamline raw samples into annotated stroke points.
pub fn stroke_points(input: &[Point], options: &StrokeOptions) -> Vec<StrokePoint> {
    if input.is_empty() {
        return Vec::new();
    }

    let t = 0.15 + (1.0 - options.streamline) * 0.85;
    let mut samples: Vec<Point> = input.to_vec();

    // Two samples: subdivide so the streamline has something to work with.
    if samples.len() == 2 {
        let (first, last) = (samples[0], samples[1]);
        samples.truncate(1);
        for i in 1..5 {
            samples.push(first.lerp(last, i as f64 / 4.0));
        }
    }

    // One sample: fake a second so the stroke has a direction.
    if samples.len() == 1 {
        samples.push(samples[0] + Vec2::new(1.0, 1.0));
    }

    let mut out = vec![StrokePoint {
        point: samples[0],
        pressure: DEFAULT_PRESSURE,
        vector: Vec2::new(1.0, 1.0),
        distance: 0.0,
        running_length: 0.0,
    }];

    let max = samples.len() - 1;
    let mut running_length = 0.0;
    let mut reached_minimum = false;

    for (i, &sample) in samples.iter().enumerate().skip(1) {
        let prev = out[out.len() - 1].point;
        let point = if options.last && i == max {
            sample
        } else {
            prev.lerp(sample, t)
        };
        if point == prev {
            continue;
        }

        let distance = point.distance(prev);
        running_length += distance;

        // Skip jitter at the very beginning of the stroke.
        if i < max && !reached_minimum {
            if running_length < options.size {
                continue;
            }
            reached_minimum = true;
        }

        out.push(StrokePoint {
            point,
            pressure: DEFAULT_PRESSURE,
            vector: (prev - point) / distance,
            distance,
            running_length,
        });
    }

    out[0].vector = out.get(1).map(|p| p.vector).unwrap_or(Vec2::ZERO);
    out
}

fn stroke_radius(size: f64, thinning: f64, pressure: f64, easing: fn(f64) -> f64) -> f64 {
    size * easing(0.5 - thinning * (0.5 - pressure))
}

fn simulated_pressure(prev: f64, distance: f64, size: f64) -> f64 {
    let speed = (distance / size).min(1.0);
    let rest = (1.0 - speed).min(1.0);
    (prev + (rest - prev) * (speed * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

/// Perpendicular (rotated a quarter turn).
fn per(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

fn unit(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len == 0.0 { v } else { v / len }
}

fn rotate_around(p: Point, center: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    let d = p - center;
    Point::new(d.x * c - d.y * s + center.x, d.x * s + d.y * c + center.y)
}

/// Offset the stroke to both sides and close it into a polygon.
pub fn outline_points(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Point> {
    let size = options.size;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if size <= 0.0 {
        return Vec::new();
    }

    let total_length = last.running_length;
    let taper_start = options.start.taper.max(0.0);
    let taper_end = options.end.taper.max(0.0);
    let min_distance = (size * options.smoothing).powi(2);

    let mut left: Vec<Point> = Vec::with_capacity(points.len());
    let mut right: Vec<Point> = Vec::with_capacity(points.len());

    // Average the first few pressures so the stroke does not start fat.
    let mut prev_pressure = first.pressure;
    for sp in points.iter().take(10) {
        let pressure = if options.simulate_pressure {
            simulated_pressure(prev_pressure, sp.distance, size)
        } else {
            sp.pressure
        };
        prev_pressure = (prev_pressure + pressure) / 2.0;
    }

    let mut radius = stroke_radius(size, options.thinning, last.pressure, options.easing);
    let mut first_radius: Option<f64> = None;
    let mut prev_vector = first.vector;
    let mut pl = first.point;
    let mut pr = first.point;
    let mut is_prev_sharp = false;

    for (i, sp) in points.iter().enumerate() {
        let is_last = i == points.len() - 1;
        if !is_last && total_length - sp.running_length < END_NOISE_LENGTH {
            continue;
        }

        let mut pressure = sp.pressure;
        if options.thinning != 0.0 {
            if options.simulate_pressure {
                pressure = simulated_pressure(prev_pressure, sp.distance, size);
            }
            radius = stroke_radius(size, options.thinning, pressure, options.easing);
        } else {
            radius = size / 2.0;
        }
        first_radius.get_or_insert(radius);

        let ts = if sp.running_length < taper_start {
            ease_out_quad(sp.running_length / taper_start)
        } else {
            1.0
        };
        let remaining = total_length - sp.running_length;
        let te = if remaining < taper_end {
            ease_out_cubic(remaining / taper_end)
        } else {
            1.0
        };
        radius = (radius * ts.min(te)).max(0.01);

        let next_vector = if is_last { sp.vector } else { points[i + 1].vector };
        let next_dpr = if is_last { 1.0 } else { sp.vector.dot(next_vector) };
        let prev_dpr = sp.vector.dot(prev_vector);

        let is_sharp = prev_dpr < 0.0 && !is_prev_sharp;
        let is_next_sharp = next_dpr < 0.0;

        // Round off sharp corners with a half-turn fan.
        if is_sharp || is_next_sharp {
            let offset = per(prev_vector) * radius;
            for step in 0..=CORNER_STEPS {
                let t = step as f64 / CORNER_STEPS as f64;
                pl = rotate_around(sp.point - offset, sp.point, FIXED_PI * t);
                left.push(pl);
                pr = rotate_around(sp.point + offset, sp.point, -FIXED_PI * t);
                right.push(pr);
            }
            if is_next_sharp {
                is_prev_sharp = true;
            }
            continue;
        }
        is_prev_sharp = false;

        if is_last {
            let offset = per(sp.vector) * radius;
            left.push(sp.point - offset);
            right.push(sp.point + offset);
            continue;
        }

        let offset = per(next_vector.lerp(sp.vector, next_dpr)) * radius;
        let tl = sp.point - offset;
        if i <= 1 || pl.distance_squared(tl) > min_distance {
            left.push(tl);
            pl = tl;
        }
        let tr = sp.point + offset;
        if i <= 1 || pr.distance_squared(tr) > min_distance {
            right.push(tr);
            pr = tr;
        }

        prev_pressure = pressure;
        prev_vector = sp.vector;
    }

    let first_point = first.point;
    let last_point = if points.len() > 1 {
        last.point
    } else {
        first.point + Vec2::new(1.0, 1.0)
    };

    let mut start_cap = Cap::new();
    let mut end_cap = Cap::new();

    if points.len() == 1 {
        // A dot: a full circle around the only point.
        if (taper_start == 0.0 && taper_end == 0.0) || options.last {
            let r = first_radius.unwrap_or(radius);
            let start = first_point + unit(per(first_point - last_point)) * -r;
            return (1..=CORNER_STEPS)
                .map(|step| {
                    let t = step as f64 / CORNER_STEPS as f64;
                    rotate_around(start, first_point, FIXED_PI * 2.0 * t)
                })
                .collect();
        }
    } else {
        if taper_start > 0.0 {
            // Tapered start converges to the first point; no cap.
        } else if let (Some(&l0), Some(&r0)) = (left.first(), right.first()) {
            if options.start.cap {
                for step in 1..=CORNER_STEPS {
                    let t = step as f64 / CORNER_STEPS as f64;
                    start_cap.push(rotate_around(r0, first_point, FIXED_PI * t));
                }
            } else {
                let corners = l0 - r0;
                let a = corners * 0.5;
                let b = corners * 0.51;
                start_cap.extend([
                    first_point - a,
                    first_point - b,
                    first_point + b,
                    first_point + a,
                ]);
            }
        }

        let direction = per(-last.vector);
        if taper_end > 0.0 {
            end_cap.push(last_point);
        } else if options.end.cap {
            let start = last_point + direction * radius;
            for step in 1..END_CAP_STEPS {
                let t = step as f64 / END_CAP_STEPS as f64;
                end_cap.push(rotate_around(start, last_point, FIXED_PI * 3.0 * t));
            }
        } else {
            end_cap.extend([
                last_point + direction * radius,
                last_point + direction * (radius * 0.99),
                last_point - direction * (radius * 0.99),
                last_point - direction * radius,
            ]);
        }
    }

    let mut polygon = left;
    polygon.extend(end_cap);
    polygon.extend(right.into_iter().rev());
    polygon.extend(start_cap);
    polygon
}

/// Close a polygon into a smoothed quadratic path.
pub fn outline_to_path(outline: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = outline.first() else {
        return path;
    };
    path.move_to(first);
    for (i, &p) in outline.iter().enumerate() {
        let next = outline[(i + 1) % outline.len()];
        path.quad_to(p, p.midpoint(next));
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};
    use pretty_assertions::assert_eq;

    fn horizontal(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 5.0, 0.0)).collect()
    }

    #[test]
    fn empty_input_gives_empty_path() {
        let path = encode(&[], &StrokeOptions::default());
        assert!(path.elements().is_empty());
    }

    #[test]
    fn single_point_gives_minimal_closed_outline() {
        let path = encode(&[Point::new(10.0, 10.0)], &StrokeOptions::default());
        let els = path.elements();
        assert!(els.len() > 2);
        assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
        let bbox = path.bounding_box();
        assert!(bbox.width() < 20.0 && bbox.height() < 20.0);
    }

    #[test]
    fn repeated_sample_collapses_to_dot() {
        let p = Point::new(4.0, 4.0);
        let stroke = stroke_points(&[p, p], &StrokeOptions::default());
        assert_eq!(stroke.len(), 1);
        let outline = outline_points(&stroke, &StrokeOptions::default());
        assert_eq!(outline.len(), CORNER_STEPS);
    }

    #[test]
    fn encoding_is_deterministic() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(12.0, 3.0),
            Point::new(30.0, 18.0),
            Point::new(31.0, 40.0),
            Point::new(10.0, 42.0),
        ];
        let opts = StrokeOptions::default();
        assert_eq!(encode(&pts, &opts), encode(&pts, &opts));
    }

    #[test]
    fn complete_stroke_keeps_last_sample() {
        let stroke = stroke_points(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)], &StrokeOptions::default());
        assert!(stroke.len() >= 2);
        assert_eq!(stroke.last().map(|s| s.point), Some(Point::new(100.0, 0.0)));
        assert_eq!(stroke[0].vector, stroke[1].vector);
    }

    #[test]
    fn outline_stays_within_max_radius() {
        let opts = StrokeOptions::default();
        let path = encode(&horizontal(30), &opts);
        let bbox = path.bounding_box();
        // Max radius is size * 0.75 with thinning 0.5 and pressure <= 1.
        let max_r = opts.size * 0.75 + 0.01;
        assert!(bbox.y0 >= -max_r && bbox.y1 <= max_r, "bbox {bbox:?}");
        assert!(bbox.x1 <= 145.0 + max_r);
    }

    #[test]
    fn path_walks_midpoints() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let path = outline_to_path(&square);
        let els = path.elements();
        assert_eq!(els.len(), 6);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[1], PathEl::QuadTo(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
        assert_eq!(els[4], PathEl::QuadTo(Point::new(0.0, 2.0), Point::new(0.0, 1.0)));
        assert_eq!(els[5], PathEl::ClosePath);
    }
}
