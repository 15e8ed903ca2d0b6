pub mod config;
pub mod freehand;
pub mod geometry;
pub mod handle;
pub mod id;
pub mod model;
pub mod normalize;
pub mod resize;
pub mod viewport;

pub use config::{EditorConfig, FontSpec, HitTolerance};
pub use freehand::{CapOptions, StrokeOptions};
pub use handle::{Handle, Position};
pub use id::ElementId;
pub use model::*;
pub use normalize::{adjustment_required, normalize};
pub use resize::{resize, resize_circle};
pub use viewport::ViewportTransform;

// Re-export kurbo primitives so downstream crates share one geometry vocabulary
pub use kurbo::{Affine, BezPath, Point, Size, Vec2};
