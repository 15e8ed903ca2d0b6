//! Per-session editor tunables.

use crate::freehand::StrokeOptions;
use serde::{Deserialize, Serialize};

/// Hit-test tolerances, in scene units. Not scaled by zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitTolerance {
    /// Per-axis distance to a corner or endpoint that counts as a handle.
    pub corner: f64,
    /// Slack of the collinearity test for lines.
    pub line: f64,
    /// Slack of the collinearity test for each pencil segment.
    pub pencil: f64,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            corner: 10.0,
            line: 1.0,
            pencil: 5.0,
        }
    }
}

/// Font used for text elements and the text overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    pub family: String,
}

impl FontSpec {
    /// CSS `font` shorthand, e.g. `24px sans-serif`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }

    /// Same family at `size_px * scale`, for the zoomed overlay.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            size_px: self.size_px * scale,
            family: self.family.clone(),
        }
    }

    /// Text elements are single-line: height equals the font size.
    pub fn line_height(&self) -> f64 {
        self.size_px
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size_px: 24.0,
            family: "sans-serif".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub hit: HitTolerance,
    /// Max pointer travel for a selection press/release to count as a click.
    pub click_slop: f64,
    /// Lower bound of the zoom factor.
    pub min_scale: f64,
    /// Zoom delta per zoom-in/zoom-out step.
    pub zoom_step: f64,
    /// Multiplier from wheel `dy` to zoom delta.
    pub wheel_zoom_factor: f64,
    pub stroke: StrokeOptions,
    pub font: FontSpec,
    /// Maximum number of history snapshots kept; `None` is unbounded.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit: HitTolerance::default(),
            click_slop: 1.0,
            min_scale: 0.1,
            zoom_step: 0.1,
            wheel_zoom_factor: -0.003,
            stroke: StrokeOptions::default(),
            font: FontSpec::default(),
            history_limit: None,
        }
    }
}
