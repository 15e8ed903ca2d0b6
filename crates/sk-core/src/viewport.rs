//! Pan/zoom mapping between device (canvas pixel) and scene coordinates.
//!
//! Zoom is centred on the canvas: scaling by `s` grows the canvas by
//! `canvas·s − canvas`, and half of that growth is subtracted so the centre
//! stays put. The pan offset is stored in scene units.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub pan_offset: Vec2,
    pub scale: f64,
    pub canvas: Size,
    pub min_scale: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl ViewportTransform {
    pub fn new(canvas: Size) -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            scale: 1.0,
            canvas,
            min_scale: 0.1,
        }
    }

    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.scale = self.scale.max(min_scale);
        self
    }

    /// Centring correction: `((canvas · scale) − canvas) / 2`.
    pub fn scale_offset(&self) -> Vec2 {
        let grown = self.canvas.to_vec2() * self.scale - self.canvas.to_vec2();
        grown / 2.0
    }

    pub fn to_scene(&self, device: Point) -> Point {
        let v = device.to_vec2() - self.pan_offset * self.scale + self.scale_offset();
        (v / self.scale).to_point()
    }

    pub fn to_device(&self, scene: Point) -> Point {
        self.device_transform() * scene
    }

    /// Scene → device as an affine map: scale, then translate by
    /// `pan·scale − scaleOffset`.
    pub fn device_transform(&self) -> Affine {
        let translation = self.pan_offset * self.scale - self.scale_offset();
        Affine::translate(translation) * Affine::scale(self.scale)
    }

    /// Add `delta` to the zoom factor, clamped to `min_scale`.
    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = (self.scale + delta).max(self.min_scale);
        log::debug!("zoom -> {:.3}", self.scale);
    }

    pub fn reset_zoom(&mut self) {
        self.scale = 1.0_f64.max(self.min_scale);
    }

    /// Pan by a device-pixel delta.
    pub fn pan_by(&mut self, device_delta: Vec2) {
        self.pan_offset += device_delta / self.scale;
    }

    pub fn resize(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    /// Toolbar label value, `floor(scale·100)`.
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn identity_at_unit_scale() {
        let vt = ViewportTransform::new(Size::new(800.0, 600.0));
        assert_eq!(vt.to_scene(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
        assert_eq!(vt.scale_offset(), Vec2::ZERO);
    }

    #[test]
    fn zoom_keeps_canvas_centre_fixed() {
        let mut vt = ViewportTransform::new(Size::new(800.0, 600.0));
        vt.zoom_by(1.0);
        assert_eq!(vt.scale_offset(), Vec2::new(400.0, 300.0));
        assert!(approx(vt.to_scene(Point::new(400.0, 300.0)), Point::new(400.0, 300.0)));
    }

    #[test]
    fn to_device_inverts_to_scene() {
        let mut vt = ViewportTransform::new(Size::new(640.0, 480.0));
        vt.zoom_by(0.7);
        vt.pan_by(Vec2::new(25.0, -40.0));
        for p in [Point::ZERO, Point::new(31.0, 7.5), Point::new(-100.0, 250.0)] {
            assert!(approx(vt.to_scene(vt.to_device(p)), p));
        }
    }

    #[test]
    fn zoom_is_floored_at_min_scale() {
        let mut vt = ViewportTransform::default();
        for _ in 0..20 {
            vt.zoom_by(-0.1);
        }
        assert_eq!(vt.scale, 0.1);
        assert_eq!(vt.zoom_percent(), 10);
    }

    #[test]
    fn pan_converts_device_delta_to_scene_units() {
        let mut vt = ViewportTransform::default();
        vt.zoom_by(1.0);
        vt.pan_by(Vec2::new(20.0, 10.0));
        assert_eq!(vt.pan_offset, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn zoom_percent_floors() {
        let mut vt = ViewportTransform::default();
        vt.zoom_by(0.2345);
        assert_eq!(vt.zoom_percent(), 123);
    }
}
