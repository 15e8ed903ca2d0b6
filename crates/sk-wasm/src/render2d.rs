//! Canvas2D painter for render descriptors.
//!
//! Draws the descriptor list under the viewport's device transform. Shapes
//! are stroked, freehand outlines are filled, text is drawn top-anchored.

use kurbo::{Affine, BezPath, PathEl};
use sk_render::{Drawable, RenderDescriptor};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const INK: &str = "#1e1e1e";
const PAPER: &str = "#ffffff";
const LINE_WIDTH: f64 = 1.5;

pub fn render_scene(
    ctx: &CanvasRenderingContext2d,
    descriptors: &[RenderDescriptor],
    transform: Affine,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<(), JsValue> {
    // Clear in device space
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_fill_style_str(PAPER);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    let [a, b, c, d, e, f] = transform.as_coeffs();
    ctx.set_transform(a, b, c, d, e, f)?;
    ctx.set_stroke_style_str(INK);
    ctx.set_fill_style_str(INK);
    ctx.set_line_width(LINE_WIDTH);

    for descriptor in descriptors {
        draw(ctx, &descriptor.drawable)?;
    }
    log::trace!("painted {} descriptors", descriptors.len());
    Ok(())
}

fn draw(ctx: &CanvasRenderingContext2d, drawable: &Drawable) -> Result<(), JsValue> {
    match drawable {
        Drawable::Line(line) => {
            ctx.begin_path();
            ctx.move_to(line.p0.x, line.p0.y);
            ctx.line_to(line.p1.x, line.p1.y);
            ctx.stroke();
        }
        Drawable::Rect(r) => ctx.stroke_rect(r.x0, r.y0, r.width(), r.height()),
        Drawable::Circle(circle) => {
            ctx.begin_path();
            ctx.arc(
                circle.center.x,
                circle.center.y,
                circle.radius,
                0.0,
                std::f64::consts::TAU,
            )?;
            ctx.stroke();
        }
        Drawable::Outline(path) => {
            trace_path(ctx, path);
            ctx.fill();
        }
        Drawable::Text {
            content,
            origin,
            font,
        } => {
            ctx.set_font(&font.css());
            ctx.set_text_baseline("top");
            ctx.fill_text(content, origin.x, origin.y)?;
        }
    }
    Ok(())
}

fn trace_path(ctx: &CanvasRenderingContext2d, path: &BezPath) {
    ctx.begin_path();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
            PathEl::QuadTo(c, p) => ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
            PathEl::CurveTo(c1, c2, p) => ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathEl::ClosePath => ctx.close_path(),
        }
    }
}
