//! WASM bridge for Sketchpad: exposes the editor to a browser host.
//!
//! Compiled via `wasm-pack build --target web`. The host forwards DOM
//! pointer/wheel/key events, shows the text overlay when asked, and paints
//! either through [`SketchCanvas::render`] or from [`SketchCanvas::render_json`].

mod render2d;

use kurbo::Size;
use serde_json::{Value, json};
use sk_core::FontSpec;
use sk_editor::{Editor, InputEvent, Modifiers, TextEditRequest, ToolKind};
use sk_render::{Drawable, RenderDescriptor, TextMeasure};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Every event handler returns a small JSON status:
/// `{"changed":bool,"action":"…","cursor":"…","textEdit":{…}|null}`.
/// `changed` tells the host whether a repaint is needed; `textEdit` is set
/// when the overlay must open.
#[wasm_bindgen]
pub struct SketchCanvas {
    editor: Editor,
}

#[wasm_bindgen]
impl SketchCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            editor: Editor::new(Size::new(width, height)),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.editor.resize_canvas(Size::new(width, height));
    }

    // ─── Events ──────────────────────────────────────────────────────────

    pub fn handle_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = mods(shift, ctrl, alt, meta);
        self.dispatch(InputEvent::PointerDown { x, y, modifiers })
    }

    pub fn handle_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = mods(shift, ctrl, alt, meta);
        self.dispatch(InputEvent::PointerMove { x, y, modifiers })
    }

    pub fn handle_pointer_up(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = mods(shift, ctrl, alt, meta);
        self.dispatch(InputEvent::PointerUp { x, y, modifiers })
    }

    pub fn handle_wheel(
        &mut self,
        dx: f64,
        dy: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = mods(shift, ctrl, alt, meta);
        self.dispatch(InputEvent::Wheel { dx, dy, modifiers })
    }

    /// `key` is `KeyboardEvent.key`.
    pub fn handle_key_down(
        &mut self,
        key: &str,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = mods(shift, ctrl, alt, meta);
        self.dispatch(InputEvent::KeyDown {
            key: key.to_string(),
            modifiers,
        })
    }

    pub fn handle_key_up(&mut self, key: &str) -> String {
        self.dispatch(InputEvent::KeyUp {
            key: key.to_string(),
        })
    }

    /// Finish text entry, measuring the label with the canvas font.
    pub fn commit_text(&mut self, value: &str, ctx: &CanvasRenderingContext2d) -> bool {
        self.editor.commit_text(value, &CanvasMeasure { ctx })
    }

    // ─── Tools & controls ────────────────────────────────────────────────

    /// Switch the active tool. Unknown names keep the current tool.
    pub fn set_tool(&mut self, name: &str) -> bool {
        match ToolKind::from_name(name) {
            Some(tool) => {
                self.editor.set_tool(tool);
                true
            }
            None => {
                log::warn!("unknown tool {name:?}, keeping {}", self.editor.tool().name());
                false
            }
        }
    }

    pub fn tool_name(&self) -> String {
        self.editor.tool().name().to_string()
    }

    pub fn action_name(&self) -> String {
        self.editor.action().name().to_string()
    }

    /// CSS cursor for the canvas element.
    pub fn cursor(&self) -> String {
        self.editor.cursor().as_css().to_string()
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.history().can_redo()
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.editor.zoom_by(delta);
    }

    pub fn zoom_in(&mut self) {
        self.editor.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.editor.zoom_out();
    }

    pub fn scale(&self) -> f64 {
        self.editor.scale()
    }

    /// Toolbar label value, e.g. `110` for 110%.
    pub fn zoom_percent(&self) -> i32 {
        self.editor.zoom_percent() as i32
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Paint the scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let viewport = self.editor.viewport();
        render2d::render_scene(
            ctx,
            &self.editor.render_list(),
            viewport.device_transform(),
            viewport.canvas.width,
            viewport.canvas.height,
        )
    }

    /// Render descriptors plus the device transform, as JSON.
    pub fn render_json(&self) -> String {
        let descriptors: Vec<Value> = self.editor.render_list().iter().map(descriptor_json).collect();
        json!({
            "transform": self.editor.viewport().device_transform().as_coeffs(),
            "elements": descriptors,
        })
        .to_string()
    }

    /// The current scene (elements in z-order) as JSON.
    pub fn scene_json(&self) -> String {
        serde_json::to_string(self.editor.elements()).unwrap_or_else(|e| {
            log::warn!("scene serialization failed: {e}");
            "[]".to_string()
        })
    }

    /// The open text-edit request as JSON, or `null`.
    pub fn text_edit_json(&self) -> String {
        self.editor
            .pending_text_edit()
            .map_or(Value::Null, text_edit_json)
            .to_string()
    }
}

impl SketchCanvas {
    fn dispatch(&mut self, event: InputEvent) -> String {
        let scene_before = self.editor.snapshot().clone();
        let viewport_before = *self.editor.viewport();
        let action_before = self.editor.action();

        let text_edit = self.editor.handle(&event);

        let changed = !scene_before.ptr_eq(self.editor.snapshot())
            || viewport_before != *self.editor.viewport()
            || action_before != self.editor.action();
        json!({
            "changed": changed,
            "action": self.editor.action().name(),
            "cursor": self.editor.cursor().as_css(),
            "textEdit": text_edit.as_ref().map_or(Value::Null, text_edit_json),
        })
        .to_string()
    }
}

fn mods(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

/// Text width via `measureText` on the host canvas.
struct CanvasMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl TextMeasure for CanvasMeasure<'_> {
    fn text_width(&self, text: &str, font: &FontSpec) -> f64 {
        self.ctx.set_font(&font.css());
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(e) => {
                log::warn!("measureText failed: {e:?}");
                0.0
            }
        }
    }
}

fn text_edit_json(req: &TextEditRequest) -> Value {
    json!({
        "id": req.id.as_str(),
        "sceneX": req.scene_anchor.x,
        "sceneY": req.scene_anchor.y,
        "left": req.device_anchor.x,
        "top": req.device_anchor.y,
        "font": req.font.css(),
        "text": req.text,
    })
}

fn descriptor_json(d: &RenderDescriptor) -> Value {
    let id = d.id.as_str();
    match &d.drawable {
        Drawable::Line(line) => json!({
            "id": id,
            "kind": "line",
            "x1": line.p0.x, "y1": line.p0.y,
            "x2": line.p1.x, "y2": line.p1.y,
        }),
        Drawable::Rect(r) => json!({
            "id": id,
            "kind": "rectangle",
            "x": r.x0, "y": r.y0,
            "width": r.width(), "height": r.height(),
        }),
        Drawable::Circle(c) => json!({
            "id": id,
            "kind": "circle",
            "cx": c.center.x, "cy": c.center.y,
            "radius": c.radius,
        }),
        Drawable::Outline(path) => json!({
            "id": id,
            "kind": "pencil",
            "path": path.to_svg(),
        }),
        Drawable::Text {
            content,
            origin,
            font,
        } => json!({
            "id": id,
            "kind": "text",
            "text": content,
            "x": origin.x, "y": origin.y,
            "font": font.css(),
        }),
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Sketchpad WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
