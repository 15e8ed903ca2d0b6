//! Interaction state machine.
//!
//! The [`Editor`] consumes device-space input, maps it into the scene
//! through the viewport, asks the hit tester what is under the pointer, and
//! writes element edits to history. One pointer press → move×N → release is
//! one gesture and produces at most one undo step.
//!
//! | Action      | Started by                                    | Ends on            |
//! |-------------|-----------------------------------------------|--------------------|
//! | `drawing`   | pointer-down with a shape tool                | pointer-up         |
//! | `selecting` | pointer-down inside an element (selection)    | pointer-up         |
//! | `resizing`  | pointer-down on a handle (selection)          | pointer-up         |
//! | `panning`   | pointer-down with the pan tool or space held  | pointer-up         |
//! | `writing`   | text tool press, or a click on a text element | [`Editor::commit_text`] |

use crate::cursor::CursorStyle;
use crate::history::HistoryStore;
use crate::input::{InputEvent, KeyState, Modifiers};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::ToolKind;
use kurbo::{Point, Size, Vec2};
use sk_core::{
    Bounds, EditorConfig, Element, ElementId, ElementKind, FontSpec, Position, Snapshot,
    ViewportTransform, adjustment_required, normalize, resize, resize_circle,
};
use sk_render::{RenderDescriptor, TextMeasure, find_topmost, render_list};

/// Public view of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Drawing,
    Selecting,
    Resizing,
    Panning,
    Writing,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Drawing => "drawing",
            Action::Selecting => "selecting",
            Action::Resizing => "resizing",
            Action::Panning => "panning",
            Action::Writing => "writing",
        }
    }
}

/// Hand-off to the host's text overlay on entering `writing`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEditRequest {
    pub id: ElementId,
    /// Text anchor `(x1, y1)` in scene space.
    pub scene_anchor: Point,
    /// Where to place the overlay's top-left, in device pixels.
    pub device_anchor: Point,
    /// Font already scaled by the current zoom.
    pub font: FontSpec,
    /// Existing content (empty for a new label).
    pub text: String,
}

/// Ambient state the state machine reads on every event: the current tool,
/// the viewport, and which keys are held.
#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    pub tool: ToolKind,
    pub viewport: ViewportTransform,
    pub keys: KeyState,
}

/// How a selected element follows the pointer while moving.
#[derive(Debug, Clone)]
enum Grab {
    /// Pointer minus `(x1, y1)` at press time.
    Anchor(Vec2),
    /// Each pencil sample minus the pointer at press time.
    Samples(Vec<Vec2>),
}

#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    Drawing {
        id: ElementId,
    },
    Selecting {
        id: ElementId,
        press: Point,
        grab: Grab,
    },
    Resizing {
        id: ElementId,
        position: Position,
    },
    Panning {
        last: Point,
    },
    Writing {
        id: ElementId,
    },
}

pub struct Editor {
    config: EditorConfig,
    history: HistoryStore,
    context: EditorContext,
    gesture: Gesture,
    /// Classification under the pointer, for the selection cursor.
    hover: Position,
    pending_edit: Option<TextEditRequest>,
}

impl Editor {
    pub fn new(canvas: Size) -> Self {
        Self::with_config(canvas, EditorConfig::default())
    }

    pub fn with_config(canvas: Size, config: EditorConfig) -> Self {
        let viewport = ViewportTransform::new(canvas).with_min_scale(config.min_scale);
        Self {
            history: HistoryStore::new(config.history_limit),
            context: EditorContext {
                viewport,
                ..EditorContext::default()
            },
            config,
            gesture: Gesture::Idle,
            hover: Position::Outside,
            pending_edit: None,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn elements(&self) -> &[Element] {
        self.history.current().elements()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.context.viewport
    }

    pub fn tool(&self) -> ToolKind {
        self.context.tool
    }

    pub fn action(&self) -> Action {
        match self.gesture {
            Gesture::Idle => Action::None,
            Gesture::Drawing { .. } => Action::Drawing,
            Gesture::Selecting { .. } => Action::Selecting,
            Gesture::Resizing { .. } => Action::Resizing,
            Gesture::Panning { .. } => Action::Panning,
            Gesture::Writing { .. } => Action::Writing,
        }
    }

    /// Element the current gesture operates on.
    pub fn selected(&self) -> Option<ElementId> {
        match self.gesture {
            Gesture::Drawing { id }
            | Gesture::Selecting { id, .. }
            | Gesture::Resizing { id, .. }
            | Gesture::Writing { id } => Some(id),
            Gesture::Idle | Gesture::Panning { .. } => None,
        }
    }

    pub fn hover(&self) -> Position {
        self.hover
    }

    pub fn scale(&self) -> f64 {
        self.context.viewport.scale
    }

    pub fn zoom_percent(&self) -> i64 {
        self.context.viewport.zoom_percent()
    }

    /// The open text-edit hand-off, while `writing`.
    pub fn pending_text_edit(&self) -> Option<&TextEditRequest> {
        self.pending_edit.as_ref()
    }

    pub fn cursor(&self) -> CursorStyle {
        CursorStyle::resolve(
            self.effective_tool(),
            self.hover,
            matches!(self.gesture, Gesture::Panning { .. }),
            matches!(self.gesture, Gesture::Writing { .. }),
        )
    }

    /// Descriptors in z-order, without the element being text-edited.
    pub fn render_list(&self) -> Vec<RenderDescriptor> {
        let skip = match self.gesture {
            Gesture::Writing { id } => Some(id),
            _ => None,
        };
        render_list(
            self.history.current(),
            skip,
            &self.config.stroke,
            &self.config.font,
        )
    }

    // ─── Controls ────────────────────────────────────────────────────────

    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.context.tool != tool {
            log::debug!("tool {} -> {}", self.context.tool.name(), tool.name());
        }
        self.context.tool = tool;
        self.hover = Position::Outside;
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.context.viewport.zoom_by(delta);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.config.zoom_step);
    }

    pub fn resize_canvas(&mut self, canvas: Size) {
        self.context.viewport.resize(canvas);
    }

    /// Step back one scene snapshot. Viewport state is not part of history.
    pub fn undo(&mut self) -> bool {
        self.abandon_gesture();
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.abandon_gesture();
        self.history.redo()
    }

    /// Finish `writing`: store `value`, size the label from its measured
    /// width and the font's line height, and close the gesture. Returns
    /// false when no text edit is open.
    pub fn commit_text(&mut self, value: &str, measure: &dyn TextMeasure) -> bool {
        let Gesture::Writing { id } = self.gesture else {
            log::debug!("commit_text with no open text edit");
            return false;
        };
        if let Some(el) = self.history.current().get(id).cloned() {
            let font = &self.config.font;
            let width = measure.text_width(value, font);
            let Bounds { x1, y1, .. } = el.bounds;
            let bounds = Bounds::new(x1, y1, x1 + width, y1 + font.line_height());
            self.write(el.with_text(value).with_bounds(bounds));
            log::debug!("text {} committed ({width:.1} wide)", id);
        } else {
            log::warn!("text element {} vanished before commit", id);
        }
        self.finish();
        true
    }

    // ─── Events ──────────────────────────────────────────────────────────

    /// Feed one input event. Returns a text-edit hand-off when the event
    /// opened the overlay.
    pub fn handle(&mut self, event: &InputEvent) -> Option<TextEditRequest> {
        match event {
            InputEvent::PointerDown { x, y, .. } => self.pointer_down(Point::new(*x, *y)),
            InputEvent::PointerMove { x, y, .. } => {
                self.pointer_move(Point::new(*x, *y));
                None
            }
            InputEvent::PointerUp { x, y, .. } => self.pointer_up(Point::new(*x, *y)),
            InputEvent::Wheel { dx, dy, modifiers } => {
                self.wheel(Vec2::new(*dx, *dy), *modifiers);
                None
            }
            InputEvent::KeyDown { key, modifiers } => {
                self.key_down(key, *modifiers);
                None
            }
            InputEvent::KeyUp { key } => {
                self.context.keys.release(key);
                None
            }
        }
    }

    fn pointer_down(&mut self, device: Point) -> Option<TextEditRequest> {
        if let Gesture::Writing { .. } = self.gesture {
            log::debug!("pointer-down ignored while writing");
            return None;
        }
        let scene = self.context.viewport.to_scene(device);

        match self.effective_tool() {
            ToolKind::Pan => {
                self.gesture = Gesture::Panning { last: device };
                None
            }
            ToolKind::Selection => {
                self.press_selection(scene);
                None
            }
            tool => {
                let kind = tool.element_kind()?;
                self.press_draw(kind, scene)
            }
        }
    }

    fn press_selection(&mut self, scene: Point) {
        let Some((el, position)) = find_topmost(scene, self.history.current(), &self.config.hit)
        else {
            return;
        };
        let id = el.id;
        self.gesture = match position {
            Position::Inside => {
                let grab = match el.points() {
                    Some(points) => Grab::Samples(points.iter().map(|p| *p - scene).collect()),
                    None => Grab::Anchor(scene - el.bounds.start()),
                };
                Gesture::Selecting {
                    id,
                    press: scene,
                    grab,
                }
            }
            Position::Handle(_) => Gesture::Resizing { id, position },
            Position::Outside => return,
        };
        self.history.begin_gesture();
        log::debug!("{} {} at {}", self.action().name(), id, position.name());
    }

    fn press_draw(&mut self, kind: ElementKind, scene: Point) -> Option<TextEditRequest> {
        let el = Element::create(kind, scene);
        let id = el.id;
        self.history.begin_gesture();
        self.history.write(self.history.current().with_appended(el));
        log::debug!("drawing {} at ({:.1}, {:.1})", id, scene.x, scene.y);

        if kind == ElementKind::Text {
            return self.open_text_edit(id);
        }
        self.gesture = Gesture::Drawing { id };
        None
    }

    fn pointer_move(&mut self, device: Point) {
        let scene = self.context.viewport.to_scene(device);
        if self.effective_tool() == ToolKind::Selection && matches!(self.gesture, Gesture::Idle) {
            self.hover = find_topmost(scene, self.history.current(), &self.config.hit)
                .map_or(Position::Outside, |(_, p)| p);
        }

        match &mut self.gesture {
            Gesture::Idle | Gesture::Writing { .. } => {}
            Gesture::Panning { last } => {
                let delta = device - *last;
                *last = device;
                self.context.viewport.pan_by(delta);
            }
            Gesture::Drawing { id } => {
                let id = *id;
                self.update(id, |el| match el.kind() {
                    ElementKind::Pencil => el.with_appended_point(scene),
                    _ => el.with_bounds(Bounds::from_corners(el.bounds.start(), scene)),
                });
            }
            Gesture::Selecting { id, grab, .. } => {
                let id = *id;
                let grab = grab.clone();
                self.update(id, |el| match &grab {
                    Grab::Anchor(offset) => el.with_bounds(el.bounds.moved_to(scene - *offset)),
                    Grab::Samples(offsets) => {
                        el.with_points(offsets.iter().map(|o| scene + *o).collect())
                    }
                });
            }
            Gesture::Resizing { id, position } => {
                let (id, position) = (*id, *position);
                self.update(id, |el| match el.kind() {
                    ElementKind::Circle => el.with_bounds(resize_circle(el.bounds, scene)),
                    _ => el.with_bounds(resize(el.bounds, scene, position)),
                });
            }
        }
    }

    fn pointer_up(&mut self, device: Point) -> Option<TextEditRequest> {
        let scene = self.context.viewport.to_scene(device);
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => None,
            Gesture::Writing { id } => {
                self.gesture = Gesture::Writing { id };
                None
            }
            Gesture::Panning { .. } => None,
            Gesture::Drawing { id } => {
                if let Some(el) = self.history.current().get(id)
                    && adjustment_required(el.kind())
                {
                    let el = normalize(el);
                    self.write(el);
                }
                self.finish();
                None
            }
            Gesture::Resizing { id, .. } => {
                if let Some(el) = self.history.current().get(id) {
                    let normalized = normalize(el);
                    if &normalized != el {
                        self.write(normalized);
                    }
                }
                self.finish();
                None
            }
            Gesture::Selecting { id, press, .. } => {
                let is_click = press.distance(scene) <= self.config.click_slop;
                let is_text = self
                    .history
                    .current()
                    .get(id)
                    .is_some_and(|e| e.kind() == ElementKind::Text);
                if is_click && is_text {
                    // Keep the gesture open: the commit lands in the same step.
                    return self.open_text_edit(id);
                }
                self.finish();
                None
            }
        }
    }

    fn wheel(&mut self, delta: Vec2, modifiers: Modifiers) {
        if modifiers.cmd() || self.context.keys.cmd_held() {
            self.zoom_by(delta.y * self.config.wheel_zoom_factor);
        } else {
            self.context.viewport.pan_by(-delta);
        }
    }

    fn key_down(&mut self, key: &str, modifiers: Modifiers) {
        self.context.keys.press(key);
        if let Gesture::Writing { .. } = self.gesture {
            return;
        }
        let Some(action) = ShortcutMap::resolve(key, modifiers) else {
            return;
        };
        log::debug!("shortcut {action:?}");
        match action {
            ShortcutAction::Tool(tool) => self.set_tool(tool),
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::ZoomIn => self.zoom_in(),
            ShortcutAction::ZoomOut => self.zoom_out(),
            ShortcutAction::ZoomReset => self.context.viewport.reset_zoom(),
        }
    }

    // ─── Helpers ─────────────────────────────────────────────────────────

    /// Pan wins over the active tool while space is held.
    fn effective_tool(&self) -> ToolKind {
        if self.context.keys.pan_held() {
            ToolKind::Pan
        } else {
            self.context.tool
        }
    }

    /// Apply `edit` to element `id` in the current snapshot and write it.
    fn update(&mut self, id: ElementId, edit: impl FnOnce(&Element) -> Element) {
        let Some(el) = self.history.current().get(id) else {
            log::warn!("element {} missing from current snapshot", id);
            return;
        };
        let next = edit(el);
        log::trace!("{} -> {:?}", id, next.bounds);
        self.write(next);
    }

    fn write(&mut self, element: Element) {
        let next = self.history.current().with_replaced(element);
        self.history.write(next);
    }

    fn open_text_edit(&mut self, id: ElementId) -> Option<TextEditRequest> {
        let el = self.history.current().get(id)?;
        let anchor = el.bounds.start();
        let request = TextEditRequest {
            id,
            scene_anchor: anchor,
            device_anchor: self
                .context
                .viewport
                .to_device(Point::new(anchor.x, anchor.y - 2.0)),
            font: self.config.font.scaled(self.scale()),
            text: el.text().unwrap_or_default().to_string(),
        };
        self.gesture = Gesture::Writing { id };
        self.pending_edit = Some(request.clone());
        log::debug!("writing {}", id);
        Some(request)
    }

    fn finish(&mut self) {
        self.history.end_gesture();
        self.gesture = Gesture::Idle;
        self.pending_edit = None;
    }

    fn abandon_gesture(&mut self) {
        if !matches!(self.gesture, Gesture::Idle) {
            log::debug!("{} abandoned", self.action().name());
        }
        self.finish();
    }
}
