//! Integration tests: scene history driven through the editor (sk-editor).
//!
//! Verifies that each gesture lands as exactly one undo step, that redo
//! branches are dropped by new work, and that the viewport lives outside
//! scene history.

use kurbo::Size;
use pretty_assertions::assert_eq;
use sk_core::Bounds;
use sk_editor::{Editor, InputEvent, Modifiers, ToolKind};

fn editor() -> Editor {
    Editor::new(Size::new(800.0, 600.0))
}

fn drag(ed: &mut Editor, from: (f64, f64), to: (f64, f64)) {
    let m = Modifiers::NONE;
    ed.handle(&InputEvent::PointerDown {
        x: from.0,
        y: from.1,
        modifiers: m,
    });
    ed.handle(&InputEvent::PointerMove {
        x: (from.0 + to.0) / 2.0,
        y: (from.1 + to.1) / 2.0,
        modifiers: m,
    });
    ed.handle(&InputEvent::PointerMove {
        x: to.0,
        y: to.1,
        modifiers: m,
    });
    ed.handle(&InputEvent::PointerUp {
        x: to.0,
        y: to.1,
        modifiers: m,
    });
}

const RECT: Bounds = Bounds::new(10.0, 10.0, 50.0, 30.0);

// ─── Drawing ────────────────────────────────────────────────────────────

#[test]
fn rectangle_drag_is_one_step() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (10.0, 10.0), (50.0, 30.0));

    assert_eq!(ed.history().len(), 2);
    assert_eq!(ed.elements().len(), 1);
    assert_eq!(ed.elements()[0].bounds, RECT);
}

#[test]
fn reversed_drag_normalizes_identically() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (50.0, 30.0), (10.0, 10.0));

    assert_eq!(ed.elements()[0].bounds, RECT);
    assert_eq!(ed.history().len(), 2);
}

#[test]
fn undo_removes_the_drawn_element() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Line);
    drag(&mut ed, (0.0, 0.0), (100.0, 40.0));
    assert!(ed.undo());
    assert!(ed.elements().is_empty());
    assert!(ed.redo());
    assert_eq!(ed.elements()[0].bounds, Bounds::new(0.0, 0.0, 100.0, 40.0));
}

// ─── Moving ─────────────────────────────────────────────────────────────

#[test]
fn move_is_exactly_one_more_step() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (10.0, 10.0), (50.0, 30.0));

    ed.set_tool(ToolKind::Selection);
    drag(&mut ed, (30.0, 20.0), (35.0, 25.0));

    assert_eq!(ed.elements()[0].bounds, Bounds::new(15.0, 15.0, 55.0, 35.0));
    assert_eq!(ed.history().len(), 3);

    assert!(ed.undo());
    assert_eq!(ed.elements()[0].bounds, RECT);
}

#[test]
fn click_without_movement_adds_no_step() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (10.0, 10.0), (50.0, 30.0));

    ed.set_tool(ToolKind::Selection);
    let m = Modifiers::NONE;
    ed.handle(&InputEvent::PointerDown {
        x: 30.0,
        y: 20.0,
        modifiers: m,
    });
    ed.handle(&InputEvent::PointerUp {
        x: 30.0,
        y: 20.0,
        modifiers: m,
    });
    assert_eq!(ed.history().len(), 2);
}

// ─── Branching ──────────────────────────────────────────────────────────

#[test]
fn new_gesture_after_undo_drops_redo() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (0.0, 0.0), (10.0, 10.0));
    drag(&mut ed, (20.0, 20.0), (30.0, 30.0));
    assert!(ed.undo());

    ed.set_tool(ToolKind::Circle);
    drag(&mut ed, (100.0, 100.0), (120.0, 120.0));

    assert!(!ed.redo(), "redo branch should be gone");
    assert_eq!(ed.elements().len(), 2);
    assert_eq!(ed.history().len(), 3);
}

#[test]
fn undo_past_the_start_is_a_noop() {
    let mut ed = editor();
    assert!(!ed.undo());
    assert!(!ed.redo());
    assert_eq!(ed.history().cursor(), 0);
}

#[test]
fn keyboard_undo_redo() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (10.0, 10.0), (50.0, 30.0));

    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    ed.handle(&InputEvent::KeyDown {
        key: "z".into(),
        modifiers: ctrl,
    });
    assert!(ed.elements().is_empty());
    ed.handle(&InputEvent::KeyDown {
        key: "y".into(),
        modifiers: ctrl,
    });
    assert_eq!(ed.elements().len(), 1);
}

// ─── Viewport is not history ────────────────────────────────────────────

#[test]
fn zoom_is_unaffected_by_scene_undo_redo() {
    let mut ed = editor();
    ed.set_tool(ToolKind::Rectangle);
    drag(&mut ed, (10.0, 10.0), (50.0, 30.0));

    ed.zoom_by(0.1);
    ed.zoom_by(0.1);
    let zoomed = ed.scale();
    assert!((zoomed - 1.2).abs() < 1e-9);

    assert!(ed.undo());
    assert_eq!(ed.scale(), zoomed);
    assert!(ed.redo());
    assert_eq!(ed.scale(), zoomed);
    assert_eq!(ed.history().len(), 2);
}

#[test]
fn history_limit_bounds_depth() {
    let config = sk_core::EditorConfig {
        history_limit: Some(3),
        ..Default::default()
    };
    let mut ed = Editor::with_config(Size::new(800.0, 600.0), config);
    ed.set_tool(ToolKind::Line);
    for i in 0..5 {
        let y = i as f64 * 20.0;
        drag(&mut ed, (0.0, y), (50.0, y));
    }
    assert_eq!(ed.history().len(), 3);
    assert_eq!(ed.elements().len(), 5);
    assert!(ed.undo());
    assert!(ed.undo());
    assert!(!ed.undo());
    assert_eq!(ed.elements().len(), 3);
}
