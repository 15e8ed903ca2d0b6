//! Input abstraction layer.
//!
//! Normalizes pointer, wheel, and keyboard events from the host into a
//! unified `InputEvent` enum consumed by the editor. Pointer coordinates
//! are in device (canvas pixel) space; the editor maps them to the scene.

use std::collections::HashSet;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Platform command key: ctrl or ⌘.
    pub fn cmd(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown { x: f64, y: f64, modifiers: Modifiers },
    PointerMove { x: f64, y: f64, modifiers: Modifiers },
    PointerUp { x: f64, y: f64, modifiers: Modifiers },
    /// Wheel or trackpad scroll, in device pixels.
    Wheel { dx: f64, dy: f64, modifiers: Modifiers },
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `" "`).
    KeyDown { key: String, modifiers: Modifiers },
    KeyUp { key: String },
}

impl InputEvent {
    /// Device position if this is a pointer event.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}

/// Keys currently held down. Updated only through key events.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashSet<String>,
}

impl KeyState {
    pub fn press(&mut self, key: &str) {
        self.pressed.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.pressed.remove(key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Space held: temporary pan.
    pub fn pan_held(&self) -> bool {
        self.is_pressed(" ")
    }

    pub fn cmd_held(&self) -> bool {
        self.is_pressed("Control") || self.is_pressed("Meta")
    }

    /// Forget everything, e.g. after the window lost focus.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
