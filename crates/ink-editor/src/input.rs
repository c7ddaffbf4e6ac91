//! Input abstraction layer.
//!
//! Normalizes host pointer, keyboard, and wheel events into a neutral
//! `InputEvent` consumed by the session — the core logic never touches a
//! toolkit event type. Pointer coordinates arrive in screen space; the
//! session maps them through the viewport before they reach any stroke.

/// Modifier-key state carried on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    pub const ALT: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: true,
        meta: false,
    };
}

/// Which button produced a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    /// Middle / wheel button — forces pan while held.
    Wheel,
    Secondary,
}

/// A normalized input event from the host environment.
#[derive(Debug, Clone)]
pub enum InputEvent {
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
        modifiers: Modifiers,
    },

    PointerMove {
        x: f32,
        y: f32,
        /// Whether the primary button is held during the move.
        primary_held: bool,
        modifiers: Modifiers,
    },

    PointerUp {
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    /// Keyboard key pressed. `key` follows the DOM `KeyboardEvent.key`
    /// convention (`"p"`, `"Shift"`, `"Delete"`, `" "` for Space).
    KeyDown { key: String, modifiers: Modifiers },

    KeyUp { key: String, modifiers: Modifiers },

    /// Wheel input at a screen position. Vertical delta drives zoom/pan;
    /// horizontal delta drives the secondary pan axis.
    Wheel {
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        modifiers: Modifiers,
    },
}
