//! The canvas session: one explicit state struct, one event router.
//!
//! All shared mutable state (mode, viewport, shape store, capture,
//! selection, pen settings) lives here and is touched only through
//! [`CanvasSession::handle_event`] — no ambient singletons. Events are
//! handled strictly in dispatch order; the host may coalesce high-rate
//! pointer moves, which only reduces curve fidelity.

use crate::input::{InputEvent, Modifiers, PointerButton};
use crate::picker::ColorPicker;
use crate::selection::Selection;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::stroke::StrokeCapture;
use ink_core::ShapeId;
use ink_core::model::{Color, Path, Point};
use ink_core::store::ShapeStore;
use ink_core::viewport::Viewport;
use ink_render::hit::{hit_test, hit_test_rect};

pub const MIN_LINE_WIDTH: f32 = 1.0;
pub const MAX_LINE_WIDTH: f32 = 50.0;
const DEFAULT_LINE_WIDTH: f32 = 5.0;
/// Slack around a stroke for erase/select hits, in canvas units.
const HIT_TOLERANCE: f32 = 2.0;

/// The active interaction mode. Exactly one at a time; every handler
/// matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Select,
    Draw,
    Erase,
    Pan,
}

/// Host-supplied widget configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Rendering surface size, in screen pixels.
    pub width: f32,
    pub height: f32,
    /// Suppress the toolbar; mode/color/width are driven externally.
    pub hide_ui: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            hide_ui: false,
        }
    }
}

pub struct CanvasSession {
    pub config: SessionConfig,
    pub mode: Mode,
    pub store: ShapeStore,
    pub viewport: Viewport,
    pub selection: Selection,
    pub color: Color,
    pub line_width: f32,
    pub ui_hidden: bool,
    /// Shape targeted by a Select-mode click; Delete removes it.
    pub target: Option<ShapeId>,
    capture: Option<StrokeCapture>,
    /// Last sampled client position of an active pan drag.
    pan_anchor: Option<Point>,
    picker: Option<Box<dyn ColorPicker>>,
}

impl CanvasSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            ui_hidden: config.hide_ui,
            config,
            mode: Mode::default(),
            store: ShapeStore::new(),
            viewport: Viewport::new(),
            selection: Selection::default(),
            color: Color::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
            target: None,
            capture: None,
            pan_anchor: None,
            picker: None,
        }
    }

    /// Install the host color picker (see `I` shortcut).
    pub fn with_picker(mut self, picker: Box<dyn ColorPicker>) -> Self {
        self.picker = Some(picker);
        self
    }

    /// The in-progress stroke, for display. `None` unless capturing.
    pub fn live_path(&self) -> Option<&Path> {
        self.capture.as_ref().map(StrokeCapture::path)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Single-level undo: pop the most recently committed shape.
    pub fn undo(&mut self) -> Option<ShapeId> {
        self.store.remove_last()
    }

    /// Ask the host picker for a color. A failed pick leaves the current
    /// color unchanged.
    pub fn pick_color(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match picker.pick() {
            Ok(color) => self.color = color,
            Err(err) => log::debug!("color pick failed: {err}"),
        }
    }

    /// Route one input event. Exactly one mode-specific branch runs.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown {
                x, y, button, ..
            } => self.on_pointer_down(Point::new(*x, *y), *button),

            InputEvent::PointerMove {
                x,
                y,
                primary_held,
                modifiers,
            } => self.on_pointer_move(Point::new(*x, *y), *primary_held, *modifiers),

            InputEvent::PointerUp { .. } => self.on_pointer_up(),

            InputEvent::KeyDown { key, modifiers } => self.on_key_down(key, *modifiers),

            InputEvent::KeyUp { key, .. } => self.on_key_up(key),

            InputEvent::Wheel {
                x,
                y,
                dx,
                dy,
                modifiers,
            } => self.on_wheel(Point::new(*x, *y), *dx, *dy, *modifiers),
        }
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    fn on_pointer_down(&mut self, p: Point, button: PointerButton) {
        // Middle button forces Pan until release, whatever the mode.
        if button == PointerButton::Wheel || self.mode == Mode::Pan {
            self.set_mode(Mode::Pan);
            self.pan_anchor = Some(p);
            return;
        }

        match self.mode {
            Mode::Draw if button == PointerButton::Primary => {
                let canvas = self.viewport.to_canvas(p);
                self.capture = Some(StrokeCapture::begin(self.color, self.line_width, canvas));
            }
            Mode::Select if button == PointerButton::Primary => {
                let canvas = self.viewport.to_canvas(p);
                match hit_test(&self.store, canvas, HIT_TOLERANCE) {
                    Some(id) => self.target = Some(id),
                    None => {
                        self.target = None;
                        self.selection.begin(canvas);
                    }
                }
            }
            _ => {}
        }
    }

    fn on_pointer_move(&mut self, p: Point, primary_held: bool, modifiers: Modifiers) {
        match self.mode {
            Mode::Draw => {
                if let Some(capture) = self.capture.as_mut() {
                    let canvas = self.viewport.to_canvas(p);
                    if modifiers.shift {
                        capture.straighten_to(canvas);
                    } else if primary_held {
                        capture.freehand_to(canvas);
                    }
                }
            }
            Mode::Pan => {
                if let Some(anchor) = self.pan_anchor {
                    self.viewport.pan_by(p.x - anchor.x, p.y - anchor.y);
                    self.pan_anchor = Some(p);
                }
            }
            Mode::Erase => {
                if primary_held {
                    let canvas = self.viewport.to_canvas(p);
                    if let Some(id) = hit_test(&self.store, canvas, HIT_TOLERANCE) {
                        self.store.mark_pending_erase(id);
                    }
                }
            }
            Mode::Select => {
                self.selection.update(self.viewport.to_canvas(p));
            }
        }
    }

    fn on_pointer_up(&mut self) {
        if let Some(capture) = self.capture.take() {
            self.store.add(capture.finish());
        }
        match self.mode {
            Mode::Pan => self.set_mode(Mode::Select),
            Mode::Erase => {
                self.store.commit_erase();
            }
            Mode::Select => {
                // A completed marquee targets the topmost shape it touches.
                if let Some(rect) = self.selection.bounds()
                    && rect.width > 0.0
                    && rect.height > 0.0
                {
                    self.target = hit_test_rect(&self.store, &rect).last().copied();
                }
                self.selection.reset();
            }
            Mode::Draw => {}
        }
        self.pan_anchor = None;
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    fn on_key_down(&mut self, key: &str, modifiers: Modifiers) {
        // Shift mid-stroke collapses the live path to a straight segment.
        if key == "Shift" {
            if self.mode == Mode::Draw
                && let Some(capture) = self.capture.as_mut()
            {
                capture.collapse_to_segment();
            }
            return;
        }

        match ShortcutMap::resolve(key, modifiers) {
            Some(ShortcutAction::ToolSelect) => self.set_mode(Mode::Select),
            Some(ShortcutAction::ToolDraw) => self.set_mode(Mode::Draw),
            Some(ShortcutAction::ToolErase) => self.set_mode(Mode::Erase),
            Some(ShortcutAction::PanStart) => self.set_mode(Mode::Pan),
            Some(ShortcutAction::Undo) => {
                self.undo();
            }
            Some(ShortcutAction::DeleteTarget) => {
                if let Some(id) = self.target.take() {
                    self.store.remove(id);
                }
            }
            Some(ShortcutAction::PickColor) => self.pick_color(),
            Some(ShortcutAction::ToggleUi) => self.ui_hidden = !self.ui_hidden,
            None => {}
        }
    }

    fn on_key_up(&mut self, key: &str) {
        match key {
            "Shift" => {
                if self.mode == Mode::Draw
                    && let Some(capture) = self.capture.as_mut()
                {
                    capture.release_straight();
                }
            }
            // Space-hold pan ends on release.
            " " => {
                if self.mode == Mode::Pan {
                    self.set_mode(Mode::Select);
                }
            }
            _ => {}
        }
    }

    // ─── Wheel ───────────────────────────────────────────────────────────

    fn on_wheel(&mut self, cursor: Point, dx: f32, dy: f32, modifiers: Modifiers) {
        if modifiers.alt {
            // Alt-wheel adjusts pen width; shift/ctrl boost the step.
            let factor = if modifiers.shift {
                5.0
            } else if modifiers.ctrl {
                10.0
            } else {
                1.0
            };
            let next = self.line_width - factor * dy.signum();
            self.line_width = next.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        } else if modifiers.ctrl {
            self.viewport.zoom_about(cursor, dy < 0.0);
        } else {
            self.viewport.scroll(dx, dy, modifiers.shift);
        }
    }
}
