//! WASM bridge for embedding the canvas widget in a web host.
//!
//! The host page owns the DOM surface and forwards raw event fields
//! (coordinates, button, modifier flags, wheel deltas); this crate
//! normalizes them into `InputEvent`s and drives a `CanvasSession`.
//! Drawing goes through `render2d` for canvas hosts, or per-shape SVG
//! path data for DOM/SVG hosts.

pub mod render2d;

use ink_core::model::Color;
use ink_editor::input::{InputEvent, Modifiers, PointerButton};
use ink_editor::session::{CanvasSession, Mode, SessionConfig};
use ink_render::svg::svg_path_data;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

/// DOM `MouseEvent.button` → pointer button identity.
fn button_from_dom(button: i16) -> PointerButton {
    match button {
        1 => PointerButton::Wheel,
        2 => PointerButton::Secondary,
        _ => PointerButton::Primary,
    }
}

#[wasm_bindgen]
pub struct CanvasWidget {
    session: CanvasSession,
}

#[wasm_bindgen]
impl CanvasWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, hide_ui: bool) -> Self {
        Self {
            session: CanvasSession::new(SessionConfig {
                width,
                height,
                hide_ui,
            }),
        }
    }

    // ─── Event forwarding ────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: i16,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) {
        self.session.handle_event(&InputEvent::PointerDown {
            x,
            y,
            button: button_from_dom(button),
            modifiers: modifiers(shift, ctrl, alt, meta),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pointer_move(
        &mut self,
        x: f32,
        y: f32,
        buttons: u16,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) {
        self.session.handle_event(&InputEvent::PointerMove {
            x,
            y,
            primary_held: buttons & 1 == 1,
            modifiers: modifiers(shift, ctrl, alt, meta),
        });
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.session.handle_event(&InputEvent::PointerUp {
            x,
            y,
            modifiers: Modifiers::NONE,
        });
    }

    pub fn key_down(&mut self, key: &str, shift: bool, ctrl: bool, alt: bool, meta: bool) {
        self.session.handle_event(&InputEvent::KeyDown {
            key: key.to_string(),
            modifiers: modifiers(shift, ctrl, alt, meta),
        });
    }

    pub fn key_up(&mut self, key: &str) {
        self.session.handle_event(&InputEvent::KeyUp {
            key: key.to_string(),
            modifiers: Modifiers::NONE,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn wheel(
        &mut self,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) {
        self.session.handle_event(&InputEvent::Wheel {
            x,
            y,
            dx,
            dy,
            modifiers: modifiers(shift, ctrl, alt, meta),
        });
    }

    // ─── Toolbar state ───────────────────────────────────────────────────

    pub fn mode(&self) -> String {
        match self.session.mode {
            Mode::Select => "select",
            Mode::Draw => "draw",
            Mode::Erase => "erase",
            Mode::Pan => "pan",
        }
        .to_string()
    }

    pub fn set_mode(&mut self, mode: &str) {
        let mode = match mode {
            "draw" => Mode::Draw,
            "erase" => Mode::Erase,
            "pan" => Mode::Pan,
            _ => Mode::Select,
        };
        self.session.set_mode(mode);
    }

    pub fn color(&self) -> String {
        self.session.color.to_hex()
    }

    /// Set the pen color from a hex string. Invalid input is ignored.
    pub fn set_color(&mut self, hex: &str) {
        if let Some(color) = Color::from_hex(hex) {
            self.session.color = color;
        }
    }

    pub fn line_width(&self) -> f32 {
        self.session.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.session.line_width = width.clamp(
            ink_editor::session::MIN_LINE_WIDTH,
            ink_editor::session::MAX_LINE_WIDTH,
        );
    }

    pub fn ui_hidden(&self) -> bool {
        self.session.ui_hidden
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo().is_some()
    }

    pub fn zoom(&self) -> f32 {
        self.session.viewport.zoom
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Redraw everything into a canvas-2d context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        render2d::render_session(ctx, &self.session);
    }

    pub fn shape_count(&self) -> usize {
        self.session.store.len()
    }

    /// Shape metadata for DOM/SVG hosts, as a JSON array of
    /// `{id, color, lineWidth, pendingErase, bounds}` objects in paint order.
    pub fn shapes_json(&self) -> String {
        let shapes: Vec<serde_json::Value> = self
            .session
            .store
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id.to_string(),
                    "color": s.path.color.to_hex(),
                    "lineWidth": s.path.line_width,
                    "pendingErase": s.pending_erase,
                    "bounds": {
                        "left": s.bounds.left,
                        "top": s.bounds.top,
                        "width": s.bounds.width,
                        "height": s.bounds.height,
                    },
                })
            })
            .collect();
        serde_json::to_string(&shapes).unwrap_or_else(|_| "[]".to_string())
    }

    /// SVG path `d` attribute for the shape at `index` in paint order.
    pub fn shape_svg_path(&self, index: usize) -> String {
        self.session
            .store
            .iter()
            .nth(index)
            .map(|s| svg_path_data(&s.path.points))
            .unwrap_or_default()
    }

    /// SVG path `d` attribute for the in-progress stroke, if any.
    pub fn live_svg_path(&self) -> String {
        self.session
            .live_path()
            .map(|p| svg_path_data(&p.points))
            .unwrap_or_default()
    }
}
