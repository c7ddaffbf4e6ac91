//! Integration tests: pan, zoom, wheel routing, and selection gestures.

use ink_core::model::Point;
use ink_core::viewport::{MAX_ZOOM, MIN_ZOOM};
use ink_editor::input::{InputEvent, Modifiers, PointerButton};
use ink_editor::session::{CanvasSession, MAX_LINE_WIDTH, MIN_LINE_WIDTH, Mode, SessionConfig};
use pretty_assertions::assert_eq;

fn session() -> CanvasSession {
    CanvasSession::new(SessionConfig::default())
}

fn wheel(s: &mut CanvasSession, dx: f32, dy: f32, modifiers: Modifiers) {
    s.handle_event(&InputEvent::Wheel {
        x: 200.0,
        y: 150.0,
        dx,
        dy,
        modifiers,
    });
}

fn move_held(s: &mut CanvasSession, x: f32, y: f32) {
    s.handle_event(&InputEvent::PointerMove {
        x,
        y,
        primary_held: true,
        modifiers: Modifiers::NONE,
    });
}

// ─── Pan ────────────────────────────────────────────────────────────────

#[test]
fn middle_button_forces_pan_then_reverts_to_select() {
    let mut s = session();
    s.set_mode(Mode::Draw);

    s.handle_event(&InputEvent::PointerDown {
        x: 0.0,
        y: 0.0,
        button: PointerButton::Wheel,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(s.mode, Mode::Pan);

    move_held(&mut s, 10.0, -6.0);
    s.handle_event(&InputEvent::PointerUp {
        x: 10.0,
        y: -6.0,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(s.mode, Mode::Select);
    // no stroke was captured during the forced pan
    assert_eq!(s.store.len(), 0);
}

#[test]
fn pan_drag_accumulates_client_delta_over_zoom() {
    let mut s = session();
    s.viewport.set_zoom(2.0);
    s.set_mode(Mode::Pan);

    s.handle_event(&InputEvent::PointerDown {
        x: 0.0,
        y: 0.0,
        button: PointerButton::Primary,
        modifiers: Modifiers::NONE,
    });
    move_held(&mut s, 10.0, -6.0);
    assert_eq!(s.viewport.pan_offset, Point::new(5.0, -3.0));

    move_held(&mut s, 20.0, -12.0);
    assert_eq!(s.viewport.pan_offset, Point::new(10.0, -6.0));
}

#[test]
fn space_hold_pans_until_release() {
    let mut s = session();
    s.handle_event(&InputEvent::KeyDown {
        key: " ".to_string(),
        modifiers: Modifiers::NONE,
    });
    assert_eq!(s.mode, Mode::Pan);
    s.handle_event(&InputEvent::KeyUp {
        key: " ".to_string(),
        modifiers: Modifiers::NONE,
    });
    assert_eq!(s.mode, Mode::Select);
}

// ─── Wheel routing ──────────────────────────────────────────────────────

#[test]
fn ctrl_wheel_zooms_and_clamps() {
    let mut s = session();
    for _ in 0..100 {
        wheel(&mut s, 0.0, -1.0, Modifiers::CTRL);
        assert!(s.viewport.zoom <= MAX_ZOOM);
    }
    assert_eq!(s.viewport.zoom, MAX_ZOOM);

    for _ in 0..200 {
        wheel(&mut s, 0.0, 1.0, Modifiers::CTRL);
        assert!(s.viewport.zoom >= MIN_ZOOM);
    }
    assert_eq!(s.viewport.zoom, MIN_ZOOM);
}

#[test]
fn ctrl_wheel_keeps_cursor_content_fixed() {
    let mut s = session();
    s.viewport.pan_offset = Point::new(30.0, -10.0);
    let cursor = Point::new(200.0, 150.0);
    let before = s.viewport.to_canvas(cursor);

    wheel(&mut s, 0.0, -1.0, Modifiers::CTRL);
    let after = s.viewport.to_canvas(cursor);
    assert!((before.x - after.x).abs() < 1e-3);
    assert!((before.y - after.y).abs() < 1e-3);
}

#[test]
fn plain_wheel_pans() {
    let mut s = session();
    wheel(&mut s, 3.0, 7.0, Modifiers::NONE);
    assert_eq!(s.viewport.pan_offset, Point::new(-3.0, -7.0));
}

#[test]
fn shift_wheel_pans_on_the_other_axis() {
    let mut s = session();
    wheel(&mut s, 3.0, 7.0, Modifiers::SHIFT);
    assert_eq!(s.viewport.pan_offset, Point::new(-7.0, -3.0));
}

#[test]
fn alt_wheel_adjusts_line_width() {
    let mut s = session();
    let start = s.line_width;

    wheel(&mut s, 0.0, 1.0, Modifiers::ALT);
    assert_eq!(s.line_width, start - 1.0);
    wheel(&mut s, 0.0, -1.0, Modifiers::ALT);
    assert_eq!(s.line_width, start);

    let shift_alt = Modifiers {
        shift: true,
        ..Modifiers::ALT
    };
    wheel(&mut s, 0.0, -1.0, shift_alt);
    assert_eq!(s.line_width, start + 5.0);

    let ctrl_alt = Modifiers {
        ctrl: true,
        ..Modifiers::ALT
    };
    wheel(&mut s, 0.0, -1.0, ctrl_alt);
    assert_eq!(s.line_width, start + 15.0);
}

#[test]
fn line_width_clamps_to_range() {
    let mut s = session();
    for _ in 0..50 {
        wheel(&mut s, 0.0, 1.0, Modifiers::ALT);
    }
    assert_eq!(s.line_width, MIN_LINE_WIDTH);
    for _ in 0..100 {
        wheel(&mut s, 0.0, -1.0, Modifiers::ALT);
    }
    assert_eq!(s.line_width, MAX_LINE_WIDTH);
}

// ─── Selection ──────────────────────────────────────────────────────────

#[test]
fn marquee_targets_topmost_intersecting_shape() {
    let mut s = session();
    s.set_mode(Mode::Draw);
    for (x0, y0, x1, y1) in [(30.0, 30.0, 40.0, 40.0), (32.0, 32.0, 44.0, 44.0)] {
        s.handle_event(&InputEvent::PointerDown {
            x: x0,
            y: y0,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        });
        move_held(&mut s, x1, y1);
        s.handle_event(&InputEvent::PointerUp {
            x: x1,
            y: y1,
            modifiers: Modifiers::NONE,
        });
    }
    let topmost = s.store.iter().last().map(|shape| shape.id);
    s.set_mode(Mode::Select);

    s.handle_event(&InputEvent::PointerDown {
        x: 10.0,
        y: 10.0,
        button: PointerButton::Primary,
        modifiers: Modifiers::NONE,
    });
    move_held(&mut s, 60.0, 60.0);
    s.handle_event(&InputEvent::PointerUp {
        x: 60.0,
        y: 60.0,
        modifiers: Modifiers::NONE,
    });

    assert_eq!(s.target, topmost);

    s.handle_event(&InputEvent::KeyDown {
        key: "Delete".to_string(),
        modifiers: Modifiers::NONE,
    });
    assert_eq!(s.store.len(), 1);
}

#[test]
fn select_drag_tracks_normalized_rect_and_resets() {
    let mut s = session();
    s.handle_event(&InputEvent::PointerDown {
        x: 50.0,
        y: 40.0,
        button: PointerButton::Primary,
        modifiers: Modifiers::NONE,
    });
    assert!(s.selection.active);

    // drag up-left of the anchor
    move_held(&mut s, 20.0, 10.0);
    assert_eq!((s.selection.left, s.selection.top), (20.0, 10.0));
    assert_eq!((s.selection.width, s.selection.height), (30.0, 30.0));

    s.handle_event(&InputEvent::PointerUp {
        x: 20.0,
        y: 10.0,
        modifiers: Modifiers::NONE,
    });
    assert!(!s.selection.active);
    assert_eq!((s.selection.width, s.selection.height), (0.0, 0.0));
}
