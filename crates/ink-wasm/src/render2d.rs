//! Session → Canvas 2D drawing.
//!
//! Strokes every committed shape plus the live capture into a
//! `CanvasRenderingContext2d`, under the viewport transform. Round caps
//! and joins throughout; pending-erase shapes drop to reduced alpha so an
//! erase sweep is visible before it commits.

use ink_core::model::{Color, Matrix, Path, PathCmd, Point};
use ink_editor::CanvasSession;
use ink_render::smooth::smooth_path;
use web_sys::CanvasRenderingContext2d;

const PENDING_ERASE_ALPHA: f64 = 0.4;
const SELECTION_STROKE: &str = "#2A5FA5";

fn color_css(c: Color) -> String {
    if (c.a - 1.0).abs() < f32::EPSILON {
        c.to_hex()
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            (c.r * 255.0) as u8,
            (c.g * 255.0) as u8,
            (c.b * 255.0) as u8,
            c.a
        )
    }
}

pub fn render_session(ctx: &CanvasRenderingContext2d, session: &CanvasSession) {
    let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(
        0.0,
        0.0,
        session.config.width as f64,
        session.config.height as f64,
    );

    let vp = &session.viewport;
    let _ = ctx.set_transform(
        vp.zoom as f64,
        0.0,
        0.0,
        vp.zoom as f64,
        vp.pan_offset.x as f64,
        vp.pan_offset.y as f64,
    );

    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for shape in session.store.iter() {
        ctx.save();
        apply_matrix(ctx, &shape.matrix);
        if shape.pending_erase {
            ctx.set_global_alpha(PENDING_ERASE_ALPHA);
        }
        stroke_path(ctx, &shape.path);
        ctx.restore();
    }

    if let Some(live) = session.live_path() {
        stroke_path(ctx, live);
    }

    if session.selection.active {
        draw_selection(ctx, session);
    }
}

fn apply_matrix(ctx: &CanvasRenderingContext2d, m: &Matrix) {
    let _ = ctx.transform(
        m[0] as f64,
        m[1] as f64,
        m[2] as f64,
        m[3] as f64,
        m[4] as f64,
        m[5] as f64,
    );
}

fn stroke_path(ctx: &CanvasRenderingContext2d, path: &Path) {
    if path.points.is_empty() {
        return;
    }
    trace_path(ctx, &path.points);
    ctx.set_stroke_style_str(&color_css(path.color));
    ctx.set_line_width(path.line_width as f64);
    ctx.stroke();
}

fn trace_path(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    for cmd in smooth_path(points) {
        match cmd {
            PathCmd::MoveTo(x, y) => ctx.move_to(x as f64, y as f64),
            PathCmd::CubicTo(c1x, c1y, c2x, c2y, x, y) => ctx.bezier_curve_to(
                c1x as f64,
                c1y as f64,
                c2x as f64,
                c2y as f64,
                x as f64,
                y as f64,
            ),
        }
    }
}

fn draw_selection(ctx: &CanvasRenderingContext2d, session: &CanvasSession) {
    let sel = &session.selection;
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(1.0 / session.viewport.zoom as f64);
    let _ = ctx.set_line_dash(&js_sys::Array::of2(
        &wasm_bindgen::JsValue::from_f64(4.0),
        &wasm_bindgen::JsValue::from_f64(4.0),
    ));
    ctx.stroke_rect(
        sel.left as f64,
        sel.top as f64,
        sel.width as f64,
        sel.height as f64,
    );
    ctx.restore();
}
