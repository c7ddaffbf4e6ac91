//! Shape store → Vello drawing commands.
//!
//! Walks the committed shapes in paint order and strokes each smoothed
//! path, then the in-progress stroke on top. The viewport transform is
//! applied once per frame; a shape's own nudge matrix composes under it.

use crate::smooth::smooth_path;
use ink_core::model::{Matrix, Path, PathCmd, Point, Shape};
use ink_core::store::ShapeStore;
use ink_core::viewport::Viewport;
use kurbo::{Affine, BezPath, Cap, Join, Stroke};
use peniko::Color;
use vello::Scene;

/// Stroke alpha for shapes marked pending-erase, so the sweep is visible
/// before the batch commit.
const PENDING_ERASE_ALPHA: f32 = 0.4;

/// Paint every committed shape plus the live stroke, if any.
///
/// Call once per frame with a freshly-cleared `Scene`. The caller presents
/// the scene.
pub fn paint_scene(
    scene: &mut Scene,
    store: &ShapeStore,
    viewport: &Viewport,
    live: Option<&Path>,
) {
    let view = viewport_affine(viewport);
    for shape in store.iter() {
        paint_shape(scene, shape, view);
    }
    if let Some(path) = live {
        stroke_path(scene, path, view, 1.0);
    }
}

/// `screen = canvas * zoom + pan_offset` as a kurbo affine.
pub fn viewport_affine(viewport: &Viewport) -> Affine {
    Affine::new([
        viewport.zoom as f64,
        0.0,
        0.0,
        viewport.zoom as f64,
        viewport.pan_offset.x as f64,
        viewport.pan_offset.y as f64,
    ])
}

fn matrix_affine(m: &Matrix) -> Affine {
    Affine::new([
        m[0] as f64,
        m[1] as f64,
        m[2] as f64,
        m[3] as f64,
        m[4] as f64,
        m[5] as f64,
    ])
}

fn paint_shape(scene: &mut Scene, shape: &Shape, view: Affine) {
    let alpha = if shape.pending_erase {
        PENDING_ERASE_ALPHA
    } else {
        1.0
    };
    log::trace!("paint shape {} alpha {alpha}", shape.id);
    stroke_path(scene, &shape.path, view * matrix_affine(&shape.matrix), alpha);
}

fn stroke_path(scene: &mut Scene, path: &Path, transform: Affine, alpha: f32) {
    if path.points.is_empty() {
        return;
    }
    let bez = bez_path(&path.points);
    let style = Stroke::new(path.line_width as f64)
        .with_caps(Cap::Round)
        .with_join(Join::Round);
    let c = path.color;
    let color = Color::new([c.r, c.g, c.b, c.a * alpha]);
    scene.stroke(&style, transform, color, None, &bez);
}

/// Build a kurbo path from the smoothed curve descriptor.
pub fn bez_path(points: &[Point]) -> BezPath {
    let mut bez = BezPath::new();
    for cmd in smooth_path(points) {
        match cmd {
            PathCmd::MoveTo(x, y) => bez.move_to((x as f64, y as f64)),
            PathCmd::CubicTo(c1x, c1y, c2x, c2y, x, y) => bez.curve_to(
                (c1x as f64, c1y as f64),
                (c2x as f64, c2y as f64),
                (x as f64, y as f64),
            ),
        }
    }
    bez
}
