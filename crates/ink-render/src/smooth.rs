//! Raw polyline → smooth cubic curve descriptor.
//!
//! Catmull-Rom-style rule: the control point for a point P sits along the
//! direction of the line joining P's neighbors, offset by
//! `SMOOTHING × |neighbor line|`; the outgoing control point's direction is
//! reversed. Edge points substitute themselves for the missing neighbor.
//! This gives continuous tangents across hand-drawn input without
//! overshoot.
//!
//! Everything here is pure: the descriptor is re-derived from the stored
//! point sequence on every paint, never persisted.

use ink_core::model::{PathCmd, Point};

/// Control-point offset as a fraction of the neighbor-line length.
pub const SMOOTHING: f32 = 0.2;

/// Polar decomposition of the segment `a → b`.
#[derive(Debug, Clone, Copy)]
struct Polar {
    length: f32,
    angle: f32,
}

fn line(a: Point, b: Point) -> Polar {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    Polar {
        length: dx.hypot(dy),
        angle: dy.atan2(dx),
    }
}

fn control_point(
    current: Point,
    previous: Option<Point>,
    next: Option<Point>,
    reverse: bool,
) -> Point {
    let p = previous.unwrap_or(current);
    let n = next.unwrap_or(current);
    let l = line(p, n);
    let angle = l.angle + if reverse { std::f32::consts::PI } else { 0.0 };
    let length = l.length * SMOOTHING;
    Point::new(
        current.x + angle.cos() * length,
        current.y + angle.sin() * length,
    )
}

/// Produce the curve descriptor for a point sequence: one `MoveTo` for the
/// first point, then one `CubicTo` per remaining point. Empty input yields
/// an empty descriptor.
pub fn smooth_path(points: &[Point]) -> Vec<PathCmd> {
    let mut cmds = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            cmds.push(PathCmd::MoveTo(p.x, p.y));
            continue;
        }
        let start = control_point(
            points[i - 1],
            i.checked_sub(2).map(|j| points[j]),
            Some(*p),
            false,
        );
        let end = control_point(*p, Some(points[i - 1]), points.get(i + 1).copied(), true);
        cmds.push(PathCmd::CubicTo(start.x, start.y, end.x, end.y, p.x, p.y));
    }
    cmds
}
