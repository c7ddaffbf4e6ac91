//! Hit testing: point → shape lookup.
//!
//! Walks the store back-to-front (last painted = topmost) and tests the
//! pointer against each stroke's polyline, padded by half the line width.
//! A cheap inflated-bounds check rejects most shapes before the per-segment
//! distance test. Tests run on raw canvas-space points; the per-shape
//! nudge matrix affects painting only.

use ink_core::model::{Bounds, Point};
use ink_core::store::ShapeStore;
use ink_core::ShapeId;

/// Distance from `p` to the segment `a → b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + ab.x * t, a.y + ab.y * t))
}

/// Distance from `p` to the nearest segment of a polyline.
fn polyline_distance(p: Point, points: &[Point]) -> f32 {
    points
        .windows(2)
        .map(|w| segment_distance(p, w[0], w[1]))
        .fold(f32::INFINITY, f32::min)
}

/// Find the topmost shape whose stroke passes under `p`, within
/// `line_width / 2 + tolerance`. Returns `None` on background.
pub fn hit_test(store: &ShapeStore, p: Point, tolerance: f32) -> Option<ShapeId> {
    for shape in store.iter().rev() {
        let reach = shape.path.line_width / 2.0 + tolerance;
        if !shape.bounds.inflate(reach).contains(p.x, p.y) {
            continue;
        }
        if polyline_distance(p, &shape.path.points) <= reach {
            return Some(shape.id);
        }
    }
    None
}

/// All shapes whose bounds intersect `rect`, bottom-to-top.
/// Used for marquee selection.
pub fn hit_test_rect(store: &ShapeStore, rect: &Bounds) -> Vec<ShapeId> {
    store
        .iter()
        .filter(|s| s.bounds.intersects(rect))
        .map(|s| s.id)
        .collect()
}
