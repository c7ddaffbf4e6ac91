//! Core data model for freehand drawing.
//!
//! A stroke is captured as a raw `Path` (ordered point samples plus the pen
//! settings active when the stroke started). On pointer-release the path is
//! finalized into a `Shape`: an identified, bounded entry in the shape store
//! with its own affine matrix. Smoothing is a render-layer concern — stored
//! data is always the raw polyline, never curve geometry.

use crate::id::ShapeId;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB` or `#RRGGBB`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    1.0,
                ))
            }
            6 => {
                let r = hex_val(bytes[0])? * 16 + hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? * 16 + hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? * 16 + hex_val(bytes[5])?;
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    1.0,
                ))
            }
            _ => None,
        }
    }

    /// Format as `#RRGGBB` (alpha is dropped).
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

// ─── Points & bounds ─────────────────────────────────────────────────────

/// A sampled location in canvas-local coordinates (pan/zoom already
/// applied at capture time).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned bounding box (left/top/width/height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Tight bounds of a point set. `None` for an empty set.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            left: min_x,
            top: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left <= other.left + other.width
            && other.left <= self.left + self.width
            && self.top <= other.top + other.height
            && other.top <= self.top + self.height
    }

    /// Grow uniformly by `d` on every side.
    pub fn inflate(&self, d: f32) -> Bounds {
        Bounds {
            left: self.left - d,
            top: self.top - d,
            width: self.width + 2.0 * d,
            height: self.height + 2.0 * d,
        }
    }
}

// ─── Paths & shapes ──────────────────────────────────────────────────────

/// Inline capacity for short strokes (taps, flicks) — longer strokes spill.
pub type PointSeq = SmallVec<[Point; 16]>;

/// A raw stroke, in progress or finalized. Points are append-only while
/// capturing; order defines stroke direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub color: Color,
    pub line_width: f32,
    pub points: PointSeq,
}

impl Path {
    /// Open a new path seeded with one point. Pen settings are snapshotted
    /// here — later changes never retroactively affect this stroke.
    pub fn begin(color: Color, line_width: f32, first: Point) -> Self {
        Self {
            color,
            line_width,
            points: smallvec![first],
        }
    }

    /// Build a path from an existing point sequence (straighten substitution).
    pub fn from_points(color: Color, line_width: f32, points: impl Into<PointSeq>) -> Self {
        Self {
            color,
            line_width,
            points: points.into(),
        }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }
}

/// A 2D affine transform in the usual 6-component layout
/// `[a, b, c, d, tx, ty]`.
pub type Matrix = [f32; 6];

pub const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Curve descriptor command emitted by the smoothing pass. Never stored —
/// always re-derived from the raw point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCmd {
    MoveTo(f32, f32),
    CubicTo(f32, f32, f32, f32, f32, f32),
}

/// A finalized, stored stroke with an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub path: Path,
    /// Marked while the erase tool sweeps over this shape; the whole marked
    /// batch is removed atomically on pointer-up.
    pub pending_erase: bool,
    pub bounds: Bounds,
    pub matrix: Matrix,
}

impl Shape {
    /// Finalize a captured path. A degenerate single-point stroke is
    /// duplicated to length 2 so it stays renderable as a dot.
    pub fn from_path(mut path: Path) -> Self {
        if path.points.len() == 1 {
            let only = path.points[0];
            path.points.push(only);
        }
        // from_points cannot fail here: a path always has at least one point
        let bounds = Bounds::from_points(&path.points).unwrap_or(Bounds {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        });
        Self {
            id: ShapeId::next(),
            path,
            pending_erase: false,
            bounds,
            matrix: IDENTITY,
        }
    }

    /// Scale this shape's matrix by `factor`, compensating translation by
    /// half the shape extent so it grows in place. The viewport is untouched.
    pub fn rescale(&mut self, factor: f32) {
        let cx = self.bounds.width / 2.0;
        let cy = self.bounds.height / 2.0;
        for m in &mut self.matrix[..4] {
            *m *= factor;
        }
        self.matrix[4] = self.matrix[4] * factor + (1.0 - factor) * cx;
        self.matrix[5] = self.matrix[5] * factor + (1.0 - factor) * cy;
    }
}
