//! Stroke capture state machine.
//!
//! Holds the single in-progress path between pointer-down and pointer-up
//! in Draw mode, including the shift-straighten sub-state: while shift is
//! held the live path is replaced by a two-point segment snapped to the
//! nearest 15° increment from the stroke's start; the freehand path
//! captured before straightening is stashed and restored on release.

use ink_core::model::{Color, Path, Point};
use smallvec::smallvec;

/// Straighten snaps to multiples of π/12 (15°).
pub const SNAP_INCREMENT: f32 = std::f32::consts::PI / 12.0;

/// Snap `end` so the segment `start → end` lies on the nearest 15°
/// increment, preserving the segment length.
pub fn snapped_end(start: Point, end: Point) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = dx.hypot(dy);
    let angle = (dy.atan2(dx) / SNAP_INCREMENT).round() * SNAP_INCREMENT;
    Point::new(
        start.x + angle.cos() * length,
        start.y + angle.sin() * length,
    )
}

/// Freehand path stashed while straightening is active.
#[derive(Debug, Clone)]
struct StraightStroke {
    start: Point,
    original: Path,
}

/// The in-progress stroke. At most one exists at a time.
#[derive(Debug, Clone)]
pub struct StrokeCapture {
    path: Path,
    straight: Option<StraightStroke>,
}

impl StrokeCapture {
    /// Open a capture seeded with the adjusted pointer-down position.
    /// Pen settings are snapshotted now.
    pub fn begin(color: Color, line_width: f32, p: Point) -> Self {
        Self {
            path: Path::begin(color, line_width, p),
            straight: None,
        }
    }

    /// The live path, for display.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a freehand sample. If straightening was active, the stashed
    /// freehand path is restored first (shift released mid-drag).
    pub fn freehand_to(&mut self, p: Point) {
        if let Some(straight) = self.straight.take() {
            self.path = straight.original;
        }
        self.path.push(p);
    }

    /// Straighten against the current pointer position. On the first call
    /// the freehand path is stashed; afterwards the live path is always
    /// `[start, snapped_end]`.
    pub fn straighten_to(&mut self, end: Point) {
        let start = match &self.straight {
            Some(s) => s.start,
            None => {
                let start = self.path.points[0];
                self.straight = Some(StraightStroke {
                    start,
                    original: self.path.clone(),
                });
                start
            }
        };
        self.path = Path::from_points(
            self.path.color,
            self.path.line_width,
            smallvec![start, snapped_end(start, end)],
        );
    }

    /// Shift pressed mid-stroke: immediately collapse the live path to its
    /// first and last points, stashing the freehand original.
    pub fn collapse_to_segment(&mut self) {
        if self.straight.is_some() {
            return;
        }
        let first = self.path.points[0];
        let last = *self.path.points.last().unwrap_or(&first);
        self.straight = Some(StraightStroke {
            start: first,
            original: self.path.clone(),
        });
        self.path = Path::from_points(
            self.path.color,
            self.path.line_width,
            smallvec![first, last],
        );
    }

    /// Shift released: restore the freehand path captured before
    /// straightening began. No-op if straightening never started.
    pub fn release_straight(&mut self) {
        if let Some(straight) = self.straight.take() {
            self.path = straight.original;
        }
    }

    /// Pointer released: yield the captured path for finalization.
    pub fn finish(self) -> Path {
        self.path
    }
}
