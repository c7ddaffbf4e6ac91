//! Viewport pan/zoom transform.
//!
//! One transform for the whole canvas: `screen = canvas * zoom + pan_offset`.
//! Incoming pointer coordinates are mapped into canvas space with
//! [`Viewport::to_canvas`] before they touch any stroke or hit test, so
//! stored points are always pan/zoom independent.

use crate::model::Point;
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 8.0;
/// Multiplicative zoom change per wheel step.
pub const ZOOM_STEP: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub pan_offset: Point,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_offset: Point::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a screen-space position into canvas space.
    pub fn to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_offset.x) / self.zoom,
            (screen.y - self.pan_offset.y) / self.zoom,
        )
    }

    /// Map a canvas-space position back to screen space.
    pub fn to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + self.pan_offset.x,
            canvas.y * self.zoom + self.pan_offset.y,
        )
    }

    /// Accumulate a pan drag. The client-space delta is divided by the
    /// current zoom so panning speed is compensated at every zoom level.
    pub fn pan_by(&mut self, client_dx: f32, client_dy: f32) {
        self.pan_offset.x += client_dx / self.zoom;
        self.pan_offset.y += client_dy / self.zoom;
    }

    /// Wheel pan. Vertical delta drives the primary axis; with `swap_axes`
    /// (shift-wheel) the deltas trade places so a plain vertical wheel
    /// scrolls horizontally.
    pub fn scroll(&mut self, dx: f32, dy: f32, swap_axes: bool) {
        if swap_axes {
            self.pan_offset.x -= dy;
            self.pan_offset.y -= dx;
        } else {
            self.pan_offset.x -= dx;
            self.pan_offset.y -= dy;
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zoom by one wheel step, keeping the canvas point under `cursor`
    /// fixed on screen. Solving `to_canvas(cursor)` invariant for the new
    /// offset gives `offset' = cursor - (cursor - offset) * zoom'/zoom`.
    pub fn zoom_about(&mut self, cursor: Point, zoom_in: bool) {
        let target = if zoom_in {
            self.zoom * ZOOM_STEP
        } else {
            self.zoom / ZOOM_STEP
        };
        let new_zoom = target.clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;
        self.pan_offset.x = cursor.x - (cursor.x - self.pan_offset.x) * ratio;
        self.pan_offset.y = cursor.y - (cursor.y - self.pan_offset.y) * ratio;
        log::trace!("zoom {} -> {}", self.zoom, new_zoom);
        self.zoom = new_zoom;
    }
}
