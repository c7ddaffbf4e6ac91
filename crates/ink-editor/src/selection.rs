//! Rubber-band selection rectangle.
//!
//! Transient state for Select mode: an anchor set at pointer-down plus a
//! normalized left/top/width/height rectangle updated while dragging.
//! Reset whenever the select gesture ends.

use ink_core::model::{Bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    pub active: bool,
    /// Drag origin, fixed for the whole gesture.
    pub anchor: Point,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Selection {
    /// Start a drag at `p`.
    pub fn begin(&mut self, p: Point) {
        *self = Selection {
            active: true,
            anchor: p,
            left: p.x,
            top: p.y,
            width: 0.0,
            height: 0.0,
        };
    }

    /// Update against the current pointer position. The rectangle is
    /// normalized: dragging left/up of the anchor moves left/top instead
    /// of producing a negative extent.
    pub fn update(&mut self, p: Point) {
        if !self.active {
            return;
        }
        if p.x < self.anchor.x {
            self.left = p.x;
            self.width = self.anchor.x - p.x;
        } else {
            self.left = self.anchor.x;
            self.width = p.x - self.anchor.x;
        }
        if p.y < self.anchor.y {
            self.top = p.y;
            self.height = self.anchor.y - p.y;
        } else {
            self.top = self.anchor.y;
            self.height = p.y - self.anchor.y;
        }
    }

    /// The current rectangle, while a drag is active.
    pub fn bounds(&self) -> Option<Bounds> {
        self.active.then_some(Bounds {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
        })
    }

    pub fn reset(&mut self) {
        *self = Selection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drag_down_right() {
        let mut sel = Selection::default();
        sel.begin(Point::new(10.0, 10.0));
        sel.update(Point::new(30.0, 25.0));
        assert_eq!((sel.left, sel.top), (10.0, 10.0));
        assert_eq!((sel.width, sel.height), (20.0, 15.0));
    }

    #[test]
    fn drag_up_left_normalizes() {
        let mut sel = Selection::default();
        sel.begin(Point::new(10.0, 10.0));
        sel.update(Point::new(2.0, 4.0));
        assert_eq!((sel.left, sel.top), (2.0, 4.0));
        assert_eq!((sel.width, sel.height), (8.0, 6.0));
        // anchor never moves
        assert_eq!(sel.anchor, Point::new(10.0, 10.0));
    }

    #[test]
    fn reset_clears_everything() {
        let mut sel = Selection::default();
        sel.begin(Point::new(10.0, 10.0));
        sel.update(Point::new(30.0, 25.0));
        sel.reset();
        assert_eq!(sel, Selection::default());
        assert_eq!(sel.bounds(), None);
    }

    #[test]
    fn update_before_begin_is_noop() {
        let mut sel = Selection::default();
        sel.update(Point::new(5.0, 5.0));
        assert_eq!(sel, Selection::default());
    }
}
