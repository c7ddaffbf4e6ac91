//! Curve descriptor → SVG path data.
//!
//! For hosts that render shapes as `<svg><path d=…>` elements. The `d`
//! string is a pure view of the stored points, identical on every call.

use crate::smooth::smooth_path;
use ink_core::model::{PathCmd, Point};
use std::fmt::Write;

/// Render a point sequence as an SVG path `d` attribute:
/// `M x,y C c1x,c1y c2x,c2y x,y …`. Empty input yields an empty string.
pub fn svg_path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for cmd in smooth_path(points) {
        if !d.is_empty() {
            d.push(' ');
        }
        match cmd {
            PathCmd::MoveTo(x, y) => {
                let _ = write!(d, "M {x},{y}");
            }
            PathCmd::CubicTo(c1x, c1y, c2x, c2y, x, y) => {
                let _ = write!(d, "C {c1x},{c1y} {c2x},{c2y} {x},{y}");
            }
        }
    }
    d
}
