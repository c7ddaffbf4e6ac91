//! Host color-picker seam.
//!
//! Picking happens outside the widget (an eyedropper dialog, a native
//! chooser). The session applies the result only on success — a failed or
//! cancelled pick leaves the current color untouched.

use ink_core::model::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    /// The host exposes no picker.
    Unavailable,
    /// The user dismissed the picker.
    Cancelled,
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickError::Unavailable => write!(f, "color picker unavailable"),
            PickError::Cancelled => write!(f, "color pick cancelled"),
        }
    }
}

impl std::error::Error for PickError {}

pub trait ColorPicker {
    fn pick(&mut self) -> Result<Color, PickError>;
}
