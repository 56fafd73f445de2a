//! Pixel dimensions of a registered image.

use std::fmt;

/// Width and height of an image in pixels.
///
/// Both values are strictly positive; use [`Dimensions::new`] to construct
/// one from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Build a `Dimensions`, returning `None` if either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width {}, height {}", self.width, self.height)
    }
}
