//! Module defining pixel geometry types.

use std::fmt;


/// Position of a pixel on the image, relative to its top-left corner.
///
/// Coordinates are signed because text that doesn't fit its box
/// can be positioned to the left of (or above) it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Width & height of a rectangular area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Point{x, y}
    }
}

impl Dimensions {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Dimensions{width, height}
    }

    /// Whether an area of these dimensions fits within the other one.
    #[inline]
    pub fn fits_within(&self, other: Dimensions) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}
impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Dimensions::new(width, height)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}
impl fmt::Display for Dimensions {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}x{}", self.width, self.height)
    }
}
