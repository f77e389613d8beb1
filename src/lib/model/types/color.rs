//! Module implementing the `Color` type.

use std::fmt;

use image::Rgba;


/// RGBA color of the text or its stroke.
///
/// A fully transparent color means "no fill": nothing is drawn with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Create an opaque color from its RGB channels.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 0xff)
    }

    /// Create a white color.
    #[inline]
    pub fn white() -> Self {
        Self::gray(0xff)
    }

    /// Create a black color.
    #[inline]
    pub fn black() -> Self {
        Self::gray(0x0)
    }

    /// Create a gray color of given intensity.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// The "no fill" color.
    #[inline]
    pub fn none() -> Self {
        Color(0, 0, 0, 0)
    }
}

impl Color {
    /// Alpha channel of the color.
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.3
    }

    /// Whether drawing with this color would leave no trace.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.3 == 0
    }

    /// Convert the color to its chromatic inverse, preserving alpha.
    #[inline]
    pub fn invert(self) -> Self {
        let Color(r, g, b, a) = self;
        Color(0xff - r, 0xff - g, 0xff - b, a)
    }

    /// Pixel of this color with alpha scaled by glyph coverage (0.0 to 1.0).
    #[inline]
    pub(crate) fn to_rgba(&self, coverage: f32) -> Rgba<u8> {
        let &Color(r, g, b, a) = self;
        let coverage = coverage.max(0.0).min(1.0);
        Rgba([r, g, b, (a as f32 * coverage).round() as u8])
    }
}

impl From<Color> for Rgba<u8> {
    #[inline]
    fn from(color: Color) -> Rgba<u8> {
        color.to_rgba(1.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b, a) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}", r, g, b)?;
        if a != 0xff {
            write!(fmt, "{:0>2x}", a)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use image::Rgba;
    use super::Color;

    #[test]
    fn display() {
        assert_eq!("#000000", Color::black().to_string());
        assert_eq!("#ff8000", Color::rgb(0xff, 0x80, 0x0).to_string());
        assert_eq!("#00000000", Color::none().to_string());
    }

    #[test]
    fn coverage_scales_alpha() {
        assert_eq!(Rgba([0xff, 0xff, 0xff, 0xff]), Color::white().to_rgba(1.0));
        assert_eq!(Rgba([0xff, 0xff, 0xff, 0x80]), Color::white().to_rgba(0.5));
        assert_eq!(Rgba([0x0, 0x0, 0x0, 0x0]), Color::black().to_rgba(-3.0));
        assert_eq!(Rgba([1, 2, 3, 100]), Color(1, 2, 3, 100).to_rgba(2.0));
    }

    #[test]
    fn transparency() {
        assert!(Color::none().is_transparent());
        assert!(!Color::black().is_transparent());
        assert!(!Color(1, 2, 3, 1).is_transparent());
        assert_eq!(Color(0xff, 0xff, 0xff, 7), Color(0, 0, 0, 7).invert());
    }
}
