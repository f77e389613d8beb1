//! Module with the text fitting & layout engine.
//!
//! The engine works with any `Typeface`, i.e. something that can measure
//! and rasterize single lines of text at integer font sizes.
//! Everything else (wrapping, fitting, placement) is derived from that.

mod fit;
mod layout;
mod render;
mod wrap;
#[cfg(test)]
pub(crate) mod testing;

pub use self::fit::{fit, Fit};
pub use self::layout::{place, place_by_name};
pub use self::render::{draw_outline, draw_text, DrawRequest};
pub use self::wrap::wrap;


use std::fmt;

use crate::model::Dimensions;


/// Additional vertical space between lines of text, in pixels.
pub const LINE_SPACING: u32 = 4;


/// Vertical metrics of a font at particular size, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VMetrics {
    /// Height above the baseline.
    pub ascent: u32,
    /// Depth below the baseline (positive).
    pub descent: u32,
    /// Gap the font itself recommends between lines.
    pub line_gap: u32,
}


/// Font capability needed to fit and draw text.
pub trait Typeface {
    /// Width of a single line of text, in pixels.
    fn line_width(&self, line: &str, size: u32) -> u32;

    /// Vertical metrics at given size.
    fn metrics(&self, size: u32) -> VMetrics;

    /// Rasterize a single line of text.
    ///
    /// `origin` is the top-left corner of the line (the baseline lies
    /// `ascent` pixels below it). `plot` receives pixel coordinates
    /// and the glyph coverage there, from 0.0 to 1.0.
    fn rasterize(&self, line: &str, size: u32, origin: (f32, f32),
                 plot: &mut dyn FnMut(i32, i32, f32));

    /// Characters of given text that the typeface has no glyphs for.
    fn missing_glyphs(&self, _text: &str) -> Vec<char> {
        vec![]
    }
}


/// A typeface at particular font size.
pub struct SizedFont<'f, F: ?Sized + 'f> {
    typeface: &'f F,
    size: u32,
}

impl<'f, F: ?Sized> SizedFont<'f, F> {
    #[inline]
    pub fn new(typeface: &'f F, size: u32) -> Self {
        SizedFont{typeface, size}
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn typeface(&self) -> &'f F {
        self.typeface
    }
}

impl<'f, F: ?Sized + Typeface> SizedFont<'f, F> {
    #[inline]
    pub fn metrics(&self) -> VMetrics {
        self.typeface.metrics(self.size)
    }

    #[inline]
    pub fn line_width(&self, line: &str) -> u32 {
        self.typeface.line_width(line, self.size)
    }

    /// Distance between the tops of two consecutive lines.
    pub fn line_advance(&self) -> u32 {
        let m = self.metrics();
        m.ascent + m.line_gap + LINE_SPACING
    }

    /// Measure a (possibly multi-line) text drawn with a stroke of given width.
    ///
    /// The height doesn't include the descent of the last line.
    pub fn text_dimensions(&self, text: &str, stroke_width: u32) -> Dimensions {
        let m = self.metrics();
        let (mut line_count, mut width) = (0u32, 0u32);
        for line in text.split('\n') {
            line_count += 1;
            width = width.max(self.line_width(line));
        }
        let height = line_count.saturating_mul(m.ascent)
            .saturating_add((line_count - 1).saturating_mul(m.line_gap + LINE_SPACING));
        let padding = stroke_width.saturating_mul(2);
        Dimensions::new(width.saturating_add(padding), height.saturating_add(padding))
    }
}

impl<'f, F: ?Sized> Clone for SizedFont<'f, F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'f, F: ?Sized> Copy for SizedFont<'f, F> {}

impl<'f, F: ?Sized> fmt::Debug for SizedFont<'f, F> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("SizedFont")
            .field("size", &self.size)
            .finish()
    }
}
