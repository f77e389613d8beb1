//! Module implementing the font size fitting.

use crate::model::Dimensions;
use super::{wrap, SizedFont, Typeface};


/// Result of fitting a text into a box.
#[derive(Debug)]
pub struct Fit<'f, F: ?Sized + 'f> {
    /// Text with line breaks inserted.
    pub text: String,
    /// Font at the chosen size.
    pub font: SizedFont<'f, F>,
    /// Dimensions of the text block, including stroke & descent of the last line.
    pub dimensions: Dimensions,
    /// Whether the text doesn't fit even at the smallest font size.
    pub overflows: bool,
}

impl<'f, F: ?Sized> Fit<'f, F> {
    #[inline]
    pub fn size(&self) -> u32 {
        self.font.size()
    }
}


/// Find the largest font size at which the text fits within given bounds.
///
/// Sizes are tried in increasing order, rewrapping the text at each one,
/// until the first size where the text block is too big. Block dimensions
/// are assumed to grow with font size, but the search stops at `max_size`
/// regardless.
///
/// If the text doesn't fit even at size 1, it's returned at that size
/// with the `overflows` flag set.
pub fn fit<'f, F>(text: &str,
                  typeface: &'f F,
                  stroke_width: u32,
                  bounds: Dimensions,
                  max_size: u32) -> Fit<'f, F>
    where F: ?Sized + Typeface
{
    trace!("Fitting text of length {} into {} box (stroke width: {})",
        text.len(), bounds, stroke_width);

    let mut best = measure(text, typeface, 1, stroke_width, bounds.width);
    if !best.dimensions.fits_within(bounds) {
        warn!("Text doesn't fit its {} box even at font size 1 (needs {}): {:?}",
            bounds, best.dimensions, text);
        best.overflows = true;
        return best;
    }

    for size in 2..=max_size.max(1) {
        let candidate = measure(text, typeface, size, stroke_width, bounds.width);
        if !candidate.dimensions.fits_within(bounds) {
            trace!("Font size {} gives {} block, too big for {} box",
                size, candidate.dimensions, bounds);
            break;
        }
        best = candidate;
    }

    debug!("Fitted text at font size {} as {} block", best.size(), best.dimensions);
    best
}

/// Wrap & measure the text at given font size.
fn measure<'f, F>(text: &str,
                  typeface: &'f F,
                  size: u32,
                  stroke_width: u32,
                  max_width: u32) -> Fit<'f, F>
    where F: ?Sized + Typeface
{
    let font = SizedFont::new(typeface, size);
    let text = wrap(text, font, stroke_width, max_width);
    let mut dimensions = font.text_dimensions(&text, stroke_width);
    dimensions.height = dimensions.height.saturating_add(font.metrics().descent);
    Fit{text, font, dimensions, overflows: false}
}
