//! Module implementing the `Style` type.

use super::color::Color;
use super::super::constants::{DEFAULT_FONT, DEFAULT_HALIGN, DEFAULT_STROKE_FILL,
                              DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_FILL, DEFAULT_VALIGN};


/// Partial set of style attributes.
///
/// Styles can be attached to a text box, to a whole image macro,
/// or be global. Any attribute that's left unset is looked up
/// at the next, less specific level.
///
/// Alignments are kept as raw tokens and only interpreted when the text is laid out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    /// Horizontal alignment: `left`, `center` or `right`.
    pub text_align: Option<String>,
    /// Vertical alignment: `top`, `center` or `bottom`.
    pub vert_align: Option<String>,
    /// Name of the font to render the text with.
    pub font: Option<String>,
    /// Color of the text.
    pub text_fill: Option<Color>,
    /// Color of the text stroke.
    pub stroke_fill: Option<Color>,
    /// Width of the text stroke in pixels.
    pub stroke_width: Option<u32>,
}

impl Style {
    /// The built-in style that has every attribute set.
    pub fn defaults() -> Self {
        Style{
            text_align: Some(DEFAULT_HALIGN.to_string()),
            vert_align: Some(DEFAULT_VALIGN.to_string()),
            font: Some(DEFAULT_FONT.into()),
            text_fill: Some(DEFAULT_TEXT_FILL),
            stroke_fill: Some(DEFAULT_STROKE_FILL),
            stroke_width: Some(DEFAULT_STROKE_WIDTH),
        }
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
