//! Fill error.

use std::error::Error;
use std::fmt;

use image::ImageError;

use crate::model::AlignError;
use crate::resources::{FontLoader, Loader, TemplateLoader};
use crate::style::StyleError;


/// Error that may occur while filling an image macro.
pub enum FillError<Tl = TemplateLoader, Fl = FontLoader>
    where Tl: Loader, Fl: Loader
{
    /// Number of texts doesn't match the number of text boxes.
    TextCountMismatch { expected: usize, actual: usize },
    /// Style attribute couldn't be resolved.
    Style(StyleError),
    /// Alignment token isn't recognized.
    InvalidAlignment(AlignError),
    /// Text doesn't fit its box even at the smallest font size.
    DegenerateFit { index: usize, text: String, size: u32 },
    Template(String, Tl::Err),
    Font(String, Fl::Err),
    Encode(ImageError),
}

impl<Tl: Loader, Fl: Loader> From<StyleError> for FillError<Tl, Fl> {
    fn from(e: StyleError) -> Self {
        FillError::Style(e)
    }
}
impl<Tl: Loader, Fl: Loader> From<AlignError> for FillError<Tl, Fl> {
    fn from(e: AlignError) -> Self {
        FillError::InvalidAlignment(e)
    }
}

impl<Tl: Loader, Fl: Loader> Error for FillError<Tl, Fl> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            FillError::Style(ref e) => Some(e),
            FillError::InvalidAlignment(ref e) => Some(e),
            FillError::Template(_, ref e) => Some(e),
            FillError::Font(_, ref e) => Some(e),
            FillError::Encode(ref e) => Some(e),
            _ => None,
        }
    }
}

impl<Tl: Loader, Fl: Loader> fmt::Debug for FillError<Tl, Fl> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FillError::TextCountMismatch{expected, actual} => write!(fmt,
                "FillError::TextCountMismatch{{expected: {}, actual: {}}}", expected, actual),
            FillError::Style(ref e) => write!(fmt, "FillError::Style({:?})", e),
            FillError::InvalidAlignment(ref e) => write!(fmt, "FillError::InvalidAlignment({:?})", e),
            FillError::DegenerateFit{index, ref text, size} => write!(fmt,
                "FillError::DegenerateFit{{index: {}, text: {:?}, size: {}}}", index, text, size),
            FillError::Template(ref t, _) => write!(fmt, "FillError::Template({:?})", t),
            FillError::Font(ref f, _) => write!(fmt, "FillError::Font({:?})", f),
            FillError::Encode(ref e) => write!(fmt, "FillError::Encode({:?})", e),
        }
    }
}

impl<Tl: Loader, Fl: Loader> fmt::Display for FillError<Tl, Fl> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FillError::TextCountMismatch{expected, actual} => write!(fmt,
                "expected {} text(s), got {}", expected, actual),
            FillError::Style(ref e) => write!(fmt, "{}", e),
            FillError::InvalidAlignment(ref e) => write!(fmt, "{}", e),
            FillError::DegenerateFit{index, ref text, size} => write!(fmt,
                "text #{} ({:?}) doesn't fit its box even at font size {}", index + 1, text, size),
            FillError::Template(ref t, ref e) => write!(fmt, "cannot load template `{}`: {}", t, e),
            FillError::Font(ref f, ref e) => write!(fmt, "cannot load font `{}`: {}", f, e),
            FillError::Encode(ref e) => write!(fmt, "failed to encode the final image: {}", e),
        }
    }
}
