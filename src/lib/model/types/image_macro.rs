//! Module implementing the `ImageMacro` type, its text boxes and its builder.

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

use thiserror::Error;

use crate::model::constants::MAX_TEXT_BOX_COUNT;
use super::geometry::{Dimensions, Point};
use super::style::Style;


/// Rectangular area of the template where a single text is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextBox {
    /// Top-left corner of the box.
    pub pos: Point,
    /// Width & height of the box.
    pub dimensions: Dimensions,
    /// Style overrides specific to this box.
    #[serde(default)]
    pub style: Style,
}

impl TextBox {
    #[inline]
    pub fn new<P: Into<Point>, D: Into<Dimensions>>(pos: P, dimensions: D) -> Self {
        TextBox{pos: pos.into(), dimensions: dimensions.into(), style: Style::default()}
    }

    /// Attach style overrides to the box.
    #[inline]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style; self
    }
}


/// Describes an image macro template: the image and the boxes to put texts in.
///
/// Texts are matched with the boxes by their order.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Definition")]
pub struct ImageMacro {
    /// File name of the template image.
    pub filename: String,
    /// Boxes for the texts, in the order texts are expected.
    pub text_boxes: Vec<TextBox>,
    /// Style overrides for all boxes of this macro.
    pub style: Style,
}

impl ImageMacro {
    /// Number of texts this macro expects.
    #[inline]
    pub fn text_count(&self) -> usize {
        self.text_boxes.len()
    }
}

impl fmt::Debug for ImageMacro {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("ImageMacro");
        ds.field("filename", &self.filename);
        if !self.text_boxes.is_empty() {
            ds.field("text_boxes", &self.text_boxes);
        }
        if !self.style.is_empty() {
            ds.field("style", &self.style);
        }
        ds.finish()
    }
}


/// Image macro definition as it appears in the input, before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Definition {
    filename: String,
    #[serde(default)]
    text_boxes: Vec<TextBox>,
    #[serde(default)]
    style: Style,
}

impl TryFrom<Definition> for ImageMacro {
    type Error = Error;

    fn try_from(def: Definition) -> Result<Self, Self::Error> {
        let mut builder = Builder::new().filename(def.filename).style(def.style);
        for text_box in def.text_boxes {
            builder = builder.text_box(text_box);
        }
        builder.build()
    }
}


/// Builder for `ImageMacro`.
#[derive(Debug, Default, PartialEq)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    filename: Option<String>,
    text_boxes: Vec<TextBox>,
    style: Style,
}

impl Builder {
    /// Create a new `Builder` for an `ImageMacro`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder {
    /// Set the template image file used by resulting `ImageMacro`.
    #[inline]
    pub fn filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.filename = Some(filename.into()); self
    }

    /// Add a text box to the `ImageMacro`.
    #[inline]
    pub fn text_box(mut self, text_box: TextBox) -> Self {
        self.text_boxes.push(text_box); self
    }

    /// Set the macro-level style overrides.
    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style; self
    }

    /// Build the resulting `ImageMacro`.
    pub fn build(self) -> Result<ImageMacro, Error> {
        self.validate()?;
        Ok(ImageMacro{
            filename: self.filename.unwrap_or_default(),
            text_boxes: self.text_boxes,
            style: self.style,
        })
    }

    #[doc(hidden)]
    fn validate(&self) -> Result<(), Error> {
        match self.filename {
            None => return Err(Error::NoFilename),
            Some(ref f) if f.trim().is_empty() => return Err(Error::NoFilename),
            _ => {}
        }
        if self.text_boxes.len() > MAX_TEXT_BOX_COUNT {
            return Err(Error::TooManyTextBoxes(self.text_boxes.len()));
        }
        Ok(())
    }
}


/// Error while building an `ImageMacro`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No template image file name given.
    #[error("no template file name")]
    NoFilename,
    /// Too many text boxes.
    #[error("too many text boxes: {0} > {}", MAX_TEXT_BOX_COUNT)]
    TooManyTextBoxes(usize),
}


/// Collection of image macros, as loaded from a definitions file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacroSet {
    /// Global style, used where macros & their boxes don't specify an attribute.
    #[serde(default)]
    pub style: Style,
    /// Image macros by name.
    #[serde(default)]
    pub macros: BTreeMap<String, ImageMacro>,
}

impl MacroSet {
    /// Look up an image macro by its name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&ImageMacro> {
        self.macros.get(name)
    }

    /// Names of all the macros, in alphabetical order.
    #[inline]
    pub fn names<'s>(&'s self) -> impl Iterator<Item=&'s str> + 's {
        self.macros.keys().map(|k| k.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}
