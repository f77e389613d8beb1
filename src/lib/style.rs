//! Module resolving style attributes of text boxes.
//!
//! Every attribute is looked up independently, going from the most specific
//! level (the text box) to the least specific one (the built-in defaults).
//! The first level that has the attribute set provides its value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{AlignError, Color, HAlign, ImageMacro, Style, TextBox, VAlign};


/// Name of a single style attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    TextAlign,
    VertAlign,
    Font,
    TextFill,
    StrokeFill,
    StrokeWidth,
}

impl Attribute {
    /// All the attributes a `Style` can have.
    pub const ALL: &'static [Attribute] = &[
        Attribute::TextAlign, Attribute::VertAlign, Attribute::Font,
        Attribute::TextFill, Attribute::StrokeFill, Attribute::StrokeWidth,
    ];

    /// Name of the attribute as used in style definitions.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::TextAlign => "text_align",
            Attribute::VertAlign => "vert_align",
            Attribute::Font => "font",
            Attribute::TextFill => "text_fill",
            Attribute::StrokeFill => "stroke_fill",
            Attribute::StrokeWidth => "stroke_width",
        }
    }
}

impl FromStr for Attribute {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL.iter().cloned()
            .find(|a| a.name() == s)
            .ok_or_else(|| StyleError::UnknownAttribute(s.to_owned()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}


/// Value of a single style attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Alignment token or font name.
    Text(String),
    /// Text or stroke color.
    Color(Color),
    /// Stroke width in pixels.
    Width(u32),
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Text(ref s) => write!(fmt, "{}", s),
            Value::Color(ref c) => write!(fmt, "{}", c),
            Value::Width(w) => write!(fmt, "{}px", w),
        }
    }
}

impl Style {
    /// Value of given attribute at this level, if it's set.
    pub fn get(&self, attr: Attribute) -> Option<Value> {
        match attr {
            Attribute::TextAlign => self.text_align.clone().map(Value::Text),
            Attribute::VertAlign => self.vert_align.clone().map(Value::Text),
            Attribute::Font => self.font.clone().map(Value::Text),
            Attribute::TextFill => self.text_fill.map(Value::Color),
            Attribute::StrokeFill => self.stroke_fill.map(Value::Color),
            Attribute::StrokeWidth => self.stroke_width.map(Value::Width),
        }
    }
}


/// Level at which a style can be defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleLevel {
    Box,
    Macro,
    Global,
    Default,
}

impl fmt::Display for StyleLevel {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            StyleLevel::Box => "box",
            StyleLevel::Macro => "macro",
            StyleLevel::Global => "global",
            StyleLevel::Default => "default",
        };
        write!(fmt, "{}", name)
    }
}


/// Ordered chain of styles to resolve attributes against.
#[derive(Clone, Debug)]
pub struct StyleChain<'s> {
    levels: Vec<(StyleLevel, &'s Style)>,
}

impl<'s> StyleChain<'s> {
    /// Create the chain for a text box of given image macro.
    pub fn new(text_box: &'s TextBox,
               image_macro: &'s ImageMacro,
               global: &'s Style,
               defaults: &'s Style) -> Self {
        StyleChain{levels: vec![
            (StyleLevel::Box, &text_box.style),
            (StyleLevel::Macro, &image_macro.style),
            (StyleLevel::Global, global),
            (StyleLevel::Default, defaults),
        ]}
    }

    /// Create the chain from arbitrary levels, most specific first.
    pub fn from_levels<I>(levels: I) -> Self
        where I: IntoIterator<Item=(StyleLevel, &'s Style)>
    {
        StyleChain{levels: levels.into_iter().collect()}
    }

    /// Resolve a single attribute.
    pub fn resolve(&self, attr: Attribute) -> Result<Value, StyleError> {
        for &(level, style) in &self.levels {
            if let Some(value) = style.get(attr) {
                trace!("Style attribute {} = {} (from {} level)", attr, value, level);
                return Ok(value);
            }
        }
        Err(StyleError::Unresolved(attr))
    }

    /// Resolve an attribute given by its name.
    #[inline]
    pub fn resolve_named(&self, name: &str) -> Result<Value, StyleError> {
        self.resolve(name.parse()?)
    }

    /// Resolve all the attributes at once.
    pub fn resolve_all(&self) -> Result<ResolvedStyle, StyleError> {
        Ok(ResolvedStyle{
            text_align: self.resolve_text(Attribute::TextAlign)?,
            vert_align: self.resolve_text(Attribute::VertAlign)?,
            font: self.resolve_text(Attribute::Font)?,
            text_fill: self.resolve_color(Attribute::TextFill)?,
            stroke_fill: self.resolve_color(Attribute::StrokeFill)?,
            stroke_width: match self.resolve(Attribute::StrokeWidth)? {
                Value::Width(w) => w,
                _ => return Err(StyleError::Unresolved(Attribute::StrokeWidth)),
            },
        })
    }

    fn resolve_text(&self, attr: Attribute) -> Result<String, StyleError> {
        match self.resolve(attr)? {
            Value::Text(s) => Ok(s),
            _ => Err(StyleError::Unresolved(attr)),
        }
    }

    fn resolve_color(&self, attr: Attribute) -> Result<Color, StyleError> {
        match self.resolve(attr)? {
            Value::Color(c) => Ok(c),
            _ => Err(StyleError::Unresolved(attr)),
        }
    }
}


/// Resolve a single attribute of a text box, given by its name.
pub fn resolve(name: &str,
               text_box: &TextBox,
               image_macro: &ImageMacro,
               global: &Style) -> Result<Value, StyleError> {
    let defaults = Style::defaults();
    StyleChain::new(text_box, image_macro, global, &defaults).resolve_named(name)
}


/// Complete style of a text box, with every attribute resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub text_align: String,
    pub vert_align: String,
    pub font: String,
    pub text_fill: Color,
    pub stroke_fill: Color,
    pub stroke_width: u32,
}

impl ResolvedStyle {
    /// Interpret the alignment tokens.
    pub fn alignment(&self) -> Result<(HAlign, VAlign), AlignError> {
        Ok((self.text_align.parse()?, self.vert_align.parse()?))
    }
}


/// Error while resolving a style attribute.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// Attribute isn't set at any level.
    #[error("style attribute `{0}` is not defined at any level")]
    Unresolved(Attribute),
    /// Name doesn't denote any style attribute.
    #[error("unknown style attribute `{0}`")]
    UnknownAttribute(String),
}
