//! Module defining the alignment enums.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;


/// Horizontal alignment of text within a text box.
///
/// Also used for aligning the individual lines of a wrapped text
/// relative to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HAlign {
    /// Left alignment.
    Left,
    /// Horizontal centering.
    Center,
    /// Right alignment.
    Right,
}

/// Vertical alignment of text within a text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VAlign {
    /// Top alignment.
    Top,
    /// Vertical centering.
    Center,
    /// Bottom alignment.
    Bottom,
}

impl HAlign {
    /// Name of the alignment as used in style definitions.
    pub fn name(self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }
}

impl VAlign {
    /// Name of the alignment as used in style definitions.
    pub fn name(self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Bottom => "bottom",
        }
    }
}

impl FromStr for HAlign {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" | "middle" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(AlignError::Horizontal(s.to_owned())),
        }
    }
}

impl FromStr for VAlign {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(VAlign::Top),
            "center" | "middle" => Ok(VAlign::Center),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(AlignError::Vertical(s.to_owned())),
        }
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}
impl fmt::Display for VAlign {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}


/// Error for an alignment token outside of the recognized set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// Unknown horizontal alignment.
    #[error("invalid horizontal alignment `{0}` (expected left, center or right)")]
    Horizontal(String),
    /// Unknown vertical alignment.
    #[error("invalid vertical alignment `{0}` (expected top, center or bottom)")]
    Vertical(String),
}
