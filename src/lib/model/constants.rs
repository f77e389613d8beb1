//! Module defining constants relevant to the data model.

use super::types::{Color, HAlign, VAlign};


/// Name of the default font.
pub const DEFAULT_FONT: &str = "Impact";

/// Default color of the text.
pub const DEFAULT_TEXT_FILL: Color = Color(0x0, 0x0, 0x0, 0xff);
/// Default color of the text stroke.
/// This should be the inversion of DEFAULT_TEXT_FILL.
pub const DEFAULT_STROKE_FILL: Color = Color(0xff, 0xff, 0xff, 0xff);
/// Default width of the text stroke, in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 0;

/// Default horizontal alignment of text within its box.
pub const DEFAULT_HALIGN: HAlign = HAlign::Center;
/// Default vertical alignment of text within its box.
pub const DEFAULT_VALIGN: VAlign = VAlign::Center;


/// Maximum number of text boxes an ImageMacro can have.
pub const MAX_TEXT_BOX_COUNT: usize = 16;

/// Largest font size the fitting will try before giving up on growing the text.
pub const DEFAULT_MAX_FONT_SIZE: u32 = 512;
