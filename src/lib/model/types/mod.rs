//! Module defining the model types.

mod align;
mod color;
mod geometry;
mod image_macro;
mod style;

pub use self::align::{AlignError, HAlign, VAlign};
pub use self::color::Color;
pub use self::geometry::{Dimensions, Point};
pub use self::image_macro::{ImageMacro,
                            Builder as ImageMacroBuilder,
                            Error as ImageMacroBuildError,
                            MacroSet,
                            TextBox};
pub use self::style::Style;
