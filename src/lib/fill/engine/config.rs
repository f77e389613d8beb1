//! Module with the fill engine configuration.

use image::ImageFormat;

use crate::model::{Style, DEFAULT_MAX_FONT_SIZE};


/// Default quality of generated JPEG images (in %).
pub const DEFAULT_JPEG_QUALITY: u8 = 85;


/// Structure holding configuration for the `Engine`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Style used where neither the text boxes nor their macros define an attribute.
    pub global_style: Style,
    /// Style that's consulted last. It should have all the attributes set.
    pub defaults: Style,
    /// Whether to outline the text boxes & the text blocks in the output.
    pub debug: bool,
    /// Whether text that doesn't fit its box even at the smallest size is an error.
    pub strict_fit: bool,
    /// Largest font size that the text fitting will try.
    pub max_font_size: u32,
    /// Quality of the generated JPEG images (in %).
    pub jpeg_quality: u8,
    /// Format of the output images, if it shouldn't follow the template.
    pub output_format: Option<ImageFormat>,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config{
            global_style: Style::default(),
            defaults: Style::defaults(),
            debug: false,
            strict_fit: false,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            output_format: None,
        }
    }
}
