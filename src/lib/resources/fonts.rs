//! Module for loading fonts used in image macros.

use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;

use rusttype::{self, point, GlyphId, Scale};
use thiserror::Error;

use crate::text::{Typeface, VMetrics};
use super::Loader;
use super::filesystem::{BytesLoader, FileLoader};


/// Extensions of the font files that can be loaded.
pub const FILE_EXTENSIONS: &[&str] = &["ttf", "otf"];


/// TrueType font that the text of image macros is rendered with.
pub struct Font(rusttype::Font<'static>);

impl Font {
    /// Create the font from the content of a font file.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        rusttype::Font::try_from_vec(bytes).map(Font).ok_or(FontError::Invalid)
    }
}

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({} glyph(s))", self.0.glyph_count())
    }
}

impl Typeface for Font {
    fn line_width(&self, line: &str, size: u32) -> u32 {
        // Compute text width as the final X position of the "caret"
        // after laying out all the glyphs, starting from X=0.
        let width = self.0.layout(line, Scale::uniform(size as f32), point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        width.max(0.0).ceil() as u32
    }

    fn metrics(&self, size: u32) -> VMetrics {
        let v = self.0.v_metrics(Scale::uniform(size as f32));
        VMetrics{
            ascent: v.ascent.max(0.0).ceil() as u32,
            descent: v.descent.abs().ceil() as u32,  // it's usually negative
            line_gap: v.line_gap.max(0.0).ceil() as u32,
        }
    }

    fn rasterize(&self, line: &str, size: u32, origin: (f32, f32),
                 plot: &mut dyn FnMut(i32, i32, f32)) {
        let scale = Scale::uniform(size as f32);
        let baseline = origin.1 + self.0.v_metrics(scale).ascent;
        for glyph in self.0.layout(line, scale, point(origin.0, baseline)) {
            if let Some(bbox) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| plot(bbox.min.x + x as i32, bbox.min.y + y as i32, v));
            }
        }
    }

    fn missing_glyphs(&self, text: &str) -> Vec<char> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| self.0.glyph(c).id() == GlyphId(0))
            .collect()
    }
}


/// Error while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file couldn't be found or read.
    #[error("cannot read font file: {0}")]
    File(#[from] io::Error),
    /// The file isn't a valid font.
    #[error("invalid or unsupported font file")]
    Invalid,
}


/// Loader of fonts from a directory.
#[derive(Debug)]
pub struct FontLoader {
    inner: BytesLoader,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::new(
                FileLoader::for_extensions(directory, FILE_EXTENSIONS)),
        }
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load(&self, name: &str) -> Result<Font, Self::Err> {
        let bytes = self.inner.load(name)?;
        let font = Font::from_bytes(bytes).map_err(|e| {
            error!("File for `{}` font resource is not a valid font", name); e
        })?;
        debug!("Font `{}` loaded successfully", name);
        Ok(font)
    }
}
