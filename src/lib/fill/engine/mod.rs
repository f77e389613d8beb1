//! Module which defines the fill engine.

mod builder;
mod config;

pub use self::builder::{Builder, Error as BuildError};
pub use self::config::{Config, DEFAULT_JPEG_QUALITY};


use std::fmt;
use std::path::Path;

use image::RgbaImage;

use crate::model::ImageMacro;
use crate::resources::{CachingLoader, FontLoader, Loader, Template, TemplateLoader};
use crate::text::Typeface;
use crate::util::cache::ResourceCache;
use super::error::FillError;
use super::output::FillOutput;
use super::task::FillTask;


const DEFAULT_TEMPLATE_CAPACITY: usize = 32;
const DEFAULT_FONT_CAPACITY: usize = 16;


/// Image macro filling engine.
///
/// The engine owns the template & font loaders (along with their caches)
/// and the configuration that every fill is performed with.
/// It is meant to be used from a single thread.
pub struct Engine<Tl = TemplateLoader, Fl = FontLoader>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    pub(in crate::fill) config: Config,
    pub(in crate::fill) template_loader: CachingLoader<Tl>,
    pub(in crate::fill) font_loader: CachingLoader<Fl>,
}

// Constructors.
impl Engine<TemplateLoader, FontLoader> {
    /// Create an Engine which loads templates & fonts from given directory paths.
    ///
    /// When loaded, both resources will be cached in memory (LRU cache).
    ///
    /// For other ways of creating `Engine`, see the `EngineBuilder`.
    pub fn new<Dt, Df>(template_directory: Dt, font_directory: Df) -> Self
        where Dt: AsRef<Path>, Df: AsRef<Path>
    {
        Self::with_loaders(TemplateLoader::new(template_directory),
                           FontLoader::new(font_directory))
    }
}
impl<Tl, Fl> Engine<Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Create an Engine that uses given loaders for templates & fonts.
    ///
    /// When loaded, both resources will be cached in memory (LRU cache).
    pub fn with_loaders(template_loader: Tl, font_loader: Fl) -> Self {
        Engine{
            config: Config::default(),
            template_loader: CachingLoader::new(template_loader, DEFAULT_TEMPLATE_CAPACITY),
            font_loader: CachingLoader::new(font_loader, DEFAULT_FONT_CAPACITY),
        }
    }

    /// Create an Engine that uses given template & font loaders directly.
    ///
    /// Any caching scheme, if necessary, should be implemented by loaders themselves.
    pub fn with_raw_loaders(template_loader: Tl, font_loader: Fl) -> Self {
        Engine{
            config: Config::default(),
            template_loader: CachingLoader::phony(template_loader),
            font_loader: CachingLoader::phony(font_loader),
        }
    }
}


// Filling image macros.
impl<Tl, Fl> Engine<Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Render the image macro with given texts, one for every text box.
    ///
    /// The result is the final image, encoded in the configured format
    /// (or the template's own, if not configured).
    pub fn fill<S>(&self, image_macro: &ImageMacro,
                   texts: &[S]) -> Result<FillOutput, FillError<Tl, Fl>>
        where S: AsRef<str>
    {
        FillTask::new(self, image_macro, texts)?.perform()
    }

    /// Draw the texts of the image macro onto a canvas supplied by the caller.
    ///
    /// The macro's template isn't loaded or drawn; only the texts
    /// (and the debug outlines, if enabled) end up on the canvas.
    pub fn fill_canvas<S>(&self, image_macro: &ImageMacro,
                          texts: &[S],
                          canvas: &mut RgbaImage) -> Result<(), FillError<Tl, Fl>>
        where S: AsRef<str>
    {
        FillTask::new(self, image_macro, texts)?.draw_texts(canvas)
    }
}

// Managing resources.
impl<Tl, Fl> Engine<Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Preemptively load a template into engine's cache.
    pub fn preload_template(&self, name: &str) -> Result<(), Tl::Err> {
        if !self.template_loader.is_phony() {
            self.template_loader.load(name)?;
        }
        Ok(())
    }

    /// Preemptively load a font into engine's cache.
    pub fn preload_font(&self, name: &str) -> Result<(), Fl::Err> {
        if !self.font_loader.is_phony() {
            self.font_loader.load(name)?;
        }
        Ok(())
    }

    /// Return a reference to the internal template cache, if any.
    /// This can be used to examine cache statistics (hits & misses).
    pub fn template_cache(&self) -> Option<&ResourceCache<String, Tl::Item>> {
        if self.template_loader.is_phony() {
            None
        } else {
            Some(self.template_loader.cache())
        }
    }

    /// Return a reference to the internal font cache, if any.
    /// This can be used to examine cache statistics (hits & misses).
    pub fn font_cache(&self) -> Option<&ResourceCache<String, Fl::Item>> {
        if self.font_loader.is_phony() {
            None
        } else {
            Some(self.font_loader.cache())
        }
    }
}

// Configuration.
impl<Tl, Fl> Engine<Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Read the `Engine`'s configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Modify the `Engine`'s configuration.
    #[inline]
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

impl<Tl, Fl> fmt::Debug for Engine<Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Engine")
            .field("config", &self.config)
            .field("template_loader", &self.template_loader)
            .field("font_loader", &self.font_loader)
            .finish()
    }
}
