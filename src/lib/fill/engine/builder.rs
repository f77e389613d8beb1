//! Module implementing the builder for `Engine`.

use std::fmt::Display;
use std::path::Path;

use image::ImageFormat;
use thiserror::Error;

use crate::model::Style;
use crate::resources::{CachingLoader, FontLoader, Loader, Template, TemplateLoader};
use crate::text::Typeface;
use super::config::Config;
use super::{Engine, DEFAULT_FONT_CAPACITY, DEFAULT_TEMPLATE_CAPACITY};


/// Builder for `Engine`.
///
/// Setting a custom loader changes the type of the builder (and of the
/// resulting `Engine`) accordingly.
#[derive(Debug)]
#[must_use = "unused builder which must be used"]
pub struct Builder<Tl = TemplateLoader, Fl = FontLoader> {
    errors: Vec<Error>,

    template_setup: Option<LoaderSetup<Tl>>,
    font_setup: Option<LoaderSetup<Fl>>,

    config: Config,
    jpeg_quality: Option<u8>,
}


/// Temporary configuration for a template or font loader.
/// Used by `Builder`.
#[derive(Debug)]
enum LoaderSetup<L> {
    Cached {
        loader: Option<L>,
        cache_size: usize,
    },
    Raw(L),
}

impl<L> LoaderSetup<L> {
    /// Set the loader that the `Cached` loader would wrap,
    /// possibly changing its type.
    /// Returns `None` if the setup is already configured incompatibly.
    fn with_cached_loader<M>(setup: Option<Self>, loader: M, default_size: usize)
        -> Option<LoaderSetup<M>>
    {
        match setup {
            None => Some(LoaderSetup::Cached{loader: Some(loader), cache_size: default_size}),
            Some(LoaderSetup::Cached{cache_size, ..}) =>
                Some(LoaderSetup::Cached{loader: Some(loader), cache_size}),
            Some(LoaderSetup::Raw(_)) => None,
        }
    }

    /// Set the loader to be used without caching, possibly changing its type.
    /// Returns `None` if the setup is already configured incompatibly.
    fn with_raw_loader<M>(setup: Option<Self>, loader: M) -> Option<LoaderSetup<M>> {
        match setup {
            None => Some(LoaderSetup::Raw(loader)),
            Some(_) => None,
        }
    }

    /// Set the cache size of `Cached` loader.
    /// Returns `false` if the setup is already configured incompatibly.
    fn set_cache_size(setup: &mut Option<Self>, size: usize) -> bool {
        match setup {
            None => {
                *setup = Some(LoaderSetup::Cached{loader: None, cache_size: size});
                true
            }
            Some(LoaderSetup::Cached{cache_size, ..}) => {
                *cache_size = size;
                true
            }
            Some(LoaderSetup::Raw(_)) => false,
        }
    }
}

impl<L: Loader> LoaderSetup<L> {
    /// Build the `Loader`.
    fn build(setup: Option<Self>, resource: &str) -> Result<CachingLoader<L>, Error> {
        match setup {
            None | Some(LoaderSetup::Cached{loader: None, ..}) =>
                Err(Error::no_loader_for(resource)),
            Some(LoaderSetup::Cached{loader: Some(loader), cache_size}) =>
                Ok(CachingLoader::new(loader, cache_size)),
            // Use the phony version of CachingLoader which doesn't actually cache anything,
            // but provides the same interface yielding Rc<L::Item>.
            Some(LoaderSetup::Raw(loader)) => Ok(CachingLoader::phony(loader)),
        }
    }
}


impl Builder<TemplateLoader, FontLoader> {
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}
impl Default for Builder<TemplateLoader, FontLoader> {
    fn default() -> Self {
        Builder{
            errors: vec![],
            template_setup: None,
            font_setup: None,
            config: Config::default(),
            jpeg_quality: None,
        }
    }
}

// Setters of standard loaders.
impl<Fl> Builder<TemplateLoader, Fl> {
    /// Set the directory where the templates will be loaded from.
    pub fn template_directory<P: AsRef<Path>>(self, directory: P) -> Self {
        self.template_loader(TemplateLoader::new(directory))
    }
}
impl<Tl> Builder<Tl, FontLoader> {
    /// Set the directory where the fonts will be loaded from.
    pub fn font_directory<P: AsRef<Path>>(self, directory: P) -> Self {
        self.font_loader(FontLoader::new(directory))
    }
}

// Setters of custom loaders.
impl<Tl, Fl> Builder<Tl, Fl> {
    /// Set a custom loader for templates.
    ///
    /// Templates loaded by it will still be cached in an LRU cache.
    /// See `raw_template_loader` if you want to provide your own caching.
    pub fn template_loader<L>(self, loader: L) -> Builder<L, Fl> {
        let setup = LoaderSetup::with_cached_loader(
            self.template_setup, loader, DEFAULT_TEMPLATE_CAPACITY);
        Builder{
            errors: self.errors,
            template_setup: setup,
            font_setup: self.font_setup,
            config: self.config,
            jpeg_quality: self.jpeg_quality,
        }.err_if_unset("template")
    }

    /// Set a custom "raw" loader for templates.
    ///
    /// Templates loaded this way will not be cached (unless the loader itself
    /// implements some kind of caching).
    pub fn raw_template_loader<L>(self, loader: L) -> Builder<L, Fl> {
        let setup = LoaderSetup::with_raw_loader(self.template_setup, loader);
        Builder{
            errors: self.errors,
            template_setup: setup,
            font_setup: self.font_setup,
            config: self.config,
            jpeg_quality: self.jpeg_quality,
        }.err_if_unset("template")
    }

    /// Set a custom loader for fonts.
    ///
    /// Fonts loaded by it will still be cached in an LRU cache.
    /// See `raw_font_loader` if you want to provide your own caching.
    pub fn font_loader<L>(self, loader: L) -> Builder<Tl, L> {
        let setup = LoaderSetup::with_cached_loader(
            self.font_setup, loader, DEFAULT_FONT_CAPACITY);
        Builder{
            errors: self.errors,
            template_setup: self.template_setup,
            font_setup: setup,
            config: self.config,
            jpeg_quality: self.jpeg_quality,
        }.err_if_unset("font")
    }

    /// Set a custom "raw" loader for fonts.
    ///
    /// Fonts loaded this way will not be cached (unless the loader itself
    /// implements some kind of caching).
    pub fn raw_font_loader<L>(self, loader: L) -> Builder<Tl, L> {
        let setup = LoaderSetup::with_raw_loader(self.font_setup, loader);
        Builder{
            errors: self.errors,
            template_setup: self.template_setup,
            font_setup: setup,
            config: self.config,
            jpeg_quality: self.jpeg_quality,
        }.err_if_unset("font")
    }

    /// Change the size of the template cache.
    pub fn template_cache_size(mut self, size: usize) -> Self {
        let ok = LoaderSetup::set_cache_size(&mut self.template_setup, size);
        if ok { self } else { self.err(Error::loader_setup_conflict("template")) }
    }

    /// Change the size of the font cache.
    pub fn font_cache_size(mut self, size: usize) -> Self {
        let ok = LoaderSetup::set_cache_size(&mut self.font_setup, size);
        if ok { self } else { self.err(Error::loader_setup_conflict("font")) }
    }
}

// Setters of configuration values.
impl<Tl, Fl> Builder<Tl, Fl> {
    /// Set the quality percentage of JPEG images generated by the `Engine`.
    #[inline]
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality); self
    }

    /// Set the style used when text boxes & their macros don't define an attribute.
    #[inline]
    pub fn global_style(mut self, style: Style) -> Self {
        self.config.global_style = style; self
    }

    /// Replace the built-in default style.
    #[inline]
    pub fn default_style(mut self, style: Style) -> Self {
        self.config.defaults = style; self
    }

    /// Enable or disable outlining the text boxes & text blocks.
    #[inline]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug; self
    }

    /// Make text that can't fit its box an error rather than a warning.
    #[inline]
    pub fn strict_fit(mut self, strict: bool) -> Self {
        self.config.strict_fit = strict; self
    }

    /// Set the largest font size the text fitting will try.
    #[inline]
    pub fn max_font_size(mut self, size: u32) -> Self {
        self.config.max_font_size = size; self
    }

    /// Set the format of the output images, regardless of the template's.
    pub fn output_format(mut self, format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png | ImageFormat::Jpeg => {
                self.config.output_format = Some(format); self
            }
            f => self.err(Error::UnsupportedFormat(f)),
        }
    }
}

// Validation & building.
impl<Tl, Fl> Builder<Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Build the `Engine`.
    pub fn build(self) -> Result<Engine<Tl, Fl>, Error> {
        self.check_errors()?;

        let mut config = self.config;
        if let Some(quality) = self.jpeg_quality {
            if quality > 100 {
                return Err(Error::InvalidJpegQuality(quality));
            }
            config.jpeg_quality = quality;
        }
        let template_loader = LoaderSetup::build(self.template_setup, "template")?;
        let font_loader = LoaderSetup::build(self.font_setup, "font")?;
        Ok(Engine{config, template_loader, font_loader})
    }
}

// Utilities for validation & building.
impl<Tl, Fl> Builder<Tl, Fl> {
    fn check_errors(&self) -> Result<(), Error> {
        match self.errors.first() {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn err(mut self, error: Error) -> Self {
        self.errors.push(error); self
    }

    /// Record a conflict if the loader setup for given resource got lost.
    fn err_if_unset(self, resource: &str) -> Self {
        let unset = match resource {
            "template" => self.template_setup.is_none(),
            _ => self.font_setup.is_none(),
        };
        if unset { self.err(Error::loader_setup_conflict(resource)) } else { self }
    }
}


/// Error that resulted from misconfiguration of the `Engine` via its `Builder`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// No loader set up.
    #[error("{0}")]
    NoLoader(String),
    /// Template or font loader configuration setup error.
    #[error("{0}")]
    LoaderBuilderConflict(String),
    /// JPEG quality outside of the 0-100 range.
    #[error("invalid JPEG quality {0}% (must be at most 100%)")]
    InvalidJpegQuality(u8),
    /// Output format that the engine cannot encode.
    #[error("unsupported output format {0:?}")]
    UnsupportedFormat(ImageFormat),
}

impl Error {
    #[inline]
    fn no_loader_for<R: Display>(resource: R) -> Self {
        Error::NoLoader(format!("no {} loader configured", resource))
    }

    #[inline]
    fn loader_setup_conflict<R: Display>(resource: R) -> Self {
        Error::LoaderBuilderConflict(format!(
            "invalid combination of configuration parameters for setting up {} loader", resource))
    }
}


#[cfg(test)]
mod tests {
    use image::ImageFormat;
    use speculoos::prelude::*;
    use crate::fill::task::testing::{BlankTemplateLoader, BlockFontLoader};
    use crate::model::Style;
    use super::{Builder, Error};

    #[test]
    fn directories() {
        let engine = Builder::new()
            .template_directory("templates")
            .font_directory("fonts")
            .template_cache_size(4)
            .build().unwrap();
        assert_eq!(4, engine.template_cache().unwrap().capacity());
        assert!(engine.font_cache().is_some());
    }

    #[test]
    fn requires_both_loaders() {
        let result = Builder::new().template_directory("templates").build();
        assert_that!(result.map(|_| ())).is_err()
            .is_equal_to(Error::NoLoader("no font loader configured".into()));
        let result = Builder::new().font_cache_size(3).template_directory("t").build();
        assert_that!(result.map(|_| ())).is_err();
    }

    #[test]
    fn custom_loaders_with_config() {
        let engine = Builder::new()
            .template_cache_size(2)
            .template_loader(BlankTemplateLoader)
            .raw_font_loader(BlockFontLoader)
            .jpeg_quality(50)
            .debug(true)
            .strict_fit(true)
            .max_font_size(64)
            .global_style(Style{stroke_width: Some(2), ..Style::default()})
            .output_format(ImageFormat::Jpeg)
            .build().unwrap();
        assert_eq!(2, engine.template_cache().unwrap().capacity());
        assert!(engine.font_cache().is_none());

        let config = engine.config();
        assert_eq!(50, config.jpeg_quality);
        assert!(config.debug);
        assert!(config.strict_fit);
        assert_eq!(64, config.max_font_size);
        assert_eq!(Some(2), config.global_style.stroke_width);
        assert_eq!(Some(ImageFormat::Jpeg), config.output_format);
    }

    #[test]
    fn conflicting_setup() {
        let result = Builder::new()
            .raw_template_loader(BlankTemplateLoader)
            .template_cache_size(10)
            .font_loader(BlockFontLoader)
            .build();
        assert_that!(result.map(|_| ())).is_err();

        let result = Builder::new()
            .template_loader(BlankTemplateLoader)
            .raw_template_loader(BlankTemplateLoader)
            .font_loader(BlockFontLoader)
            .build();
        assert_that!(result.map(|_| ())).is_err();
    }

    #[test]
    fn invalid_values() {
        let result = Builder::new()
            .template_loader(BlankTemplateLoader)
            .font_loader(BlockFontLoader)
            .jpeg_quality(101)
            .build();
        assert_that!(result.map(|_| ())).is_err().is_equal_to(Error::InvalidJpegQuality(101));

        let result = Builder::new()
            .template_loader(BlankTemplateLoader)
            .font_loader(BlockFontLoader)
            .output_format(ImageFormat::Gif)
            .build();
        assert_that!(result.map(|_| ())).is_err()
            .is_equal_to(Error::UnsupportedFormat(ImageFormat::Gif));
    }
}
