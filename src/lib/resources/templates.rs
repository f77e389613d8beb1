//! Module handling image macro templates.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use image::{self, DynamicImage, GenericImageView, ImageError, ImageFormat};
use thiserror::Error;

use super::Loader;
use super::filesystem::PathLoader;


/// Default image format to use when encoding filled image macros.
pub const DEFAULT_IMAGE_FORMAT: ImageFormat = ImageFormat::Png;

lazy_static! {
    /// Map of template file extensions to supported image formats.
    pub static ref IMAGE_FORMAT_EXTENSIONS: HashMap<&'static str, ImageFormat> = hashmap!{
        "gif" => ImageFormat::Gif,
        "jpeg" => ImageFormat::Jpeg,
        "jpg" => ImageFormat::Jpeg,
        "png" => ImageFormat::Png,
    };
}

/// Determine the image format from the extension of given path.
pub fn format_for_path<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
    let extension = path.as_ref().extension().and_then(|e| e.to_str())
        .map(|s| s.trim().to_lowercase());
    extension.and_then(|ext| IMAGE_FORMAT_EXTENSIONS.get(ext.as_str()).cloned())
}


/// Image macro template: a still image, with the format it was loaded from.
#[derive(Clone)]
pub struct Template {
    image: DynamicImage,
    format: ImageFormat,
}

impl Template {
    #[inline]
    pub fn new(image: DynamicImage, format: ImageFormat) -> Self {
        Template{image, format}
    }

    /// Create the template for an image loaded from a file.
    /// Image format is figured out from the file extension.
    pub fn for_image<P: AsRef<Path>>(image: DynamicImage, path: P) -> Self {
        let format = format_for_path(path).unwrap_or(DEFAULT_IMAGE_FORMAT);
        Template::new(image, format)
    }

    /// Load the template from an image file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        trace!("Opening image {}", path.display());
        let image = image::open(path).map_err(|e| match e {
            ImageError::IoError(e) => TemplateError::File(e),
            e => TemplateError::Decode(e),
        })?;
        Ok(Template::for_image(image, path))
    }
}

impl Template {
    #[inline]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The preferred format for image macros generated using this template.
    /// This is the one the template was loaded from, if it can be encoded.
    pub fn preferred_format(&self) -> ImageFormat {
        match self.format {
            ImageFormat::Png | ImageFormat::Jpeg => self.format,
            _ => DEFAULT_IMAGE_FORMAT,
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.image.dimensions();
        write!(fmt, "Template({}x{}, {:?})", width, height, self.format)
    }
}


/// Error while loading a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file couldn't be found or read.
    #[error("cannot read template file: {0}")]
    File(#[from] io::Error),
    /// The template file isn't a supported image.
    #[error("cannot decode template image: {0}")]
    Decode(ImageError),
}


/// Loader of templates from a directory.
#[derive(Debug)]
pub struct TemplateLoader {
    inner: PathLoader,
}

impl TemplateLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        let extensions = IMAGE_FORMAT_EXTENSIONS.keys();
        TemplateLoader{
            inner: PathLoader::for_extensions(directory, extensions),
        }
    }
}

impl Loader for TemplateLoader {
    type Item = Template;
    type Err = TemplateError;

    fn load(&self, name: &str) -> Result<Template, Self::Err> {
        let path = self.inner.load(name)?;
        let template = Template::open(&path).map_err(|e| {
            error!("Failed to open template {}: {}", path.display(), e); e
        })?;
        debug!("Template `{}` loaded: {:?}", name, template);
        Ok(template)
    }
}


#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::process;

    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use speculoos::prelude::*;
    use super::{format_for_path, Template, TemplateError, TemplateLoader};
    use super::super::Loader;

    #[test]
    fn formats_from_extensions() {
        assert_that!(format_for_path("drake.JPG")).is_some().is_equal_to(ImageFormat::Jpeg);
        assert_that!(format_for_path("a/b/doge.png")).is_some().is_equal_to(ImageFormat::Png);
        assert_that!(format_for_path("cat.gif")).is_some().is_equal_to(ImageFormat::Gif);
        assert_that!(format_for_path("notes.txt")).is_none();
        assert_that!(format_for_path("README")).is_none();
    }

    #[test]
    fn preferred_format_is_encodable() {
        let img = DynamicImage::new_rgba8(1, 1);
        assert_eq!(ImageFormat::Jpeg, Template::for_image(img.clone(), "x.jpeg").preferred_format());
        assert_eq!(ImageFormat::Png, Template::for_image(img.clone(), "x.gif").preferred_format());
        assert_eq!(ImageFormat::Png, Template::for_image(img, "x.bmp").preferred_format());
    }

    #[test]
    fn loads_from_directory() {
        let dir = env::temp_dir().join(format!("macrofill-templates-{}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255]))
            .save(dir.join("square.png")).unwrap();
        fs::write(dir.join("broken.jpg"), b"nope").unwrap();

        let loader = TemplateLoader::new(&dir);
        let template = loader.load("square").unwrap();
        assert_eq!(ImageFormat::Png, template.format());
        assert_eq!(Rgba([1, 2, 3, 255]), template.image().to_rgba8().get_pixel(3, 2).clone());

        assert!(matches!(loader.load("missing"), Err(TemplateError::File(_))));
        assert!(matches!(loader.load("broken"), Err(TemplateError::Decode(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
