//! Module implementing the actual filling task.
//! Most if not all of the logic tying the text engine together lives here.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageOutputFormat, RgbaImage};
use itertools::Itertools;
use unicode_normalization::UnicodeNormalization;

use crate::model::{Color, ImageMacro, TextBox};
use crate::resources::{Loader, Template, DEFAULT_IMAGE_FORMAT};
use crate::style::StyleChain;
use crate::text::{draw_outline, draw_text, fit, place, DrawRequest, Typeface};
use super::engine::Engine;
use super::error::FillError;
use super::output::FillOutput;


/// Color of the text box outlines in debug mode.
const DEBUG_BOX_COLOR: Color = Color(0xff, 0x0, 0x0, 0xff);
/// Color of the text block outlines in debug mode.
const DEBUG_TEXT_COLOR: Color = Color(0x0, 0x0, 0xff, 0xff);


/// Represents a single filling task and contains all the relevant logic.
///
/// This is a separate struct so that the engine's state
/// (configuration & resource loaders) can be easily carried between its methods.
pub(super) struct FillTask<'e, Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    engine: &'e Engine<Tl, Fl>,
    image_macro: &'e ImageMacro,
    /// Texts for the boxes, normalized to NFC.
    texts: Vec<String>,
}

impl<'e, Tl, Fl> FillTask<'e, Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Create the task, checking that there is a text for every box.
    pub fn new<S: AsRef<str>>(engine: &'e Engine<Tl, Fl>,
                              image_macro: &'e ImageMacro,
                              texts: &[S]) -> Result<Self, FillError<Tl, Fl>> {
        let expected = image_macro.text_count();
        if texts.len() != expected {
            return Err(FillError::TextCountMismatch{expected, actual: texts.len()});
        }
        let texts = texts.iter().map(|t| t.as_ref().nfc().collect()).collect();
        Ok(FillTask{engine, image_macro, texts})
    }
}

impl<'e, Tl, Fl> FillTask<'e, Tl, Fl>
    where Tl: Loader<Item=Template>, Fl: Loader, Fl::Item: Typeface
{
    /// Perform the filling task.
    pub fn perform(self) -> Result<FillOutput, FillError<Tl, Fl>> {
        debug!("Filling {:?}", self.image_macro);

        let filename = &self.image_macro.filename;
        let template = self.engine.template_loader.load(filename)
            .map_err(|e| FillError::Template(filename.clone(), e))?;

        // Drawing text requires alpha blending.
        let mut canvas = template.image().to_rgba8();
        trace!("Template image `{}` is {}x{}", filename, canvas.width(), canvas.height());
        self.draw_texts(&mut canvas)?;

        let format = match self.engine.config.output_format {
            Some(format) => encodable_format(format),
            None => template.preferred_format(),
        };
        let bytes = self.encode_result(canvas, format)?;
        Ok(FillOutput::new(format, bytes))
    }

    /// Draw all the texts (and possibly the debug outlines) on given canvas.
    pub fn draw_texts(&self, canvas: &mut RgbaImage) -> Result<(), FillError<Tl, Fl>> {
        let boxes = self.image_macro.text_boxes.iter().zip(&self.texts);
        for (index, (text_box, text)) in boxes.enumerate() {
            self.draw_text_box(canvas, index, text_box, text)?;
        }
        Ok(())
    }

    /// Fit & draw a single text into its box.
    fn draw_text_box(&self, canvas: &mut RgbaImage,
                     index: usize, text_box: &TextBox,
                     text: &str) -> Result<(), FillError<Tl, Fl>> {
        let config = &self.engine.config;
        if config.debug {
            draw_outline(canvas, text_box.pos, text_box.dimensions, DEBUG_BOX_COLOR);
        }
        if text.is_empty() {
            debug!("Empty text #{}, skipping.", index + 1);
            return Ok(());
        }

        let style = StyleChain::new(
            text_box, self.image_macro, &config.global_style, &config.defaults).resolve_all()?;
        let (text_align, vert_align) = style.alignment()?;
        debug!("Rendering {v}-{h} text #{i} in {d} box at {p}: {text:?}",
            i = index + 1, text = text, v = vert_align, h = text_align,
            d = text_box.dimensions, p = text_box.pos);

        trace!("Loading font `{}`...", style.font);
        let font = self.engine.font_loader.load(&style.font)
            .map_err(|e| FillError::Font(style.font.clone(), e))?;
        let typeface: &Fl::Item = &font;

        let missing = typeface.missing_glyphs(text);
        if !missing.is_empty() {
            warn!("Font `{}` is missing glyphs for {} character(s): {}",
                style.font, missing.len(),
                missing.iter().unique().format_with(", ", |c, f| {
                    f(&format_args!("{:?} ({:#x})", c, *c as u32))
                }));
        }

        let fit = fit(text, typeface, style.stroke_width, text_box.dimensions,
                      config.max_font_size);
        if fit.overflows {
            if config.strict_fit {
                return Err(FillError::DegenerateFit{
                    index, text: text.to_owned(), size: fit.size(),
                });
            }
            debug!("Drawing text #{} overflowing its box anyway", index + 1);
        }

        let position = place(
            text_box.pos, text_box.dimensions, fit.dimensions, text_align, vert_align);
        trace!("Text #{} block of {} placed at {}", index + 1, fit.dimensions, position);
        draw_text(canvas, &DrawRequest{
            position,
            text: &fit.text,
            font: fit.font,
            fill: style.text_fill,
            stroke: style.stroke_fill,
            stroke_width: style.stroke_width,
            align: text_align,
        });

        if config.debug {
            draw_outline(canvas, position, fit.dimensions, DEBUG_TEXT_COLOR);
        }
        Ok(())
    }

    /// Encode final result as bytes of the appropriate image format.
    fn encode_result(&self, canvas: RgbaImage,
                     format: ImageFormat) -> Result<Vec<u8>, FillError<Tl, Fl>> {
        debug!("Encoding final image as {:?}...", format);

        let mut result = Cursor::new(vec![]);
        match format {
            ImageFormat::Jpeg => {
                let quality = self.engine.config.jpeg_quality;
                trace!("Writing JPEG with quality {}", quality);
                // JPEG has no alpha channel.
                let img = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8());
                img.write_to(&mut result, ImageOutputFormat::Jpeg(quality))
            }
            _ => {
                trace!("Writing PNG image");
                DynamicImage::ImageRgba8(canvas).write_to(&mut result, ImageOutputFormat::Png)
            }
        }.map_err(FillError::Encode)?;

        Ok(result.into_inner())
    }
}

/// The format an image will actually be encoded in when asked for given one.
fn encodable_format(format: ImageFormat) -> ImageFormat {
    match format {
        ImageFormat::Png | ImageFormat::Jpeg => format,
        f => {
            warn!("Cannot encode output as {:?}, using {:?} instead", f, DEFAULT_IMAGE_FORMAT);
            DEFAULT_IMAGE_FORMAT
        }
    }
}




#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use speculoos::prelude::*;
    use crate::model::{Color, ImageMacro, ImageMacroBuilder, Style, TextBox};
    use crate::fill::{Engine, FillError};
    use super::testing::{BlankTemplateLoader, BlockFontLoader};

    const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 0xff]);
    const RED: Rgba<u8> = Rgba([0xff, 0, 0, 0xff]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 0xff, 0xff]);

    type TestEngine = Engine<BlankTemplateLoader, BlockFontLoader>;

    fn engine() -> TestEngine {
        Engine::with_raw_loaders(BlankTemplateLoader, BlockFontLoader)
    }

    fn single_box(filename: &str, pos: (i32, i32), dims: (u32, u32)) -> ImageMacro {
        ImageMacroBuilder::new()
            .filename(filename)
            .text_box(TextBox::new(pos, dims))
            .build().unwrap()
    }

    fn canvas(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn text_count_mismatch() {
        let im = ImageMacroBuilder::new()
            .filename("200x100")
            .text_box(TextBox::new((0, 0), (200, 50)))
            .text_box(TextBox::new((0, 50), (200, 50)))
            .build().unwrap();
        match engine().fill(&im, &["only one"]) {
            Err(FillError::TextCountMismatch{expected, actual}) => {
                assert_eq!(2, expected);
                assert_eq!(1, actual);
            }
            other => panic!("unexpected result: {:?}", other.map(|o| o.format())),
        }
        let mut img = canvas(200, 100);
        assert_that!(engine().fill_canvas(&im, &["a", "b", "c"], &mut img)).is_err();
    }

    #[test]
    fn hello_fills_the_box() {
        let im = single_box("200x100", (0, 0), (200, 100));
        let mut img = canvas(200, 100);
        engine().fill_canvas(&im, &["HELLO"], &mut img).unwrap();
        // Font size 66 gives a 200x67 block, centered at y=16 with 53px high glyphs.
        assert_eq!(BLACK, *img.get_pixel(0, 16));
        assert_eq!(BLACK, *img.get_pixel(199, 68));
        assert_eq!(WHITE, *img.get_pixel(100, 15));
        assert_eq!(WHITE, *img.get_pixel(100, 69));
    }

    #[test]
    fn long_sentence_is_wrapped_and_centered() {
        let im = single_box("100x50", (0, 0), (100, 50));
        let mut img = canvas(100, 50);
        engine().fill_canvas(&im, &["A VERY LONG SENTENCE THAT MUST WRAP"], &mut img).unwrap();
        // Font size 11 gives three lines in a 91x38 block at (4, 6).
        // First line is 77px wide, so it starts 7px further.
        assert_eq!(BLACK, *img.get_pixel(11, 6));
        assert_eq!(WHITE, *img.get_pixel(10, 6));
        assert_eq!(WHITE, *img.get_pixel(11, 5));
        // Second line ("SENTENCE THAT") is the widest one.
        assert_eq!(BLACK, *img.get_pixel(4, 19));
        assert_eq!(WHITE, *img.get_pixel(3, 19));
    }

    #[test]
    fn box_style_takes_precedence() {
        let im = ImageMacroBuilder::new()
            .filename("100x50")
            .style(Style{text_fill: Some(Color(0, 0, 0xff, 0xff)), ..Style::default()})
            .text_box(TextBox::new((0, 0), (100, 50)).with_style(Style{
                text_align: Some("left".into()),
                vert_align: Some("top".into()),
                ..Style::default()
            }))
            .build().unwrap();
        let mut img = canvas(100, 50);
        engine().fill_canvas(&im, &["I"], &mut img).unwrap();
        assert_eq!(BLUE, *img.get_pixel(0, 0));
    }

    #[test]
    fn stroke_is_drawn_around_text() {
        let mut engine = engine();
        engine.config_mut().global_style = Style{
            stroke_width: Some(2),
            stroke_fill: Some(Color(0xff, 0, 0, 0xff)),
            text_align: Some("left".into()),
            vert_align: Some("top".into()),
            ..Style::default()
        };
        let im = single_box("100x50", (0, 0), (100, 50));
        let mut img = canvas(100, 50);
        engine.fill_canvas(&im, &["I"], &mut img).unwrap();
        assert_eq!(RED, *img.get_pixel(0, 2));
        assert_eq!(BLACK, *img.get_pixel(2, 2));
    }

    #[test]
    fn empty_text_is_skipped() {
        let im = single_box("100x50", (0, 0), (100, 50));
        let mut img = canvas(100, 50);
        engine().fill_canvas(&im, &[""], &mut img).unwrap();
        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn text_is_normalized() {
        let im = single_box("100x50", (0, 0), (100, 50));
        let mut img = canvas(100, 50);
        // Decomposed "é" becomes a single character 30px wide, centered at x=35.
        engine().fill_canvas(&im, &["e\u{301}"], &mut img).unwrap();
        assert_eq!(WHITE, *img.get_pixel(30, 10));
        assert_eq!(BLACK, *img.get_pixel(40, 10));
    }

    #[test]
    fn debug_outlines() {
        let mut engine = engine();
        engine.config_mut().debug = true;
        let im = single_box("200x100", (10, 10), (100, 50));
        let mut img = canvas(200, 100);
        engine.fill_canvas(&im, &["HI"], &mut img).unwrap();
        // Box outline.
        assert_eq!(RED, *img.get_pixel(10, 10));
        assert_eq!(RED, *img.get_pixel(10, 30));
        assert_eq!(RED, *img.get_pixel(100, 59));
        // Text block of 60x50 at (30, 10).
        assert_eq!(BLUE, *img.get_pixel(30, 10));
        assert_eq!(BLUE, *img.get_pixel(50, 59));
        assert_eq!(BLUE, *img.get_pixel(89, 30));

        let mut img = canvas(200, 100);
        self::engine().fill_canvas(&im, &["HI"], &mut img).unwrap();
        assert_eq!(WHITE, *img.get_pixel(10, 10));
    }

    #[test]
    fn strict_fit() {
        let im = single_box("100x50", (0, 0), (2, 2));
        let mut img = canvas(100, 50);
        assert_that!(engine().fill_canvas(&im, &["HELLO"], &mut img)).is_ok();

        let mut engine = engine();
        engine.config_mut().strict_fit = true;
        match engine.fill_canvas(&im, &["HELLO"], &mut img) {
            Err(FillError::DegenerateFit{index, text, size}) => {
                assert_eq!(0, index);
                assert_eq!("HELLO", text);
                assert_eq!(1, size);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_style_values() {
        let im = ImageMacroBuilder::new()
            .filename("100x50")
            .text_box(TextBox::new((0, 0), (100, 50))
                .with_style(Style{text_align: Some("justify".into()), ..Style::default()}))
            .build().unwrap();
        let mut img = canvas(100, 50);
        assert!(matches!(engine().fill_canvas(&im, &["x"], &mut img),
                         Err(FillError::InvalidAlignment(_))));

        let mut engine = engine();
        engine.config_mut().defaults = Style::default();
        assert!(matches!(engine.fill_canvas(&im, &["x"], &mut img),
                         Err(FillError::Style(_))));
    }

    #[test]
    fn missing_resources() {
        let im = single_box("nonsense", (0, 0), (10, 10));
        assert!(matches!(engine().fill(&im, &["x"]), Err(FillError::Template(..))));

        let im = ImageMacroBuilder::new()
            .filename("10x10")
            .text_box(TextBox::new((0, 0), (10, 10))
                .with_style(Style{font: Some("missing".into()), ..Style::default()}))
            .build().unwrap();
        assert!(matches!(engine().fill(&im, &["x"]), Err(FillError::Font(..))));
    }

    #[test]
    fn output_format() {
        let im = single_box("40x20.jpg", (0, 0), (40, 20));
        let output = engine().fill(&im, &["HEY"]).unwrap();
        assert_eq!(ImageFormat::Jpeg, output.format());
        let img = image::load_from_memory_with_format(&output, ImageFormat::Jpeg).unwrap();
        assert_eq!((40, 20), (img.width(), img.height()));

        let mut engine = engine();
        engine.config_mut().output_format = Some(ImageFormat::Png);
        let output = engine.fill(&im, &["HEY"]).unwrap();
        assert_eq!(ImageFormat::Png, output.format());
        assert!(image::load_from_memory_with_format(&output, ImageFormat::Png).is_ok());
    }

    #[test]
    fn unencodable_format_falls_back_to_png() {
        let im = single_box("40x20.jpg", (0, 0), (40, 20));
        let mut engine = engine();
        engine.config_mut().output_format = Some(ImageFormat::Gif);
        let output = engine.fill(&im, &["HEY"]).unwrap();
        assert_eq!(ImageFormat::Png, output.format());
        assert_eq!(ImageFormat::Png, image::guess_format(&output).unwrap());
    }

    #[test]
    fn huge_stroke_overflows_the_box() {
        let mut engine = engine();
        engine.config_mut().debug = true;
        engine.config_mut().global_style.stroke_width = Some(u32::MAX);
        let im = single_box("100x50", (0, 0), (100, 50));
        let mut img = canvas(100, 50);
        assert_that!(engine.fill_canvas(&im, &["A"], &mut img)).is_ok();

        engine.config_mut().strict_fit = true;
        assert!(matches!(engine.fill_canvas(&im, &["A"], &mut img),
                         Err(FillError::DegenerateFit{size: 1, ..})));
    }
}
