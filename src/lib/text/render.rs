//! Module responsible for drawing text onto images.

use std::fmt;

use image::{Pixel, RgbaImage};

use crate::model::{Color, Dimensions, HAlign, Point};
use super::{SizedFont, Typeface};


/// Everything needed to draw a fitted text block.
pub struct DrawRequest<'a, F: ?Sized + 'a> {
    /// Top-left corner of the text block (including the stroke).
    pub position: Point,
    /// Text to draw, possibly with line breaks.
    pub text: &'a str,
    pub font: SizedFont<'a, F>,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: u32,
    /// Alignment of the lines relative to each other.
    pub align: HAlign,
}

impl<'a, F: ?Sized> fmt::Debug for DrawRequest<'a, F> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("DrawRequest")
            .field("position", &self.position)
            .field("text", &self.text)
            .field("size", &self.font.size())
            .field("fill", &self.fill)
            .field("stroke", &self.stroke)
            .field("stroke_width", &self.stroke_width)
            .field("align", &self.align)
            .finish()
    }
}


/// Draw text onto the canvas.
///
/// The stroke is drawn first, as the text's shape dilated by `stroke_width`
/// pixels, and the fill goes on top of it. Transparent colors aren't drawn.
pub fn draw_text<F>(canvas: &mut RgbaImage, request: &DrawRequest<F>)
    where F: ?Sized + Typeface
{
    trace!("draw_text(..., {:?})", request);
    let (width, height) = canvas.dimensions();
    let mut mask = Mask::new(width, height);

    let font = request.font;
    let sw = request.stroke_width as i64;
    let inner_width = request.text.split('\n')
        .map(|line| font.line_width(line))
        .max().unwrap_or(0) as i64;
    let line_advance = font.line_advance() as i64;

    for (i, line) in request.text.split('\n').enumerate() {
        let line_width = font.line_width(line) as i64;
        let offset = match request.align {
            HAlign::Left => 0,
            HAlign::Center => (inner_width - line_width) / 2,
            HAlign::Right => inner_width - line_width,
        };
        let x = request.position.x as i64 + sw + offset;
        let y = request.position.y as i64 + sw + i as i64 * line_advance;
        // Glyphs may overhang their advance a little, hence the margin.
        let margin = font.size() as i64;
        if x - margin >= width as i64 || y - margin >= height as i64
            || x + line_width + margin < 0 || y + line_advance + margin < 0 {
            trace!("Line #{} at ({}, {}) is off the canvas", i + 1, x, y);
            continue;
        }
        font.typeface().rasterize(line, font.size(), (x as f32, y as f32),
                                  &mut |px: i32, py: i32, coverage: f32| {
                                      mask.add(px, py, coverage)
                                  });
    }

    if sw > 0 && !request.stroke.is_transparent() {
        let stroke_mask = mask.dilate(request.stroke_width);
        stroke_mask.paint(canvas, request.stroke);
    }
    if !request.fill.is_transparent() {
        mask.paint(canvas, request.fill);
    }
}


/// Draw a one pixel wide rectangle outline onto the canvas.
pub fn draw_outline(canvas: &mut RgbaImage, pos: Point, dimensions: Dimensions, color: Color) {
    if dimensions.width == 0 || dimensions.height == 0 {
        return;
    }
    let (left, top) = (pos.x as i64, pos.y as i64);
    let right = left + dimensions.width as i64 - 1;
    let bottom = top + dimensions.height as i64 - 1;
    let (canvas_width, canvas_height) = (canvas.width() as i64, canvas.height() as i64);

    let mut plot = |x: i64, y: i64| {
        if x >= 0 && y >= 0 && x < canvas_width && y < canvas_height {
            canvas.get_pixel_mut(x as u32, y as u32).blend(&color.to_rgba(1.0));
        }
    };
    // Only the part of each edge that lies on the canvas is walked.
    for x in left.max(0)..=right.min(canvas_width - 1) {
        plot(x, top);
        if bottom != top {
            plot(x, bottom);
        }
    }
    for y in (top + 1).max(0)..bottom.min(canvas_height) {
        plot(left, y);
        if right != left {
            plot(right, y);
        }
    }
}


/// Coverage of canvas pixels by the text, from 0.0 to 1.0.
struct Mask {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
    /// Bounding box of the covered pixels, as (min_x, min_y, max_x, max_y).
    bounds: Option<(u32, u32, u32, u32)>,
}

impl Mask {
    fn new(width: u32, height: u32) -> Self {
        Mask{width, height, coverage: vec![0.0; (width * height) as usize], bounds: None}
    }

    fn add(&mut self, x: i32, y: i32, value: f32) {
        if x < 0 || y < 0 || value <= 0.0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        self.coverage[idx] = (self.coverage[idx] + value).min(1.0);
        self.bounds = Some(match self.bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> f32 {
        self.coverage[(y * self.width + x) as usize]
    }

    /// Expand the covered area by a disk of given radius.
    fn dilate(&self, radius: u32) -> Mask {
        let mut result = Mask::new(self.width, self.height);
        let (x0, y0, x1, y1) = match self.bounds {
            Some(b) => b,
            None => return result,
        };

        // A disk this big around any covered pixel spans the whole canvas.
        if radius as u64 >= self.width as u64 + self.height as u64 {
            let value = self.coverage.iter().cloned().fold(0.0, f32::max);
            result.coverage.iter_mut().for_each(|c| *c = value);
            result.bounds = Some((0, 0, self.width - 1, self.height - 1));
            return result;
        }

        let radius = radius as i32;
        let r2 = radius * radius;
        let offsets: Vec<(i32, i32)> = (-radius..=radius)
            .flat_map(|dy| (-radius..=radius).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx * dx + dy * dy <= r2)
            .collect();

        for y in y0..=y1 {
            for x in x0..=x1 {
                let value = self.get(x, y);
                if value <= 0.0 {
                    continue;
                }
                for &(dx, dy) in &offsets {
                    result.add_max(x as i32 + dx, y as i32 + dy, value);
                }
            }
        }
        result
    }

    fn add_max(&mut self, x: i32, y: i32, value: f32) {
        if x < 0 || y < 0 || (x as u32) >= self.width || (y as u32) >= self.height {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let idx = (y * self.width + x) as usize;
        if value > self.coverage[idx] {
            self.coverage[idx] = value;
            self.bounds = Some(match self.bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }

    /// Blend given color onto the canvas wherever the mask covers it.
    fn paint(&self, canvas: &mut RgbaImage, color: Color) {
        let (x0, y0, x1, y1) = match self.bounds {
            Some(b) => b,
            None => return,
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let value = self.get(x, y);
                if value > 0.0 {
                    canvas.get_pixel_mut(x, y).blend(&color.to_rgba(value));
                }
            }
        }
    }
}
