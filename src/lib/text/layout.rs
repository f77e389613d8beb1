//! Module placing fitted text blocks within their boxes.

use crate::model::{AlignError, Dimensions, HAlign, Point, VAlign};


/// Compute the top-left corner of a text block aligned within a box.
///
/// The result can lie outside of the box (to the left or above it)
/// if the text is bigger than the box.
pub fn place(box_pos: Point,
             box_dimensions: Dimensions,
             text_dimensions: Dimensions,
             text_align: HAlign,
             vert_align: VAlign) -> Point {
    let free_width = box_dimensions.width as i64 - text_dimensions.width as i64;
    let free_height = box_dimensions.height as i64 - text_dimensions.height as i64;

    let x = box_pos.x as i64 + match text_align {
        HAlign::Left => 0,
        HAlign::Center => free_width / 2,
        HAlign::Right => free_width,
    };
    let y = box_pos.y as i64 + match vert_align {
        VAlign::Top => 0,
        VAlign::Center => free_height / 2,
        VAlign::Bottom => free_height,
    };
    Point::new(clamp_coord(x), clamp_coord(y))
}

/// Blocks of absurd sizes end up at the edge of the coordinate space.
fn clamp_coord(v: i64) -> i32 {
    v.max(i32::MIN as i64).min(i32::MAX as i64) as i32
}

/// Compute the position of a text block, given alignments by their names.
pub fn place_by_name(box_pos: Point,
                     box_dimensions: Dimensions,
                     text_dimensions: Dimensions,
                     text_align: &str,
                     vert_align: &str) -> Result<Point, AlignError> {
    let text_align: HAlign = text_align.parse()?;
    let vert_align: VAlign = vert_align.parse()?;
    Ok(place(box_pos, box_dimensions, text_dimensions, text_align, vert_align))
}
