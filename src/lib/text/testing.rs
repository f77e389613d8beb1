//! Deterministic typeface for tests.

use super::{Typeface, VMetrics};


/// Typeface where every character is a solid block.
///
/// At size `s`, each character advances by `0.6 * s` pixels, the ascent is
/// `0.8 * s` and the descent `0.2 * s`, each rounded down after adding 0.8
/// (so sizes 1 & 2 have an advance of 1 & 2 pixels, while size 10 has 6).
/// Only ASCII characters are considered to have glyphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockFont;

impl BlockFont {
    pub fn advance(size: u32) -> u32 {
        (3 * size + 4) / 5
    }
}

impl Typeface for BlockFont {
    fn line_width(&self, line: &str, size: u32) -> u32 {
        line.chars().count() as u32 * Self::advance(size)
    }

    fn metrics(&self, size: u32) -> VMetrics {
        VMetrics{
            ascent: (4 * size + 4) / 5,
            descent: (size + 4) / 5,
            line_gap: 0,
        }
    }

    fn rasterize(&self, line: &str, size: u32, origin: (f32, f32),
                 plot: &mut dyn FnMut(i32, i32, f32)) {
        let advance = Self::advance(size) as i32;
        let ascent = self.metrics(size).ascent as i32;
        let (x0, y0) = (origin.0.round() as i32, origin.1.round() as i32);
        for (i, c) in line.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = x0 + i as i32 * advance;
            for y in y0..(y0 + ascent) {
                for x in left..(left + advance) {
                    plot(x, y, 1.0);
                }
            }
        }
    }

    fn missing_glyphs(&self, text: &str) -> Vec<char> {
        text.chars().filter(|c| !c.is_ascii()).collect()
    }
}


#[cfg(test)]
mod tests {
    use crate::text::Typeface;
    use super::BlockFont;

    #[test]
    fn metrics_at_small_sizes() {
        assert_eq!(vec![1, 2, 2, 3, 3, 6],
                   [1, 2, 3, 4, 5, 10].iter().map(|&s| BlockFont::advance(s)).collect::<Vec<_>>());
        let m = BlockFont.metrics(10);
        assert_eq!((8, 2), (m.ascent, m.descent));
        let m = BlockFont.metrics(1);
        assert_eq!((1, 1), (m.ascent, m.descent));
    }
}
