//! Module implementing greedy word wrapping.

use super::{SizedFont, Typeface};


/// Wrap the text so that its lines fit within given width.
///
/// Text that fits as it is gets returned unchanged. Otherwise the words
/// are laid out greedily, breaking the line before any word that would
/// make it too wide. Words are never split, so a word that's wider than
/// `max_width` by itself will sit alone on its line and overflow.
pub fn wrap<F>(text: &str, font: SizedFont<F>, stroke_width: u32, max_width: u32) -> String
    where F: ?Sized + Typeface
{
    if font.text_dimensions(text, stroke_width).width <= max_width {
        return text.to_owned();
    }

    let mut lines: Vec<String> = vec![];
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if font.text_dimensions(&candidate, stroke_width).width > max_width {
            lines.push(current);
            current = word.to_owned();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    trace!("Wrapped text of length {} into {} line(s) at font size {}",
        text.len(), lines.len(), font.size());
    lines.join("\n")
}


#[cfg(test)]
mod tests {
    use crate::text::SizedFont;
    use crate::text::testing::BlockFont;
    use super::wrap;

    // At size 10, every character is 6px wide.
    const SIZE: u32 = 10;

    #[test]
    fn fitting_text_is_unchanged() {
        let font = SizedFont::new(&BlockFont, SIZE);
        assert_eq!("HELLO WORLD", wrap("HELLO WORLD", font, 0, 66));
        assert_eq!("HELLO WORLD", wrap("HELLO WORLD", font, 0, 1000));
        // Even the odd whitespace is kept.
        assert_eq!("A  B", wrap("A  B", font, 0, 100));
    }

    #[test]
    fn greedy_breaks() {
        let font = SizedFont::new(&BlockFont, SIZE);
        assert_eq!("HELLO\nWORLD", wrap("HELLO WORLD", font, 0, 65));
        assert_eq!("A VERY\nLONG\nTEXT", wrap("A VERY LONG TEXT", font, 0, 40));
        assert_eq!("A B C\nD", wrap("A B C D", font, 0, 30));
    }

    #[test]
    fn stroke_counts_toward_width() {
        let font = SizedFont::new(&BlockFont, SIZE);
        assert_eq!("HELLO WORLD", wrap("HELLO WORLD", font, 2, 70));
        assert_eq!("HELLO\nWORLD", wrap("HELLO WORLD", font, 3, 70));
    }

    #[test]
    fn lines_stay_within_width() {
        let font = SizedFont::new(&BlockFont, SIZE);
        let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
        for &max_width in &[40, 60, 90, 120, 200] {
            let wrapped = wrap(text, font, 1, max_width);
            for line in wrapped.lines() {
                assert!(font.text_dimensions(line, 1).width <= max_width,
                    "line `{}` too wide for {}", line, max_width);
            }
        }
    }

    #[test]
    fn long_word_overflows_alone() {
        let font = SizedFont::new(&BlockFont, SIZE);
        let wrapped = wrap("A SUPERCALIFRAGILISTIC WORD", font, 0, 60);
        assert_eq!("A\nSUPERCALIFRAGILISTIC\nWORD", wrapped);
        let overflowing: Vec<_> = wrapped.lines()
            .filter(|l| font.line_width(l) > 60)
            .collect();
        assert_eq!(vec!["SUPERCALIFRAGILISTIC"], overflowing);
    }
}
