use crate::units::Pt;
use serde::Deserialize;

/// Anything that can report how wide a run of text is at a given size. Layout depends
/// only on this and the vertical metrics used to place baselines, so it can run
/// against real fonts or against fixed metrics in tests.
pub trait TextMetrics {
    /// Width of `text` set in one line at `size`. Must be deterministic.
    fn width_of_text(&self, text: &str, size: Pt) -> Pt;

    /// Distance from the baseline to the top of the font at `size`
    fn ascent(&self, size: Pt) -> Pt;

    /// Distance from the baseline to the bottom of the font at `size`; usually negative
    fn descent(&self, size: Pt) -> Pt;
}

/// Horizontal placement of a line within the width it was wrapped to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// x coordinate a line of `width` starts at when aligned within `max_width` from `x`
    pub fn offset(self, x: Pt, width: Pt, max_width: Pt) -> Pt {
        match self {
            Align::Left => x,
            Align::Center => x + (max_width - width) / 2.0,
            Align::Right => x + max_width - width,
        }
    }
}

/// Calculates the vertical offset from the top of a line to the font's baseline.
///
/// In PDF, text coordinates specify the baseline position. This returns the negative
/// ascent, which is added to the top of a line to find where its baseline goes.
pub fn baseline_offset<M: TextMetrics + ?Sized>(font: &M, size: Pt) -> Pt {
    -font.ascent(size)
}

/// Greedy word wrapping.
///
/// `text` is split on whitespace and words are joined with single spaces for as long as
/// the measured line stays within `max_width`. A word that is wider than `max_width` on
/// its own is broken up with [break_long_word]; its last fragment starts the next line.
///
/// Blank input produces exactly one empty line so that optional fields keep their
/// vertical rhythm instead of collapsing.
pub fn wrap_text<M: TextMetrics + ?Sized>(
    text: &str,
    font: &M,
    size: Pt,
    max_width: Pt,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{current} {word}");
            if font.width_of_text(&candidate, size) <= max_width {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if font.width_of_text(word, size) <= max_width {
            current.push_str(word);
        } else {
            let mut fragments = break_long_word(word, font, size, max_width);
            current = fragments.pop().unwrap_or_default();
            lines.extend(fragments);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Break a single word into fragments that each fit within `max_width`, character by
/// character. A character that is wider than `max_width` by itself becomes its own
/// fragment, unclipped.
pub fn break_long_word<M: TextMetrics + ?Sized>(
    word: &str,
    font: &M,
    size: Pt,
    max_width: Pt,
) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        current.push(ch);
        if font.width_of_text(&current, size) > max_width && current.chars().count() > 1 {
            current.pop();
            fragments.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }

    if !current.is_empty() {
        fragments.push(current);
    }
    fragments
}

/// Split text into paragraphs on explicit line breaks, normalizing `\r\n` and `\r`
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
        .collect()
}

/// Fixed advance metrics for exact arithmetic in tests: every character is
/// `advance × size` wide.
#[cfg(test)]
pub(crate) struct FixedMetrics {
    pub advance: f32,
}

#[cfg(test)]
impl TextMetrics for FixedMetrics {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        size * (self.advance * text.chars().count() as f32)
    }

    fn ascent(&self, size: Pt) -> Pt {
        size * 0.8
    }

    fn descent(&self, size: Pt) -> Pt {
        size * -0.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font, StandardFont};

    // 10pt characters, 5pt each
    const MONO: FixedMetrics = FixedMetrics { advance: 0.5 };

    #[test]
    fn blank_input_is_one_empty_line() {
        assert_eq!(wrap_text("", &MONO, Pt(10.0), Pt(100.0)), vec![String::new()]);
        assert_eq!(wrap_text("  \t ", &MONO, Pt(10.0), Pt(100.0)), vec![String::new()]);
    }

    #[test]
    fn words_are_packed_greedily() {
        // 30pt fits six characters per line
        let lines = wrap_text("aa bb cc dd", &MONO, Pt(10.0), Pt(30.0));
        assert_eq!(lines, vec!["aa bb", "cc dd"]);

        let lines = wrap_text("one   two\nthree", &MONO, Pt(10.0), Pt(1000.0));
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn long_words_are_broken_and_the_tail_keeps_accumulating() {
        let lines = wrap_text("ab abcdefghij k", &MONO, Pt(10.0), Pt(20.0));
        // "abcdefghij" breaks into four-character fragments; "ij" then takes "k"
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij k"]);
    }

    #[test]
    fn over_wide_characters_stand_alone() {
        let fragments = break_long_word("abc", &MONO, Pt(10.0), Pt(3.0));
        assert_eq!(fragments, vec!["a", "b", "c"]);
    }

    #[test]
    fn every_line_fits_unless_it_is_a_single_character() {
        let font = Font::standard(StandardFont::Helvetica);
        let text = format!(
            "{} Supercalifragilisticexpialidocious-and-then-some {}",
            lipsum::lipsum(120),
            lipsum::lipsum(40)
        );
        for max_width in [Pt(4.0), Pt(35.0), Pt(90.0), Pt(240.0), Pt(515.0)] {
            for line in wrap_text(&text, &font, Pt(10.0), max_width) {
                let width = font.width_of_text(&line, Pt(10.0));
                assert!(
                    width <= max_width || line.chars().count() == 1,
                    "{line:?} is {width:?} wide, limit {max_width:?}"
                );
            }
        }
    }

    #[test]
    fn wrapping_preserves_every_word() {
        let font = Font::standard(StandardFont::TimesRoman);
        let text = lipsum::lipsum(80);
        let lines = wrap_text(&text, &font, Pt(11.0), Pt(200.0));
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn alignment_offsets() {
        assert_eq!(Align::Left.offset(Pt(10.0), Pt(20.0), Pt(100.0)), Pt(10.0));
        assert_eq!(Align::Center.offset(Pt(10.0), Pt(20.0), Pt(100.0)), Pt(50.0));
        assert_eq!(Align::Right.offset(Pt(10.0), Pt(20.0), Pt(100.0)), Pt(90.0));
    }

    #[test]
    fn paragraphs_split_on_any_line_break() {
        assert_eq!(paragraphs("a\r\nb\rc\n\nd"), vec!["a", "b", "c", "", "d"]);
        assert_eq!(paragraphs(""), vec![""]);
    }

    #[test]
    fn baseline_sits_one_ascent_below_the_top() {
        assert_eq!(baseline_offset(&MONO, Pt(10.0)), Pt(-8.0));
    }
}
