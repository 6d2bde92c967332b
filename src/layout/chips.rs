use super::flow::FlowContext;
use super::text::{baseline_offset, break_long_word, TextMetrics};
use crate::colour::{colours, Colour};
use crate::font::Font;
use crate::page::{RectLayout, SpanFont, SpanLayout, Stroke};
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;
use serde::Deserialize;

/// The look of a skill chip: a filled, optionally outlined box with a label centred in it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipStyle {
    pub font_size: Pt,
    /// Space between the label and the left and right edges of the box
    pub padding_x: Pt,
    pub height: Pt,
    /// Space between chips, and between rows of chips
    pub gap: Pt,
    pub fill: Colour,
    pub border: Option<Colour>,
    pub border_width: Pt,
    pub text: Colour,
}

impl Default for ChipStyle {
    fn default() -> Self {
        ChipStyle {
            font_size: Pt(9.0),
            padding_x: Pt(7.0),
            height: Pt(17.0),
            gap: Pt(5.0),
            fill: colours::SLATE_100,
            border: Some(colours::SLATE_200),
            border_width: Pt(0.5),
            text: colours::SLATE_800,
        }
    }
}

impl ChipStyle {
    /// Height a row of chips takes up, including the gap below it
    pub fn row_height(&self) -> Pt {
        self.height + self.gap
    }
}

/// The label a chip shows and the width of its box. A chip that would be wider than
/// `max_width` is clamped to it, keeping only the part of the label that fits.
fn chip_label(font: &Font, item: &str, style: &ChipStyle, max_width: Pt) -> (String, Pt) {
    let width = font.width_of_text(item, style.font_size) + style.padding_x * 2.0;
    if width <= max_width {
        return (item.to_string(), width);
    }
    let room = max_width - style.padding_x * 2.0;
    let label = break_long_word(item, font, style.font_size, room)
        .into_iter()
        .next()
        .unwrap_or_default();
    (label.trim_end().to_string(), max_width)
}

/// Lay skills out as chips in rows that wrap within `max_width`, starting at `x`. Each
/// row asks for room before its first chip, so a row is never split across pages.
/// Returns the number of rows drawn.
pub fn draw_skill_chips<S: AsRef<str>>(
    ctx: &mut FlowContext,
    items: &[S],
    x: Pt,
    max_width: Pt,
    font_id: Id<Font>,
    style: &ChipStyle,
) -> usize {
    let font = ctx.font(font_id);
    let span_font = SpanFont {
        id: font_id,
        size: style.font_size,
    };
    // centre the glyphs' ascent-to-descent box within the chip
    let text_drop = (style.height
        - (font.ascent(style.font_size) - font.descent(style.font_size)))
        / 2.0
        - baseline_offset(font, style.font_size);

    let mut rows = 0;
    let mut row_open = false;
    let mut cursor_x = x;

    for item in items.iter().map(|item| item.as_ref().trim()).filter(|item| !item.is_empty()) {
        let (label, width) = chip_label(font, item, style, max_width);

        if row_open && cursor_x + width > x + max_width {
            ctx.move_cursor(style.row_height());
            row_open = false;
        }
        if !row_open {
            ctx.ensure_space(style.row_height());
            cursor_x = x;
            row_open = true;
            rows += 1;
        }

        let top = ctx.y();
        let page = ctx.page();
        page.add_rect(RectLayout {
            rect: Rect::from_top_left(cursor_x, top, width, style.height),
            fill: Some(style.fill),
            stroke: style.border.map(|colour| Stroke {
                colour,
                width: style.border_width,
            }),
        });
        page.add_span(SpanLayout {
            text: label,
            font: span_font,
            colour: style.text,
            coords: (cursor_x + style.padding_x, top - text_drop),
        });
        cursor_x += width + style.gap;
    }

    if row_open {
        ctx.move_cursor(style.row_height());
    }
    rows
}

/// How many rows [draw_skill_chips] would use
pub fn count_chip_rows<S: AsRef<str>>(
    font: &Font,
    items: &[S],
    max_width: Pt,
    style: &ChipStyle,
) -> usize {
    let mut rows = 0;
    let mut used = None;
    for item in items.iter().map(|item| item.as_ref().trim()).filter(|item| !item.is_empty()) {
        let (_, width) = chip_label(font, item, style, max_width);
        used = match used {
            Some(used) if used + style.gap + width <= max_width => Some(used + style.gap + width),
            _ => {
                rows += 1;
                Some(width)
            }
        };
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFont;
    use crate::layout::Margins;
    use crate::pagesize::A4;
    use id_arena::Arena;

    const SKILLS: [&str; 12] = [
        "Rust",
        "TypeScript",
        "PostgreSQL",
        "Kubernetes",
        "gRPC",
        "Distributed Systems",
        "Observability",
        "Terraform",
        "React",
        "CI/CD",
        "Performance Tuning",
        "Mentoring",
    ];

    fn rows_of(page: &crate::page::Page) -> Vec<Vec<Rect>> {
        let mut rows: Vec<Vec<Rect>> = Vec::new();
        for rect in page.rects().map(|layout| layout.rect) {
            match rows.last_mut() {
                Some(row) if row[0].y2 == rect.y2 => row.push(rect),
                _ => rows.push(vec![rect]),
            }
        }
        rows
    }

    #[test]
    fn chips_wrap_into_rows_that_fit() {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::standard(StandardFont::Helvetica));
        let style = ChipStyle::default();
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let rows = draw_skill_chips(&mut ctx, &SKILLS, Pt(50.0), Pt(250.0), id, &style);
        assert!(rows >= 2);
        assert_eq!(rows, count_chip_rows(&fonts[id], &SKILLS, Pt(250.0), &style));

        let laid_out = ctx.finish();
        let page = &laid_out.pages[0];
        assert_eq!(page.rects().count(), SKILLS.len());
        assert_eq!(page.spans().count(), SKILLS.len());
        let drawn = rows_of(page);
        assert_eq!(drawn.len(), rows);
        for row in drawn {
            assert!(row[0].x1 == Pt(50.0));
            let right = row.last().map(|rect| rect.x2).unwrap_or_default();
            assert!(right <= Pt(300.0) + Pt(1e-3));
        }
    }

    #[test]
    fn an_oversized_chip_is_clamped_to_the_row() {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::standard(StandardFont::Helvetica));
        let style = ChipStyle::default();
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let items = ["Rust", "Extremely long skill name that cannot possibly fit", "Go"];
        let rows = draw_skill_chips(&mut ctx, &items, Pt(50.0), Pt(80.0), id, &style);
        assert_eq!(rows, 3);

        let laid_out = ctx.finish();
        let page = &laid_out.pages[0];
        let widest = page
            .rects()
            .map(|layout| layout.rect.width())
            .fold(Pt(0.0), Pt::max);
        assert_eq!(widest, Pt(80.0));
        let clipped = page.spans().nth(1).expect("second chip label");
        let clipped_width = fonts[id].width_of_text(&clipped.text, style.font_size);
        assert!(clipped_width <= Pt(80.0) - style.padding_x * 2.0);
        assert!(clipped.text.starts_with("Extremely"));
    }

    #[test]
    fn blank_items_are_skipped() {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::standard(StandardFont::Helvetica));
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let start = ctx.y();
        let style = ChipStyle::default();
        let rows = draw_skill_chips(&mut ctx, &["", "  "], Pt(50.0), Pt(200.0), id, &style);
        assert_eq!(rows, 0);
        assert_eq!(ctx.y(), start);
    }
}
