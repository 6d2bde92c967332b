//! Primitive block drawers. Every drawer takes care of its own page breaks: each line
//! or row asks the [FlowContext] for room before it is drawn.

use super::flow::FlowContext;
use super::text::{baseline_offset, paragraphs, wrap_text, Align, TextMetrics};
use crate::colour::Colour;
use crate::font::Font;
use crate::page::{LineLayout, Page, SpanFont, SpanLayout, Stroke};
use crate::units::Pt;
use id_arena::Id;

/// Which font, size, and colour a run of text is drawn in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Id<Font>,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: Id<Font>, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { font, size, colour }
    }

    pub fn with_colour(self, colour: Colour) -> TextStyle {
        TextStyle { colour, ..self }
    }

    fn span_font(&self) -> SpanFont {
        SpanFont {
            id: self.font,
            size: self.size,
        }
    }
}

/// How a block of wrapped text is spaced and aligned
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextOptions {
    /// Distance from the top of one line to the top of the next
    pub line_height: Pt,
    /// Extra space after a paragraph, and the height of a blank one
    pub paragraph_gap: Pt,
    pub align: Align,
}

impl TextOptions {
    pub fn new(line_height: Pt, paragraph_gap: Pt) -> TextOptions {
        TextOptions {
            line_height,
            paragraph_gap,
            align: Align::Left,
        }
    }

    pub fn aligned(self, align: Align) -> TextOptions {
        TextOptions { align, ..self }
    }
}

/// The two columns of a hanging layout: a narrow label column and the content column
/// to its right
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HangingColumns {
    pub x: Pt,
    pub label_width: Pt,
    pub gap: Pt,
    /// Width of both columns together, gap included
    pub width: Pt,
}

impl HangingColumns {
    pub fn content_x(&self) -> Pt {
        self.x + self.label_width + self.gap
    }

    pub fn content_width(&self) -> Pt {
        (self.width - self.label_width - self.gap).max(Pt(0.0))
    }
}

/// Draw one line of text that has already been wrapped to fit `max_width`. `y_top` is
/// the top of the line; the baseline sits one ascent below it. Returns the measured
/// width of the text.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_line(
    page: &mut Page,
    font: &Font,
    style: TextStyle,
    text: &str,
    x: Pt,
    y_top: Pt,
    max_width: Pt,
    align: Align,
) -> Pt {
    let width = font.width_of_text(text, style.size);
    page.add_span(SpanLayout {
        text: text.to_string(),
        font: style.span_font(),
        colour: style.colour,
        coords: (
            align.offset(x, width, max_width),
            y_top + baseline_offset(font, style.size),
        ),
    });
    width
}

/// Draw text wrapped to `max_width`, paragraph by paragraph, breaking pages between
/// lines as needed. Returns the number of lines drawn.
pub fn draw_wrapped_text(
    ctx: &mut FlowContext,
    text: &str,
    x: Pt,
    max_width: Pt,
    style: TextStyle,
    options: TextOptions,
) -> usize {
    let font = ctx.font(style.font);
    let paragraphs = paragraphs(text);
    let last = paragraphs.len() - 1;
    let mut drawn = 0;

    for (i, paragraph) in paragraphs.into_iter().enumerate() {
        if paragraph.trim().is_empty() {
            ctx.move_cursor(options.paragraph_gap);
            continue;
        }

        for line in wrap_text(paragraph, font, style.size, max_width) {
            ctx.ensure_space(options.line_height);
            let y = ctx.y();
            draw_text_line(ctx.page(), font, style, &line, x, y, max_width, options.align);
            ctx.move_cursor(options.line_height);
            drawn += 1;
        }

        if i < last {
            ctx.move_cursor(options.paragraph_gap);
        }
    }
    drawn
}

/// The height [draw_wrapped_text] will consume, ignoring page breaks
pub fn measure_wrapped_text(
    ctx: &FlowContext,
    text: &str,
    max_width: Pt,
    style: TextStyle,
    options: TextOptions,
) -> Pt {
    let font = ctx.font(style.font);
    let paragraphs = paragraphs(text);
    let last = paragraphs.len() - 1;

    paragraphs
        .into_iter()
        .enumerate()
        .map(|(i, paragraph)| {
            if paragraph.trim().is_empty() {
                return options.paragraph_gap;
            }
            let lines = wrap_text(paragraph, font, style.size, max_width).len();
            let gap = if i < last { options.paragraph_gap } else { Pt(0.0) };
            options.line_height * lines as f32 + gap
        })
        .sum()
}

/// Draw a section heading in upper case and bookmark it in the document outline.
/// Reserves the title's size plus `spacing` below it.
pub fn draw_section_title(
    ctx: &mut FlowContext,
    title: &str,
    x: Pt,
    max_width: Pt,
    style: TextStyle,
    spacing: Pt,
) {
    let font = ctx.font(style.font);
    let height = style.size + spacing;
    ctx.ensure_space(height);
    ctx.bookmark(title);
    let y = ctx.y();
    draw_text_line(
        ctx.page(),
        font,
        style,
        &title.to_uppercase(),
        x,
        y,
        max_width,
        Align::Left,
    );
    ctx.move_cursor(height);
}

/// Wrap `left` into the width `right` leaves over; the left column never gets less
/// than a quarter of `max_width`
fn split_left_right(
    ctx: &FlowContext,
    left: &str,
    right: &str,
    max_width: Pt,
    left_style: TextStyle,
    right_style: TextStyle,
    gap: Pt,
) -> (Vec<String>, Pt) {
    let right_width = if right.trim().is_empty() {
        Pt(0.0)
    } else {
        ctx.font(right_style.font)
            .width_of_text(right.trim(), right_style.size)
            + gap
    };
    let left_width = (max_width - right_width).max(max_width * 0.25);
    let lines = wrap_text(left, ctx.font(left_style.font), left_style.size, left_width);
    (lines, left_width)
}

/// Draw `left` wrapped on the left and `right` flush right on the first line only,
/// sharing its baseline. Returns the number of lines drawn.
#[allow(clippy::too_many_arguments)]
pub fn draw_left_right_line(
    ctx: &mut FlowContext,
    left: &str,
    right: &str,
    x: Pt,
    max_width: Pt,
    left_style: TextStyle,
    right_style: TextStyle,
    gap: Pt,
    line_height: Pt,
) -> usize {
    let left_font = ctx.font(left_style.font);
    let right_font = ctx.font(right_style.font);
    let right = right.trim();
    let (lines, left_width) =
        split_left_right(ctx, left, right, max_width, left_style, right_style, gap);

    for (i, line) in lines.iter().enumerate() {
        ctx.ensure_space(line_height);
        let y = ctx.y();
        draw_text_line(ctx.page(), left_font, left_style, line, x, y, left_width, Align::Left);
        if i == 0 && !right.is_empty() {
            // line the right text up on the left text's baseline
            let right_top = y - left_font.ascent(left_style.size)
                + right_font.ascent(right_style.size);
            draw_text_line(
                ctx.page(),
                right_font,
                right_style,
                right,
                x,
                right_top,
                max_width,
                Align::Right,
            );
        }
        ctx.move_cursor(line_height);
    }
    lines.len()
}

/// The height [draw_left_right_line] will consume, ignoring page breaks
#[allow(clippy::too_many_arguments)]
pub fn measure_left_right_line(
    ctx: &FlowContext,
    left: &str,
    right: &str,
    max_width: Pt,
    left_style: TextStyle,
    right_style: TextStyle,
    gap: Pt,
    line_height: Pt,
) -> Pt {
    let (lines, _) = split_left_right(ctx, left, right, max_width, left_style, right_style, gap);
    line_height * lines.len() as f32
}

/// Wrap every paragraph of `text` and flatten the result; blank paragraphs keep an empty
/// line so both columns of a hanging row stay in step
fn wrap_paragraphs(font: &Font, text: &str, size: Pt, max_width: Pt) -> Vec<String> {
    paragraphs(text)
        .into_iter()
        .flat_map(|paragraph| wrap_text(paragraph, font, size, max_width))
        .collect()
}

/// Draw a label in the narrow column with content hanging beside it, advancing both
/// columns one line at a time. Returns the number of rows drawn.
pub fn draw_hanging_row(
    ctx: &mut FlowContext,
    label: &str,
    content: &str,
    columns: HangingColumns,
    label_style: TextStyle,
    content_style: TextStyle,
    line_height: Pt,
) -> usize {
    let label_font = ctx.font(label_style.font);
    let content_font = ctx.font(content_style.font);
    let labels = if label.trim().is_empty() {
        Vec::new()
    } else {
        wrap_paragraphs(label_font, label, label_style.size, columns.label_width)
    };
    let contents = wrap_paragraphs(
        content_font,
        content,
        content_style.size,
        columns.content_width(),
    );
    let rows = labels.len().max(contents.len());

    for row in 0..rows {
        ctx.ensure_space(line_height);
        let y = ctx.y();
        if let Some(line) = labels.get(row) {
            draw_text_line(
                ctx.page(),
                label_font,
                label_style,
                line,
                columns.x,
                y,
                columns.label_width,
                Align::Left,
            );
        }
        if let Some(line) = contents.get(row) {
            draw_text_line(
                ctx.page(),
                content_font,
                content_style,
                line,
                columns.content_x(),
                y,
                columns.content_width(),
                Align::Left,
            );
        }
        ctx.move_cursor(line_height);
    }
    rows
}

/// The height [draw_hanging_row] will consume, ignoring page breaks
pub fn measure_hanging_row(
    ctx: &FlowContext,
    label: &str,
    content: &str,
    columns: HangingColumns,
    label_style: TextStyle,
    content_style: TextStyle,
    line_height: Pt,
) -> Pt {
    let labels = if label.trim().is_empty() {
        0
    } else {
        wrap_paragraphs(ctx.font(label_style.font), label, label_style.size, columns.label_width)
            .len()
    };
    let contents = wrap_paragraphs(
        ctx.font(content_style.font),
        content,
        content_style.size,
        columns.content_width(),
    )
    .len();
    line_height * labels.max(contents) as f32
}

/// Draw a horizontal rule `thickness` tall, its top edge at the cursor
pub fn draw_rule(ctx: &mut FlowContext, x: Pt, width: Pt, thickness: Pt, colour: Colour) {
    ctx.ensure_space(thickness);
    // strokes are centred on their path
    let y = ctx.y() - thickness / 2.0;
    ctx.page().add_line(LineLayout {
        from: (x, y),
        to: (x + width, y),
        stroke: Stroke {
            colour,
            width: thickness,
        },
    });
    ctx.move_cursor(thickness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::StandardFont;
    use crate::layout::Margins;
    use crate::pagesize::A4;
    use id_arena::Arena;

    fn assert_close(a: Pt, b: Pt) {
        assert!((a.0 - b.0).abs() < 1e-2, "{a:?} != {b:?}");
    }

    fn fonts() -> (Arena<Font>, TextStyle, TextStyle) {
        let mut fonts = Arena::new();
        let regular = fonts.alloc(Font::standard(StandardFont::Helvetica));
        let bold = fonts.alloc(Font::standard(StandardFont::HelveticaBold));
        (
            fonts,
            TextStyle::new(regular, Pt(10.0), colours::SLATE_800),
            TextStyle::new(bold, Pt(12.0), colours::BLACK),
        )
    }

    #[test]
    fn lines_hang_one_ascent_below_the_cursor() {
        let (fonts, body, _) = fonts();
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let drawn = draw_wrapped_text(
            &mut ctx,
            "Hello",
            Pt(50.0),
            Pt(200.0),
            body,
            TextOptions::new(Pt(14.0), Pt(6.0)),
        );
        assert_eq!(drawn, 1);
        assert_close(ctx.y(), A4.1 - Pt(64.0));
        let laid_out = ctx.finish();
        let span = laid_out.pages[0].spans().next().expect("a span");
        assert_eq!(span.coords.0, Pt(50.0));
        assert_close(span.coords.1, A4.1 - Pt(50.0 + 7.18));
    }

    #[test]
    fn paragraphs_are_separated_and_blank_ones_are_gaps() {
        let (fonts, body, _) = fonts();
        let options = TextOptions::new(Pt(14.0), Pt(6.0));
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let start = ctx.y();
        let text = "one\r\ntwo\n\nthree";
        let drawn = draw_wrapped_text(&mut ctx, text, Pt(50.0), Pt(400.0), body, options);
        assert_eq!(drawn, 3);
        // three lines, two separators, one blank paragraph
        assert_close(start - ctx.y(), Pt(14.0 * 3.0 + 6.0 * 3.0));
        assert_close(
            measure_wrapped_text(&ctx, text, Pt(400.0), body, options),
            Pt(14.0 * 3.0 + 6.0 * 3.0),
        );
    }

    #[test]
    fn long_text_flows_onto_new_pages_line_by_line() {
        let (fonts, body, _) = fonts();
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let text = lipsum::lipsum(2000);
        let options = TextOptions::new(Pt(14.0), Pt(0.0));
        draw_wrapped_text(&mut ctx, &text, Pt(50.0), Pt(300.0), body, options);
        let laid_out = ctx.finish();
        assert!(laid_out.pages.len() > 1);
        for page in &laid_out.pages {
            for span in page.spans() {
                assert!(span.coords.1 >= Pt(50.0));
                assert!(span.coords.1 <= A4.1 - Pt(50.0));
            }
        }
    }

    #[test]
    fn wrapped_lines_can_be_centred_or_flush_right() {
        let (fonts, body, _) = fonts();
        let font = &fonts[body.font];
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        for align in [Align::Center, Align::Right] {
            let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
            let options = TextOptions::new(Pt(14.0), Pt(0.0)).aligned(align);
            let drawn = draw_wrapped_text(&mut ctx, text, Pt(50.0), Pt(120.0), body, options);
            assert!(drawn > 1);

            let laid_out = ctx.finish();
            for span in laid_out.pages[0].spans() {
                let width = font.width_of_text(&span.text, body.size);
                match align {
                    Align::Center => assert_close(span.coords.0 * 2.0 + width, Pt(220.0)),
                    _ => assert_close(span.coords.0 + width, Pt(170.0)),
                }
            }
        }
    }

    #[test]
    fn right_text_is_drawn_once_on_the_first_line() {
        let (fonts, body, heading) = fonts();
        let lefts = [
            "Engineer",
            "Principal Engineer, Platform Infrastructure and Developer Experience Group",
        ];
        for left in lefts {
            let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
            let lines = draw_left_right_line(
                &mut ctx,
                left,
                "2019 – Present",
                Pt(50.0),
                Pt(260.0),
                heading,
                body,
                Pt(8.0),
                Pt(16.0),
            );
            let laid_out = ctx.finish();
            let spans: Vec<_> = laid_out.pages[0].spans().collect();
            let rights: Vec<_> = spans.iter().filter(|s| s.text == "2019 – Present").collect();
            assert_eq!(rights.len(), 1);
            assert_eq!(spans.len(), lines + 1);

            let first_left = spans[0];
            assert_close(first_left.coords.1, rights[0].coords.1);
            let right_width = fonts[body.font].width_of_text("2019 – Present", Pt(10.0));
            assert_close(rights[0].coords.0, Pt(310.0) - right_width);
        }
    }

    #[test]
    fn hanging_rows_advance_both_columns_together() {
        let (fonts, body, heading) = fonts();
        let columns = HangingColumns {
            x: Pt(50.0),
            label_width: Pt(90.0),
            gap: Pt(12.0),
            width: Pt(300.0),
        };
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        let content = lipsum::lipsum(60);
        let label = "2018 – 2020";
        let expected =
            measure_hanging_row(&ctx, label, &content, columns, body, heading, Pt(15.0));
        let start = ctx.y();
        let rows = draw_hanging_row(&mut ctx, label, &content, columns, body, heading, Pt(15.0));
        assert!(rows > 1);
        assert_close(start - ctx.y(), expected);
        let laid_out = ctx.finish();
        let labels = laid_out.pages[0].spans().filter(|s| s.coords.0 == Pt(50.0)).count();
        assert_eq!(labels, 1);
        assert!(laid_out.pages[0].spans().skip(1).all(|s| s.coords.0 == Pt(152.0)));
    }

    #[test]
    fn section_titles_are_upper_cased_and_bookmarked() {
        let (fonts, _, heading) = fonts();
        let mut ctx = FlowContext::new(&fonts, A4, Margins::all(Pt(50.0)));
        draw_section_title(&mut ctx, "Experience", Pt(50.0), Pt(400.0), heading, Pt(6.0));
        draw_rule(&mut ctx, Pt(50.0), Pt(400.0), Pt(1.0), colours::SLATE_200);
        assert_close(ctx.y(), A4.1 - Pt(50.0 + 12.0 + 6.0 + 1.0));
        let laid_out = ctx.finish();
        assert_eq!(laid_out.bookmarks[0].title, "Experience");
        let title = laid_out.pages[0].spans().next().map(|s| s.text.as_str());
        assert_eq!(title, Some("EXPERIENCE"));
        let rule = laid_out.pages[0].lines().next().expect("a rule");
        assert_eq!(rule.from.0, Pt(50.0));
        assert_eq!(rule.to.0, Pt(450.0));
        assert_eq!(rule.from.1, rule.to.1);
        assert_close(rule.from.1, A4.1 - Pt(50.0 + 18.0 + 0.5));
        assert_eq!(rule.stroke.width, Pt(1.0));
    }
}
