//! Turns page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{LineLayout, PageContents, RectLayout, SpanFont, SpanLayout};
use crate::RenderError;
use id_arena::Arena;
use std::io::Write;

#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, RenderError> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Rect(rect) => render_rect(&mut content, rect)?,
            PageContents::Line(line) => render_line(&mut content, line)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), RenderError> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write!(content, "/F{} {} Tf\n", current_font.id.index(), current_font.size)?;
    write_colour(content, current_colour, false)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(content, "/F{} {} Tf\n", current_font.id.index(), current_font.size)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour, false)?;
        }

        let font = fonts.get(current_font.id).ok_or_else(|| {
            RenderError::MissingReference(format!("font F{}", current_font.id.index()))
        })?;

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in font.encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rect(content: &mut Vec<u8>, layout: &RectLayout) -> Result<(), RenderError> {
    let RectLayout { rect, fill, stroke } = layout;
    let paint = match (fill, stroke) {
        (Some(_), Some(_)) => "B",
        (Some(_), None) => "f",
        (None, Some(_)) => "S",
        (None, None) => return Ok(()),
    };

    write!(content, "q\n")?;
    if let Some(fill) = fill {
        write_colour(content, *fill, false)?;
    }
    if let Some(stroke) = stroke {
        write_colour(content, stroke.colour, true)?;
        write!(content, "{} w\n", stroke.width)?;
    }
    write!(
        content,
        "{} {} {} {} re\n",
        rect.x1,
        rect.y1,
        rect.width(),
        rect.height()
    )?;
    write!(content, "{paint}\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), RenderError> {
    write!(content, "q\n")?;
    write_colour(content, line.stroke.colour, true)?;
    write!(content, "{} w\n", line.stroke.width)?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour, stroking: bool) -> std::io::Result<()> {
    match (colour, stroking) {
        (Colour::RGB { r, g, b }, false) => write!(content, "{r} {g} {b} rg\n"),
        (Colour::RGB { r, g, b }, true) => write!(content, "{r} {g} {b} RG\n"),
        (Colour::Grey { g }, false) => write!(content, "{g} g\n"),
        (Colour::Grey { g }, true) => write!(content, "{g} G\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::StandardFont;
    use crate::page::Stroke;
    use crate::rect::Rect;
    use crate::units::Pt;

    #[test]
    fn text_is_hex_encoded_with_its_font_and_colour() {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::standard(StandardFont::Helvetica));
        let span = SpanLayout {
            text: "Hi".into(),
            font: SpanFont { id, size: Pt(12.0) },
            colour: colours::BLACK,
            coords: (Pt(10.0), Pt(20.0)),
        };
        let rendered = render_contents(&[PageContents::Text(vec![span])], &fonts)
            .expect("renders");
        let rendered = String::from_utf8(rendered).expect("ascii operators");
        assert!(rendered.contains("/F0 12 Tf\n"));
        assert!(rendered.contains("0 g\n"));
        assert!(rendered.contains("10 20 Td\n<4869> Tj\n"));
    }

    #[test]
    fn shapes_pick_the_right_paint_operator() {
        let stroke = Stroke {
            colour: colours::SLATE_200,
            width: Pt(0.5),
        };
        let rect = RectLayout {
            rect: Rect::from_top_left(Pt(0.0), Pt(10.0), Pt(5.0), Pt(10.0)),
            fill: Some(colours::WHITE),
            stroke: Some(stroke),
        };
        let line = LineLayout {
            from: (Pt(0.0), Pt(1.0)),
            to: (Pt(8.0), Pt(1.0)),
            stroke,
        };
        let rendered = render_contents(
            &[PageContents::Rect(rect), PageContents::Line(line)],
            &Arena::new(),
        )
        .expect("renders");
        let rendered = String::from_utf8(rendered).expect("ascii operators");
        assert!(rendered.contains("0 0 5 10 re\nB\n"));
        assert!(rendered.contains("0 1 m\n8 1 l\nS\n"));
    }
}
