use super::modern::Column;
use super::{is_blank, FontIds};
use crate::font::Font;
use crate::layout::{baseline_offset, wrap_text, FlowContext, LaidOut, PagePainter, TextStyle};
use crate::page::{Page, RectLayout, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::resume::Resume;
use crate::theme::Theme;
use crate::units::Pt;
use id_arena::Arena;

pub(super) fn layout(
    resume: &Resume,
    theme: &Theme,
    fonts: &FontIds,
    arena: &Arena<Font>,
) -> LaidOut {
    let rail = theme.sidebar;
    let (page_width, page_height) = theme.paper.size();
    let spans = rail_snapshot(resume, theme, fonts, arena, page_height);

    let painter: PagePainter = Box::new(move |page: &mut Page| {
        page.add_rect(RectLayout {
            rect: Rect::from_top_left(Pt(0.0), page_height, rail.width, page_height),
            fill: Some(rail.background),
            stroke: None,
        });
        for span in spans.iter() {
            page.add_span(span.clone());
        }
    });

    let left = rail.width + rail.gutter;
    let margins = theme.margins.with_horizontal(left, theme.margins.right);
    let mut ctx =
        FlowContext::with_page_painter(arena, (page_width, page_height), margins, painter);
    let column = Column::new(theme, fonts, ctx.content_left(), ctx.content_width());

    column.profile(&mut ctx, resume);
    column.experience(&mut ctx, resume);
    column.projects(&mut ctx, resume);

    ctx.finish()
}

/// Lays text out down the rail. The rail never breaks onto another page; whatever
/// does not fit runs off the bottom.
struct RailWriter<'a> {
    arena: &'a Arena<Font>,
    theme: &'a Theme,
    x: Pt,
    width: Pt,
    y: Pt,
    spans: Vec<SpanLayout>,
}

impl RailWriter<'_> {
    fn text(&mut self, text: &str, style: TextStyle) {
        if is_blank(text) {
            return;
        }
        let font = &self.arena[style.font];
        let line_height = self.theme.line_height(style.size);
        for line in wrap_text(text, font, style.size, self.width) {
            self.spans.push(SpanLayout {
                text: line,
                font: SpanFont {
                    id: style.font,
                    size: style.size,
                },
                colour: style.colour,
                coords: (self.x, self.y + baseline_offset(font, style.size)),
            });
            self.y -= line_height;
        }
    }

    fn heading(&mut self, title: &str, style: TextStyle) {
        self.gap(self.theme.spacing.section_gap);
        self.text(&title.to_uppercase(), style);
        self.gap(self.theme.spacing.paragraph_gap);
    }

    fn gap(&mut self, amount: Pt) {
        self.y -= amount;
    }
}

/// Everything the rail shows, laid out once and repainted on every page
fn rail_snapshot(
    resume: &Resume,
    theme: &Theme,
    fonts: &FontIds,
    arena: &Arena<Font>,
    page_height: Pt,
) -> Vec<SpanLayout> {
    let rail = &theme.sidebar;
    let scale = &theme.type_scale;
    let name = TextStyle::new(fonts.sans_bold, scale.name * 0.8, rail.text);
    let title = TextStyle::new(fonts.sans, scale.body, rail.muted);
    let heading = TextStyle::new(fonts.sans_bold, scale.small, rail.muted);
    let text = TextStyle::new(fonts.sans, scale.small, rail.text);
    let strong = TextStyle::new(fonts.sans_bold, scale.small, rail.text);
    let muted = TextStyle::new(fonts.sans, scale.small, rail.muted);

    let mut writer = RailWriter {
        arena,
        theme,
        x: rail.padding,
        width: (rail.width - rail.padding * 2.0).max(Pt(0.0)),
        y: page_height - theme.margins.top,
        spans: Vec::new(),
    };

    writer.text(&resume.full_name, name);
    writer.text(&resume.title, title);

    let contacts = resume.contact_items();
    if !contacts.is_empty() {
        writer.heading("Contact", heading);
        for item in contacts {
            writer.text(item, text);
        }
    }

    let skills = resume.skill_items();
    if !skills.is_empty() {
        writer.heading("Skills", heading);
        for skill in skills {
            writer.text(&format!("• {skill}"), text);
        }
    }

    let mut education = resume.education_entries().peekable();
    if education.peek().is_some() {
        writer.heading("Education", heading);
        for entry in education {
            writer.text(&entry.degree, strong);
            writer.text(&entry.school, text);
            writer.text(&entry.dates(), muted);
            writer.gap(theme.spacing.paragraph_gap);
        }
    }

    if writer.y < theme.margins.bottom {
        let lowest = writer.spans.last().map(|span| span.coords.1).unwrap_or(writer.y);
        log::debug!(
            "sidebar rail overflows the bottom margin; its last line sits at y = {lowest}"
        );
    }
    writer.spans
}
