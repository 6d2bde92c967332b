use super::{begin_section, bulleted, is_blank, options, FontIds, Styles};
use crate::font::Font;
use crate::layout::{
    draw_hanging_row, draw_rule, draw_wrapped_text, measure_hanging_row, measure_wrapped_text,
    Align, FlowContext, HangingColumns, LaidOut, TextStyle,
};
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
    let mut ctx = FlowContext::new(arena, theme.paper.size(), theme.margins);
    let x = ctx.content_left();
    let width = ctx.content_width();
    let minimalist = Minimalist {
        theme,
        styles: Styles::new(
            theme,
            fonts.serif,
            fonts.serif_bold,
            fonts.serif_italic,
            theme.palette.text,
        ),
        x,
        width,
        columns: HangingColumns {
            x,
            label_width: theme.minimalist.label_width,
            gap: theme.minimalist.gap,
            width,
        },
    };

    minimalist.header(&mut ctx, resume);
    minimalist.experience(&mut ctx, resume);
    minimalist.education(&mut ctx, resume);
    minimalist.projects(&mut ctx, resume);
    minimalist.skills(&mut ctx, resume);

    ctx.finish()
}

/// One entry of a hanging section: a label beside a heading, then lines of content in
/// the content column
struct Entry<'r> {
    label: String,
    heading: &'r str,
    subheading: &'r str,
    body: &'r str,
}

struct Minimalist<'t> {
    theme: &'t Theme,
    styles: Styles,
    x: Pt,
    width: Pt,
    columns: HangingColumns,
}

impl Minimalist<'_> {
    fn centred(&self, ctx: &mut FlowContext, text: &str, style: TextStyle) {
        if is_blank(text) {
            return;
        }
        let options = options(self.theme, style).aligned(Align::Center);
        draw_wrapped_text(ctx, text, self.x, self.width, style, options);
    }

    /// Everything about the person, centred: name, title, contact details, and summary
    fn header(&self, ctx: &mut FlowContext, resume: &Resume) {
        let styles = &self.styles;
        let start = ctx.y();
        self.centred(ctx, &resume.full_name, styles.name);
        self.centred(ctx, &resume.title, styles.subheading.with_colour(self.theme.palette.muted));
        self.centred(ctx, &bulleted(&resume.contact_items()), styles.contact);
        if !is_blank(&resume.summary) {
            ctx.move_cursor(self.theme.spacing.paragraph_gap);
            self.centred(ctx, &resume.summary, styles.body);
        }
        if ctx.y() == start {
            return;
        }

        let spacing = &self.theme.spacing;
        ctx.move_cursor(spacing.paragraph_gap);
        draw_rule(ctx, self.x, self.width, spacing.rule_thickness, self.theme.palette.rule);
        ctx.move_cursor(spacing.header_gap);
    }

    fn entries(&self, ctx: &mut FlowContext, title: &str, entries: Vec<Entry<'_>>) {
        let styles = &self.styles;
        let columns = self.columns;
        let heading_line = self.theme.line_height(styles.heading.size);
        let content = (columns.content_x(), columns.content_width());
        let subheading_options = options(self.theme, styles.subheading);
        let body_options = options(self.theme, styles.body);

        for (i, entry) in entries.iter().enumerate() {
            let heading = measure_hanging_row(
                ctx,
                &entry.label,
                entry.heading,
                columns,
                styles.dates,
                styles.heading,
                heading_line,
            );
            let subheading = if is_blank(entry.subheading) {
                Pt(0.0)
            } else {
                measure_wrapped_text(
                    ctx,
                    entry.subheading,
                    content.1,
                    styles.subheading,
                    subheading_options,
                )
            };
            let first_body = if is_blank(entry.body) {
                Pt(0.0)
            } else {
                body_options.line_height
            };
            let block = heading + subheading + first_body;

            if i == 0 {
                begin_section(ctx, self.theme, title, (self.x, self.width), styles.section, block);
            }
            ctx.keep_together(block);

            draw_hanging_row(
                ctx,
                &entry.label,
                entry.heading,
                columns,
                styles.dates,
                styles.heading,
                heading_line,
            );
            if !is_blank(entry.subheading) {
                draw_wrapped_text(
                    ctx,
                    entry.subheading,
                    content.0,
                    content.1,
                    styles.subheading,
                    subheading_options,
                );
            }
            if !is_blank(entry.body) {
                draw_wrapped_text(ctx, entry.body, content.0, content.1, styles.body, body_options);
            }
            ctx.move_cursor(self.theme.spacing.entry_gap);
        }
    }

    fn experience(&self, ctx: &mut FlowContext, resume: &Resume) {
        let entries = resume
            .experience_entries()
            .map(|entry| Entry {
                label: entry.dates(),
                heading: &entry.role,
                subheading: &entry.company,
                body: &entry.description,
            })
            .collect();
        self.entries(ctx, "Experience", entries);
    }

    fn education(&self, ctx: &mut FlowContext, resume: &Resume) {
        let entries = resume
            .education_entries()
            .map(|entry| {
                let (heading, subheading) = if is_blank(&entry.degree) {
                    (entry.school.as_str(), "")
                } else {
                    (entry.degree.as_str(), entry.school.as_str())
                };
                Entry {
                    label: entry.dates(),
                    heading,
                    subheading,
                    body: "",
                }
            })
            .collect();
        self.entries(ctx, "Education", entries);
    }

    fn projects(&self, ctx: &mut FlowContext, resume: &Resume) {
        let entries = resume
            .project_entries()
            .map(|entry| Entry {
                label: String::new(),
                heading: &entry.name,
                subheading: &entry.link,
                body: &entry.description,
            })
            .collect();
        self.entries(ctx, "Projects", entries);
    }

    /// Skills as one wrapped, bulleted list in the content column
    fn skills(&self, ctx: &mut FlowContext, resume: &Resume) {
        let skills = resume.skill_items();
        if skills.is_empty() {
            return;
        }
        let body = self.styles.body;
        let options = options(self.theme, body);
        begin_section(
            ctx,
            self.theme,
            "Skills",
            (self.x, self.width),
            self.styles.section,
            options.line_height,
        );
        draw_wrapped_text(
            ctx,
            &bulleted(&skills),
            self.columns.content_x(),
            self.columns.content_width(),
            body,
            options,
        );
    }
}
