use super::{begin_section, bulleted, is_blank, options, FontIds, Styles};
use crate::font::Font;
use crate::layout::{
    draw_left_right_line, draw_rule, draw_skill_chips, draw_wrapped_text,
    measure_left_right_line, measure_wrapped_text, FlowContext, LaidOut,
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
    let column = Column::new(theme, fonts, ctx.content_left(), ctx.content_width());

    column.header(&mut ctx, resume);
    column.profile(&mut ctx, resume);
    column.experience(&mut ctx, resume);
    column.skills(&mut ctx, resume);
    column.education(&mut ctx, resume);
    column.projects(&mut ctx, resume);

    ctx.finish()
}

/// One flowing column of sans-serif sections. The sidebar template flows its main
/// column through the same sections.
pub(super) struct Column<'t> {
    theme: &'t Theme,
    fonts: &'t FontIds,
    styles: Styles,
    x: Pt,
    width: Pt,
}

impl<'t> Column<'t> {
    pub fn new(theme: &'t Theme, fonts: &'t FontIds, x: Pt, width: Pt) -> Column<'t> {
        Column {
            theme,
            fonts,
            styles: Styles::new(
                theme,
                fonts.sans,
                fonts.sans_bold,
                fonts.sans,
                theme.palette.accent,
            ),
            x,
            width,
        }
    }

    fn line_height(&self, size: Pt) -> Pt {
        self.theme.line_height(size)
    }

    fn section(&self, ctx: &mut FlowContext, title: &str, first_line: Pt) {
        begin_section(
            ctx,
            self.theme,
            title,
            (self.x, self.width),
            self.styles.section,
            first_line,
        );
    }

    /// Name, title, and contact details over a rule
    pub fn header(&self, ctx: &mut FlowContext, resume: &Resume) {
        let styles = &self.styles;
        let contacts = bulleted(&resume.contact_items());
        let lines = [
            (resume.full_name.as_str(), styles.name),
            (resume.title.as_str(), styles.title),
            (contacts.as_str(), styles.contact),
        ];
        let mut drawn = false;
        for (text, style) in lines {
            if is_blank(text) {
                continue;
            }
            draw_wrapped_text(ctx, text, self.x, self.width, style, options(self.theme, style));
            drawn = true;
        }
        if !drawn {
            return;
        }

        let spacing = &self.theme.spacing;
        ctx.move_cursor(spacing.paragraph_gap);
        draw_rule(ctx, self.x, self.width, spacing.rule_thickness, self.theme.palette.rule);
        ctx.move_cursor(spacing.header_gap);
    }

    pub fn profile(&self, ctx: &mut FlowContext, resume: &Resume) {
        if is_blank(&resume.summary) {
            return;
        }
        let body = self.styles.body;
        self.section(ctx, "Profile", self.line_height(body.size));
        let body_options = options(self.theme, body);
        draw_wrapped_text(ctx, &resume.summary, self.x, self.width, body, body_options);
    }

    pub fn experience(&self, ctx: &mut FlowContext, resume: &Resume) {
        let styles = &self.styles;
        let gap = self.theme.spacing.column_gap;
        let mut first = true;

        for entry in resume.experience_entries() {
            let dates = entry.dates();
            let heading = measure_left_right_line(
                ctx,
                &entry.role,
                &dates,
                self.width,
                styles.heading,
                styles.dates,
                gap,
                self.line_height(styles.heading.size),
            );
            let company = if is_blank(&entry.company) {
                Pt(0.0)
            } else {
                measure_wrapped_text(
                    ctx,
                    &entry.company,
                    self.width,
                    styles.subheading,
                    options(self.theme, styles.subheading),
                )
            };
            let first_body = if is_blank(&entry.description) {
                Pt(0.0)
            } else {
                self.line_height(styles.body.size)
            };

            let block = heading + company + first_body;
            if first {
                self.section(ctx, "Experience", block);
                first = false;
            }
            ctx.keep_together(block);

            draw_left_right_line(
                ctx,
                &entry.role,
                &dates,
                self.x,
                self.width,
                styles.heading,
                styles.dates,
                gap,
                self.line_height(styles.heading.size),
            );
            if !is_blank(&entry.company) {
                let style = self.styles.subheading.with_colour(self.theme.palette.accent);
                let company_options = options(self.theme, style);
                draw_wrapped_text(ctx, &entry.company, self.x, self.width, style, company_options);
            }
            if !is_blank(&entry.description) {
                draw_wrapped_text(
                    ctx,
                    &entry.description,
                    self.x,
                    self.width,
                    styles.body,
                    options(self.theme, styles.body),
                );
            }
            ctx.move_cursor(self.theme.spacing.entry_gap);
        }
    }

    pub fn skills(&self, ctx: &mut FlowContext, resume: &Resume) {
        let skills = resume.skill_items();
        if skills.is_empty() {
            return;
        }
        let chips = &self.theme.chips;
        self.section(ctx, "Skills", chips.row_height());
        draw_skill_chips(ctx, &skills, self.x, self.width, self.fonts.sans, chips);
    }

    pub fn education(&self, ctx: &mut FlowContext, resume: &Resume) {
        let styles = &self.styles;
        let gap = self.theme.spacing.column_gap;
        let mut first = true;

        for entry in resume.education_entries() {
            let dates = entry.dates();
            // a school without a degree is shown as the heading
            let (heading_text, school) = if is_blank(&entry.degree) {
                (entry.school.as_str(), "")
            } else {
                (entry.degree.as_str(), entry.school.as_str())
            };
            let heading = measure_left_right_line(
                ctx,
                heading_text,
                &dates,
                self.width,
                styles.heading,
                styles.dates,
                gap,
                self.line_height(styles.heading.size),
            );
            let school_height = if is_blank(school) {
                Pt(0.0)
            } else {
                self.line_height(styles.subheading.size)
            };

            let block = heading + school_height;
            if first {
                self.section(ctx, "Education", block);
                first = false;
            }
            ctx.keep_together(block);

            draw_left_right_line(
                ctx,
                heading_text,
                &dates,
                self.x,
                self.width,
                styles.heading,
                styles.dates,
                gap,
                self.line_height(styles.heading.size),
            );
            if !is_blank(school) {
                draw_wrapped_text(
                    ctx,
                    school,
                    self.x,
                    self.width,
                    styles.subheading,
                    options(self.theme, styles.subheading),
                );
            }
            ctx.move_cursor(self.theme.spacing.entry_gap);
        }
    }

    pub fn projects(&self, ctx: &mut FlowContext, resume: &Resume) {
        let styles = &self.styles;
        let gap = self.theme.spacing.column_gap;
        let mut first = true;

        for entry in resume.project_entries() {
            let heading = measure_left_right_line(
                ctx,
                &entry.name,
                &entry.link,
                self.width,
                styles.heading,
                styles.link,
                gap,
                self.line_height(styles.heading.size),
            );
            let first_body = if is_blank(&entry.description) {
                Pt(0.0)
            } else {
                self.line_height(styles.body.size)
            };

            let block = heading + first_body;
            if first {
                self.section(ctx, "Projects", block);
                first = false;
            }
            ctx.keep_together(block);

            draw_left_right_line(
                ctx,
                &entry.name,
                &entry.link,
                self.x,
                self.width,
                styles.heading,
                styles.link,
                gap,
                self.line_height(styles.heading.size),
            );
            if !is_blank(&entry.description) {
                draw_wrapped_text(
                    ctx,
                    &entry.description,
                    self.x,
                    self.width,
                    styles.body,
                    options(self.theme, styles.body),
                );
            }
            ctx.move_cursor(self.theme.spacing.entry_gap);
        }
    }
}
