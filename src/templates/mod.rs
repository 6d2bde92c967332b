//! The resume templates that can be drawn as vector pages.
//!
//! Each template is a fixed program: it walks the resume's sections in its own order,
//! skipping empty ones, and draws them through a [FlowContext]. Templates without a
//! program here cannot be rendered; callers are expected to check
//! [Template::is_supported] and use another export path for those.

use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::layout::{draw_section_title, FlowContext, LaidOut, TextOptions, TextStyle};
use crate::resume::Resume;
use crate::theme::{FontFamilies, Theme};
use crate::units::Pt;
use crate::RenderError;
use id_arena::{Arena, Id};
use std::fmt;
use std::str::FromStr;

mod minimalist;
mod modern;
mod sidebar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// A single column: header, profile, experience, skill chips, education, projects
    Modern,
    /// Serif type with a centred header and dates hanging in a narrow left column
    Minimalist,
    /// A coloured rail down the left of every page beside a flowing main column
    Sidebar,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Minimalist, Template::Sidebar];

    /// The identifier the template is selected by
    pub fn id(self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Minimalist => "minimalist",
            Template::Sidebar => "sidebar",
        }
    }

    /// Whether `id` names a template that can be rendered as vector pages
    pub fn is_supported(id: &str) -> bool {
        id.parse::<Template>().is_ok()
    }

    pub(crate) fn layout(
        self,
        resume: &Resume,
        theme: &Theme,
        fonts: &FontIds,
        arena: &Arena<Font>,
    ) -> LaidOut {
        match self {
            Template::Modern => modern::layout(resume, theme, fonts, arena),
            Template::Minimalist => minimalist::layout(resume, theme, fonts, arena),
            Template::Sidebar => sidebar::layout(resume, theme, fonts, arena),
        }
    }
}

impl FromStr for Template {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Template::ALL
            .into_iter()
            .find(|template| template.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| RenderError::UnsupportedTemplate(id.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where each font family ended up in the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontIds {
    pub sans: Id<Font>,
    pub sans_bold: Id<Font>,
    pub serif: Id<Font>,
    pub serif_bold: Id<Font>,
    pub serif_italic: Id<Font>,
}

impl FontIds {
    pub(crate) fn register(families: &FontFamilies, document: &mut Document) -> FontIds {
        FontIds {
            sans: document.add_font(families.sans.clone()),
            sans_bold: document.add_font(families.sans_bold.clone()),
            serif: document.add_font(families.serif.clone()),
            serif_bold: document.add_font(families.serif_bold.clone()),
            serif_italic: document.add_font(families.serif_italic.clone()),
        }
    }
}

/// The text styles of one template, built from the theme's type scale and palette
#[derive(Debug, Clone, Copy)]
pub(crate) struct Styles {
    pub name: TextStyle,
    pub title: TextStyle,
    pub contact: TextStyle,
    pub section: TextStyle,
    pub heading: TextStyle,
    pub subheading: TextStyle,
    pub body: TextStyle,
    pub dates: TextStyle,
    pub link: TextStyle,
}

impl Styles {
    pub fn new(
        theme: &Theme,
        regular: Id<Font>,
        bold: Id<Font>,
        italic: Id<Font>,
        section_colour: Colour,
    ) -> Styles {
        let scale = &theme.type_scale;
        let palette = &theme.palette;
        Styles {
            name: TextStyle::new(bold, scale.name, palette.text),
            title: TextStyle::new(regular, scale.title, palette.accent),
            contact: TextStyle::new(regular, scale.small, palette.muted),
            section: TextStyle::new(bold, scale.section, section_colour),
            heading: TextStyle::new(bold, scale.heading, palette.text),
            subheading: TextStyle::new(italic, scale.body, palette.muted),
            body: TextStyle::new(regular, scale.body, palette.text),
            dates: TextStyle::new(regular, scale.small, palette.muted),
            link: TextStyle::new(regular, scale.small, palette.accent),
        }
    }
}

/// Wrapped-text options for text set in `style`
pub(crate) fn options(theme: &Theme, style: TextStyle) -> TextOptions {
    TextOptions::new(theme.line_height(style.size), theme.spacing.paragraph_gap)
}

/// Space a section off from what came before and draw its title, kept on the same page
/// as the first `first_line` of its content
pub(crate) fn begin_section(
    ctx: &mut FlowContext,
    theme: &Theme,
    title: &str,
    (x, width): (Pt, Pt),
    style: TextStyle,
    first_line: Pt,
) {
    if ctx.y() < ctx.top() {
        ctx.move_cursor(theme.spacing.section_gap);
    }
    ctx.keep_together(style.size + theme.spacing.section_title_gap + first_line);
    draw_section_title(ctx, title, x, width, style, theme.spacing.section_title_gap);
}

/// Join non-empty items with a bullet
pub(crate) fn bulleted(items: &[&str]) -> String {
    items.join("  •  ")
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
