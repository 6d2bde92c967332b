//! Styling shared by the templates: paper, margins, colours, type sizes and spacing.
//!
//! A theme is plain data; it can be built in code or read from JSON where every field
//! is optional and falls back to the default look:
//!
//! ```
//! use resume_layout::{Pt, Theme};
//!
//! let theme = Theme::from_json(r##"{
//!     "paper": "letter",
//!     "margins": { "top": 54, "right": 54, "bottom": 54, "left": 54 },
//!     "palette": { "accent": "#0f766e" },
//!     "typeScale": { "body": 10.5 }
//! }"##).expect("theme parses");
//! assert_eq!(theme.type_scale.body, Pt(10.5));
//! assert_eq!(theme.type_scale.name, Theme::default().type_scale.name);
//! ```

use crate::colour::{colours, Colour};
use crate::font::{Font, StandardFont};
use crate::layout::{ChipStyle, Margins};
use crate::pagesize::Paper;
use crate::units::Pt;
use crate::RenderError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub paper: Paper,
    pub margins: Margins,
    pub palette: Palette,
    pub type_scale: TypeScale,
    pub spacing: Spacing,
    pub chips: ChipStyle,
    pub minimalist: MinimalistStyle,
    pub sidebar: SidebarStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            paper: Paper::A4,
            margins: Margins::all(Pt(48.0)),
            palette: Palette::default(),
            type_scale: TypeScale::default(),
            spacing: Spacing::default(),
            chips: ChipStyle::default(),
            minimalist: MinimalistStyle::default(),
            sidebar: SidebarStyle::default(),
        }
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Theme, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Distance between the tops of consecutive lines set at `size`
    pub fn line_height(&self, size: Pt) -> Pt {
        size * self.type_scale.line_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Body text
    pub text: Colour,
    /// Dates, contact details, and other secondary text
    pub muted: Colour,
    /// Job titles and section headings
    pub accent: Colour,
    /// Horizontal rules
    pub rule: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            text: colours::SLATE_800,
            muted: colours::SLATE_500,
            accent: colours::BLUE_600,
            rule: colours::SLATE_200,
        }
    }
}

/// Font sizes, in points
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeScale {
    pub name: Pt,
    pub title: Pt,
    pub section: Pt,
    pub heading: Pt,
    pub body: Pt,
    pub small: Pt,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl Default for TypeScale {
    fn default() -> Self {
        TypeScale {
            name: Pt(24.0),
            title: Pt(13.0),
            section: Pt(11.0),
            heading: Pt(11.0),
            body: Pt(10.0),
            small: Pt(9.0),
            line_height: 1.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spacing {
    /// Between the header and the first section
    pub header_gap: Pt,
    /// Above every section title
    pub section_gap: Pt,
    /// Between a section title and its content
    pub section_title_gap: Pt,
    /// Between entries within a section
    pub entry_gap: Pt,
    pub paragraph_gap: Pt,
    /// Horizontal space kept between text and a value set flush right of it
    pub column_gap: Pt,
    pub rule_thickness: Pt,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            header_gap: Pt(14.0),
            section_gap: Pt(14.0),
            section_title_gap: Pt(7.0),
            entry_gap: Pt(9.0),
            paragraph_gap: Pt(4.0),
            column_gap: Pt(12.0),
            rule_thickness: Pt(0.75),
        }
    }
}

/// The hanging label column of the minimalist template
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MinimalistStyle {
    pub label_width: Pt,
    pub gap: Pt,
}

impl Default for MinimalistStyle {
    fn default() -> Self {
        MinimalistStyle {
            label_width: Pt(110.0),
            gap: Pt(14.0),
        }
    }
}

/// The rail of the sidebar template, which runs the full height of every page
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarStyle {
    pub width: Pt,
    /// Inset of the rail's content from its edges
    pub padding: Pt,
    /// Between the rail and the flowing column
    pub gutter: Pt,
    pub background: Colour,
    pub text: Colour,
    pub muted: Colour,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        SidebarStyle {
            width: Pt(180.0),
            padding: Pt(18.0),
            gutter: Pt(24.0),
            background: colours::NAVY_900,
            text: colours::WHITE,
            muted: colours::SLATE_200,
        }
    }
}

/// The fonts the templates set text in. Defaults to the standard PDF fonts, which need
/// no embedding; any of them can be swapped for a loaded TrueType font.
#[derive(Debug, Clone)]
pub struct FontFamilies {
    pub sans: Font,
    pub sans_bold: Font,
    pub serif: Font,
    pub serif_bold: Font,
    pub serif_italic: Font,
}

impl Default for FontFamilies {
    fn default() -> Self {
        FontFamilies {
            sans: Font::standard(StandardFont::Helvetica),
            sans_bold: Font::standard(StandardFont::HelveticaBold),
            serif: Font::standard(StandardFont::TimesRoman),
            serif_bold: Font::standard(StandardFont::TimesBold),
            serif_italic: Font::standard(StandardFont::TimesItalic),
        }
    }
}
