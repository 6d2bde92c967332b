use crate::layout::TextMetrics;
use crate::refs::{ObjectReferences, RefType};
use crate::{Pt, RenderError};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{Name, Pdf};
use std::sync::Arc;

mod embed;
mod standard;
pub use standard::StandardFont;

#[derive(Clone)]
enum FontKind {
    Standard(StandardFont),
    Embedded(Arc<OwnedFace>),
}

/// A font that can be measured during layout and referenced from pages.
///
/// Standard fonts are referenced by name and never embedded; TrueType / OpenType fonts
/// are embedded in their entirety, so large fonts may dramatically increase the size of
/// the generated PDF. Cloning a font is cheap: embedded faces are shared.
///
/// Fonts are referred to from page contents by their [Id] within the [crate::Document].
#[derive(Clone)]
pub struct Font {
    kind: FontKind,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Font").field(&self.name()).finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RenderError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font {
            kind: FontKind::Embedded(Arc::new(face)),
        })
    }

    /// One of the 14 fonts every PDF reader provides
    pub fn standard(font: StandardFont) -> Font {
        Font {
            kind: FontKind::Standard(font),
        }
    }

    /// The full name of the font, or its PostScript name for standard fonts
    pub fn name(&self) -> String {
        match &self.kind {
            FontKind::Standard(font) => font.base_name().to_string(),
            FontKind::Embedded(face) => face
                .as_face_ref()
                .names()
                .into_iter()
                .find(|name| {
                    name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode()
                })
                .and_then(|name| name.to_string())
                .unwrap_or_else(|| "Embedded".to_string()),
        }
    }

    fn units_per_em(&self) -> f32 {
        match &self.kind {
            FontKind::Standard(_) => 1000.0,
            FontKind::Embedded(face) => face.as_face_ref().units_per_em() as f32,
        }
    }

    fn advance_units(&self, ch: char) -> f32 {
        match &self.kind {
            FontKind::Standard(font) => font.advance(ch) as f32,
            FontKind::Embedded(face) => {
                let face = face.as_face_ref();
                face.glyph_hor_advance(glyph_id(face, ch))
                    .unwrap_or_default() as f32
            }
        }
    }

    /// Encode text the way the font's `Tj` operands expect: single WinAnsi bytes for
    /// standard fonts, big-endian glyph ids for embedded ones.
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match &self.kind {
            FontKind::Standard(font) => text
                .chars()
                .map(|ch| {
                    standard::encode_win_ansi(ch).unwrap_or_else(|| {
                        log::warn!(
                            "{} cannot encode {ch:?}, drawing '?' instead",
                            font.base_name()
                        );
                        b'?'
                    })
                })
                .collect(),
            FontKind::Embedded(face) => {
                let face = face.as_face_ref();
                text.chars()
                    .flat_map(|ch| glyph_id(face, ch).0.to_be_bytes())
                    .collect()
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        id: Id<Font>,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let font_index = id.index();
        let font_ref = refs.gen(RefType::Font(font_index));
        match &self.kind {
            FontKind::Standard(font) => {
                writer
                    .type1_font(font_ref)
                    .base_font(Name(font.base_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            FontKind::Embedded(face) => {
                embed::write_type0(face, &self.name(), font_ref, refs, font_index, writer)?;
            }
        }
        Ok(())
    }
}

/// The glyph drawn for `ch`: its own, or the replacement glyph when the face lacks one
fn glyph_id(face: &Face, ch: char) -> GlyphId {
    face.glyph_index(ch)
        .or_else(|| face.glyph_index('\u{FFFD}'))
        .or_else(|| face.glyph_index('?'))
        .unwrap_or_default()
}

impl TextMetrics for Font {
    /// Characters that cannot be drawn are measured as the replacement they are drawn as
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: f32 = text.chars().map(|ch| self.advance_units(ch)).sum();
        size / self.units_per_em() * units
    }

    fn ascent(&self, size: Pt) -> Pt {
        let ascender = match &self.kind {
            FontKind::Standard(font) => font.ascender(),
            FontKind::Embedded(face) => face.as_face_ref().ascender(),
        };
        size / self.units_per_em() * ascender as f32
    }

    fn descent(&self, size: Pt) -> Pt {
        let descender = match &self.kind {
            FontKind::Standard(font) => font.descender(),
            FontKind::Embedded(face) => face.as_face_ref().descender(),
        };
        size / self.units_per_em() * descender as f32
    }
}
