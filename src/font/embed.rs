//! Embedding TrueType / OpenType faces as Type0 fonts with a CIDFontType2 descendant.

use crate::refs::{ObjectReferences, RefType};
use crate::RenderError;
use owned_ttf_parser::{AsFaceRef, Face, OwnedFace};
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref, Str};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Unicode characters of every glyph reachable through the face's cmap, keyed by glyph id
fn glyph_chars(face: &Face) -> BTreeMap<u16, char> {
    let mut map = BTreeMap::new();
    let Some(cmap) = face.tables().cmap else {
        return map;
    };
    for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
        subtable.codepoints(|codepoint| {
            let gid = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0);
            if let (Ok(ch), Some(gid)) = (char::try_from(codepoint), gid) {
                map.entry(gid.0).or_insert(ch);
            }
        });
    }
    map
}

pub(super) fn write_type0(
    owned: &OwnedFace,
    name: &str,
    font_ref: Ref,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Result<(), RenderError> {
    let face = owned.as_face_ref();
    let glyphs = glyph_chars(face);
    let scaling = 1000.0 / face.units_per_em() as f32;
    let base_font = format!("F{font_index}");

    let data_ref = refs.gen(RefType::FontData(font_index));
    let data = owned.as_slice();
    writer
        .stream(data_ref, data)
        .pair(Name(b"Length1"), data.len() as i32);

    let descriptor_ref = refs.gen(RefType::FontDescriptor(font_index));
    let advances: Vec<(u16, f32)> = glyphs
        .keys()
        .map(|&gid| {
            let advance = face
                .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                .unwrap_or_default();
            (gid, advance as f32 * scaling)
        })
        .collect();
    let max_width = advances.iter().map(|&(_, w)| w).fold(0.0, f32::max);
    let avg_width = if advances.is_empty() {
        0.0
    } else {
        advances.iter().map(|&(_, w)| w).sum::<f32>() / advances.len() as f32
    };
    let bbox = face.global_bounding_box();

    let mut flags = FontFlags::NON_SYMBOLIC;
    flags.set(FontFlags::FIXED_PITCH, face.is_monospaced());
    flags.set(FontFlags::ITALIC, face.is_italic());

    let mut descriptor = writer.font_descriptor(descriptor_ref);
    descriptor
        .name(Name(name.as_bytes()))
        .flags(flags)
        .bbox(pdf_writer::Rect::new(
            bbox.x_min as f32 * scaling,
            bbox.y_min as f32 * scaling,
            bbox.x_max as f32 * scaling,
            bbox.y_max as f32 * scaling,
        ))
        .italic_angle(if face.is_italic() { -12.0 } else { 0.0 })
        .ascent(face.ascender() as f32 * scaling)
        .descent(face.descender() as f32 * scaling)
        .cap_height(face.capital_height().unwrap_or(face.ascender()) as f32 * scaling)
        .stem_v(80.0)
        .avg_width(avg_width)
        .max_width(max_width)
        .font_file2(data_ref);
    descriptor.finish();

    let cid_ref = refs.gen(RefType::CidFont(font_index));
    let mut cid_font = writer.cid_font(cid_ref);
    cid_font
        .subtype(CidFontType::Type2)
        .base_font(Name(base_font.as_bytes()))
        .system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        })
        .font_descriptor(descriptor_ref)
        .default_width(avg_width);
    {
        // one `consecutive` run per block of neighbouring glyph ids
        let mut widths = cid_font.widths();
        let mut run: Vec<f32> = Vec::new();
        let mut run_start = 0u16;
        for &(gid, width) in &advances {
            if !run.is_empty() && gid as usize != run_start as usize + run.len() {
                widths.consecutive(run_start, run.drain(..));
            }
            if run.is_empty() {
                run_start = gid;
            }
            run.push(width);
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run);
        }
    }
    cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
    cid_font.finish();

    let to_unicode_ref = refs.gen(RefType::ToUnicode(font_index));
    let cmap = to_unicode_cmap(&glyphs);
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
        cmap.as_bytes(),
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    );
    writer
        .stream(to_unicode_ref, compressed.as_slice())
        .filter(Filter::FlateDecode);

    writer
        .type0_font(font_ref)
        .base_font(Name(base_font.as_bytes()))
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_ref)
        .to_unicode(to_unicode_ref);

    Ok(())
}

/// A ToUnicode CMap so text copied out of the PDF maps back to characters
fn to_unicode_cmap(glyphs: &BTreeMap<u16, char>) -> String {
    let mut map = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
    );

    // bfchar blocks hold at most 100 entries
    let entries: Vec<(&u16, &char)> = glyphs.iter().collect();
    for block in entries.chunks(100) {
        let _ = writeln!(map, "{} beginbfchar", block.len());
        for (gid, ch) in block {
            let mut utf16 = [0u16; 2];
            let units: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            let _ = writeln!(map, "<{gid:04x}> <{units}>");
        }
        map.push_str("endbfchar\n");
    }

    map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_unicode_cmap_splits_into_blocks_of_100() {
        let glyphs: BTreeMap<u16, char> = (1u16..=150)
            .map(|gid| (gid, char::from_u32(0x40 + gid as u32).unwrap_or('?')))
            .collect();
        let cmap = to_unicode_cmap(&glyphs);
        assert!(cmap.contains("100 beginbfchar"));
        assert!(cmap.contains("50 beginbfchar"));
        assert!(cmap.contains("<0001> <0041>"));
        assert!(cmap.ends_with("end end\n"));
    }

    #[test]
    fn astral_characters_map_to_surrogate_pairs() {
        let glyphs = BTreeMap::from([(7u16, '😀')]);
        assert!(to_unicode_cmap(&glyphs).contains("<0007> <d83dde00>"));
    }
}
