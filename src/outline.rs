use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::RenderError;
use pdf_writer::{Finish, Pdf, TextStr};

/// A flat document outline: one bookmark per resume section
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

/// A bookmark jumping to a position on a page
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    /// Where on the page the bookmarked content starts
    pub top: Pt,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, top: Pt, title: String) {
        self.entries.push(OutlineEntry {
            page_index,
            top,
            title,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the outline root and its items. Must run after the page references exist.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let outlines_id = refs.gen(RefType::Outlines);
        let item_ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
            outline.first(*first);
            outline.last(*last);
            outline.count(item_ids.len() as i32);
        }
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let page = refs.require(RefType::Page(entry.page_index))?;
            let mut item = writer.outline_item(item_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if let Some(next) = item_ids.get(i + 1) {
                item.next(*next);
            }
            item.dest().page(page).xyz(0.0, entry.top.0, None);
            item.finish();
        }
        Ok(())
    }
}
