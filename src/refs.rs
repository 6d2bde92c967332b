use crate::RenderError;
use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object the document writes, keyed so that objects can
/// refer to each other before they are written
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    CidFont(usize),
    ToUnicode(usize),
    FontDescriptor(usize),
    FontData(usize),
    Outlines,
    OutlineEntry(usize),
}

#[derive(Debug)]
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl Default for ObjectReferences {
    fn default() -> Self {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences::default()
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Like [ObjectReferences::get], but a missing reference is an error
    pub fn require(&self, ref_type: RefType) -> Result<Ref, RenderError> {
        self.get(ref_type)
            .ok_or_else(|| RenderError::MissingReference(format!("{ref_type:?}")))
    }

    /// Allocate a fresh object id for `ref_type`
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_retrievable() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let page = refs.gen(RefType::Page(0));
        assert_eq!(catalog.get() + 1, page.get());
        assert_eq!(refs.get(RefType::Page(0)), Some(page));
        assert!(matches!(
            refs.require(RefType::Outlines),
            Err(RenderError::MissingReference(_))
        ));
    }
}
