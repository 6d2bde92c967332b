use crate::units::Pt;
use serde::Deserialize;

/// Margins bound the area the flow layout draws into: the cursor starts at the top
/// margin of each page and a page break is taken before content would cross the bottom
/// margin. Left and right margins define the default content width. Margins are also
/// applied to [`Page`](crate::Page)s to determine the `ArtBox` of each page in the
/// generated PDF.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// The same vertical margins with the horizontal ones replaced, used by layouts
    /// whose flowing column does not span the page
    pub fn with_horizontal(&self, left: Pt, right: Pt) -> Margins {
        Margins {
            left,
            right,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Mm;

    #[test]
    fn constructors_follow_css_order() {
        let margins = Margins::trbl(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0));
        assert_eq!(margins.right, Pt(2.0));
        assert_eq!(margins.left, Pt(4.0));
        assert!((Margins::all(Mm(25.4)).top.0 - 72.0).abs() < 1e-3);
        let columned = Margins::symmetric(Pt(36.0), Pt(18.0)).with_horizontal(Pt(200.0), Pt(0.0));
        assert_eq!(columned.top, Pt(36.0));
        assert_eq!(columned.left, Pt(200.0));
    }

    #[test]
    fn deserializes_partial_margins() {
        let margins: Margins = serde_json::from_str(r#"{"top": 40, "bottom": 30}"#)
            .expect("margins parse");
        assert_eq!(margins.top, Pt(40.0));
        assert_eq!(margins.left, Pt(0.0));
    }
}
