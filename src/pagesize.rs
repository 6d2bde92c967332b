//! Page sizes the resume templates can be printed on.
//!
//! All sizes are (width, height) in portrait orientation.
//!
//! ```
//! use resume_layout::pagesize::{A4, LETTER};
//!
//! assert!(A4.1 > LETTER.1);
//! ```

use crate::units::*;
use serde::Deserialize;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// ISO A4, 595.28 × 841.89 points
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// US Letter, 612 × 792 points
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

/// The paper a theme asks for, as named in configuration files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    A4,
    Letter,
}

impl Paper {
    pub fn size(self) -> PageSize {
        match self {
            Paper::A4 => A4,
            Paper::Letter => LETTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_matches_the_iso_dimensions() {
        assert!((A4.0 .0 - 595.28).abs() < 0.01);
        assert!((A4.1 .0 - 841.89).abs() < 0.01);
        let paper: Paper = serde_json::from_str("\"letter\"").expect("known paper");
        assert_eq!(paper.size(), LETTER);
        assert_eq!(Paper::default().size(), A4);
        assert!(serde_json::from_str::<Paper>("\"tabloid\"").is_err());
    }
}
