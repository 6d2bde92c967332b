//! Lays resumes out as vector PDF pages.
//!
//! Text is measured, wrapped, and flowed down fixed-size pages by hand, breaking to a new
//! page whenever content would cross the bottom margin. Three templates are available:
//! see [Template].
//!
//! ```
//! use resume_layout::{Renderer, Resume, Theme};
//!
//! let resume = Resume {
//!     full_name: "Ada Lovelace".into(),
//!     title: "Analyst".into(),
//!     ..Resume::default()
//! };
//! let document = Renderer::new(Theme::default())
//!     .render(&resume, "modern")
//!     .expect("modern is supported");
//! assert_eq!(document.page_count(), 1);
//!
//! let pdf = document.to_bytes().expect("can write pdf");
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay content out on pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

/// Standard page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod resume;
pub use resume::*;

mod templates;
pub use templates::{FontIds, Template};

mod theme;
pub use theme::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
