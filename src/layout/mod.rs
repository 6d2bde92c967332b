//! Flow layout for positioning content on pages.
//!
//! Layout happens top-down on a [`FlowContext`]: a cursor walks down the current page
//! and every drawer asks the context for room before it draws, which starts a new page
//! when the content would cross the bottom margin.
//!
//! # Building blocks
//!
//! - [`wrap_text`] - greedy word wrapping, breaking words that are too long on their own
//! - [`draw_wrapped_text`] - paragraphs of wrapped text
//! - [`draw_left_right_line`] - wrapped text on the left, a short value flush right
//! - [`draw_hanging_row`] - a narrow label column beside a content column
//! - [`draw_section_title`] - a bookmarked heading
//! - [`draw_skill_chips`] - tags packed into wrapping rows
//!
//! # Example
//!
//! ```
//! use resume_layout::{colours, Document, Font, Pt, StandardFont};
//! use resume_layout::layout::{draw_wrapped_text, FlowContext, Margins, TextOptions, TextStyle};
//! use resume_layout::pagesize;
//!
//! let mut doc = Document::default();
//! let font = doc.add_font(Font::standard(StandardFont::Helvetica));
//!
//! let mut ctx = FlowContext::new(&doc.fonts, pagesize::A4, Margins::all(Pt(48.0)));
//! let style = TextStyle::new(font, Pt(10.0), colours::BLACK);
//! let (x, width) = (ctx.content_left(), ctx.content_width());
//! let options = TextOptions::new(Pt(14.0), Pt(6.0));
//! draw_wrapped_text(&mut ctx, "Hello, world!", x, width, style, options);
//!
//! for page in ctx.finish().pages {
//!     doc.add_page(page);
//! }
//! assert_eq!(doc.page_count(), 1);
//! ```

mod chips;
mod draw;
mod flow;
mod margins;
mod text;

pub use chips::*;
pub use draw::*;
pub use flow::*;
pub use margins::*;
pub use text::*;
