use crate::font::Font;
use crate::layout::Margins;
use crate::outline::OutlineEntry;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::{Arena, Id};

/// Draws the fixed furniture of a page (backgrounds, rails) every time a page is created
pub type PagePainter<'a> = Box<dyn FnMut(&mut Page) + 'a>;

/// What a finished flow produced: its pages in order, and the bookmarks recorded
/// along the way
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOut {
    pub pages: Vec<Page>,
    pub bookmarks: Vec<OutlineEntry>,
}

/// Tracks where we are in a flowing layout: the page being filled, the pages already
/// filled, and a cursor that walks down the page.
///
/// `y` is measured in PDF points from the bottom of the page. It starts at the top of
/// the content area and only ever decreases, except when a page break resets it.
pub struct FlowContext<'a> {
    fonts: &'a Arena<Font>,
    size: PageSize,
    margins: Margins,
    finished: Vec<Page>,
    current: Page,
    y: Pt,
    painter: Option<PagePainter<'a>>,
    bookmarks: Vec<OutlineEntry>,
}

impl<'a> FlowContext<'a> {
    /// Start a flow on a fresh page
    pub fn new(fonts: &'a Arena<Font>, size: PageSize, margins: Margins) -> FlowContext<'a> {
        FlowContext {
            fonts,
            size,
            margins,
            finished: Vec::new(),
            current: Page::new(size, Some(margins)),
            y: size.1 - margins.top,
            painter: None,
            bookmarks: Vec::new(),
        }
    }

    /// Start a flow whose pages, including the first, are each handed to `painter` as
    /// soon as they are created
    pub fn with_page_painter(
        fonts: &'a Arena<Font>,
        size: PageSize,
        margins: Margins,
        mut painter: PagePainter<'a>,
    ) -> FlowContext<'a> {
        let mut ctx = FlowContext::new(fonts, size, margins);
        painter(&mut ctx.current);
        ctx.painter = Some(painter);
        ctx
    }

    /// The current cursor position
    pub fn y(&self) -> Pt {
        self.y
    }

    /// Where the cursor sits on a fresh page
    pub fn top(&self) -> Pt {
        self.size.1 - self.margins.top
    }

    /// The lowest the cursor may go before content has to move to the next page
    pub fn bottom(&self) -> Pt {
        self.margins.bottom
    }

    pub fn content_left(&self) -> Pt {
        self.margins.left
    }

    pub fn content_width(&self) -> Pt {
        self.size.0 - self.margins.left - self.margins.right
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Make sure `height` fits between the cursor and the bottom margin, breaking to a
    /// new page when it does not. Returns whether a page was added.
    pub fn ensure_space(&mut self, height: Pt) -> bool {
        if self.y - height < self.margins.bottom {
            self.add_page();
            true
        } else {
            false
        }
    }

    /// Keep a block of pre-measured `height` on a single page where possible.
    ///
    /// With the cursor still at the top of content the block starts here, even when it
    /// is taller than the page; it then flows on line by line.
    pub fn keep_together(&mut self, height: Pt) -> bool {
        if self.y >= self.top() {
            return false;
        }
        self.ensure_space(height)
    }

    /// Finish the current page and continue at the top of a new one
    pub fn add_page(&mut self) {
        let next = Page::new(self.size, Some(self.margins));
        let done = std::mem::replace(&mut self.current, next);
        self.finished.push(done);
        if let Some(painter) = self.painter.as_mut() {
            painter(&mut self.current);
        }
        self.y = self.top();
        log::debug!("page break, now on page {}", self.page_count());
    }

    /// Move the cursor down the page
    pub fn move_cursor(&mut self, amount: Pt) {
        debug_assert!(amount >= Pt(0.0), "the cursor only moves down the page");
        self.y -= amount;
    }

    /// The page currently being filled
    pub fn page(&mut self) -> &mut Page {
        &mut self.current
    }

    /// Zero-based index of the page currently being filled
    pub fn page_index(&self) -> usize {
        self.finished.len()
    }

    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Look up a font for measuring. The returned reference outlives this borrow of the
    /// context, so it can be held while drawing onto the page.
    pub fn font(&self, id: Id<Font>) -> &'a Font {
        &self.fonts[id]
    }

    /// Record an outline entry at the cursor on the current page
    pub fn bookmark<S: ToString>(&mut self, title: S) {
        self.bookmarks.push(OutlineEntry {
            page_index: self.page_index(),
            top: self.y,
            title: title.to_string(),
        });
    }

    pub fn finish(self) -> LaidOut {
        let mut pages = self.finished;
        pages.push(self.current);
        LaidOut {
            pages,
            bookmarks: self.bookmarks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;
    use crate::rect::Rect;
    use crate::page::RectLayout;
    use crate::colours;

    fn margins() -> Margins {
        Margins::all(Pt(50.0))
    }

    #[test]
    fn cursor_starts_at_the_top_of_content() {
        let fonts = Arena::new();
        let ctx = FlowContext::new(&fonts, A4, margins());
        assert_eq!(ctx.y(), A4.1 - Pt(50.0));
        assert_eq!(ctx.page_count(), 1);
        assert_eq!(ctx.content_width(), A4.0 - Pt(100.0));
    }

    #[test]
    fn running_out_of_room_starts_a_new_page() {
        let fonts = Arena::new();
        let mut ctx = FlowContext::new(&fonts, A4, margins());
        ctx.move_cursor(Pt(700.0));
        assert!(!ctx.ensure_space(Pt(20.0)));
        assert!(ctx.ensure_space(Pt(60.0)));
        assert_eq!(ctx.y(), A4.1 - Pt(50.0));
        assert_eq!(ctx.page_index(), 1);
        assert_eq!(ctx.finish().pages.len(), 2);
    }

    #[test]
    fn content_taller_than_the_room_left_always_breaks() {
        let fonts = Arena::new();
        let mut ctx = FlowContext::new(&fonts, A4, margins());
        assert!(ctx.ensure_space(Pt(800.0)));
        assert_eq!(ctx.page_count(), 2);
        assert_eq!(ctx.y(), A4.1 - Pt(50.0));
    }

    #[test]
    fn oversized_blocks_start_on_an_untouched_page() {
        let fonts = Arena::new();
        let mut ctx = FlowContext::new(&fonts, A4, margins());
        assert!(!ctx.keep_together(Pt(5000.0)));
        assert_eq!(ctx.page_count(), 1);

        ctx.move_cursor(Pt(10.0));
        assert!(ctx.keep_together(Pt(5000.0)));
        assert_eq!(ctx.page_count(), 2);
        assert!(!ctx.keep_together(Pt(5000.0)));
        assert_eq!(ctx.page_count(), 2);
    }

    #[test]
    fn the_painter_runs_on_every_page() {
        let fonts = Arena::new();
        let painter: PagePainter = Box::new(|page: &mut Page| {
            page.add_rect(RectLayout {
                rect: Rect::from_top_left(Pt(0.0), page.height(), Pt(10.0), page.height()),
                fill: Some(colours::NAVY_900),
                stroke: None,
            });
        });
        let mut ctx = FlowContext::with_page_painter(&fonts, A4, margins(), painter);
        ctx.add_page();
        ctx.add_page();
        let laid_out = ctx.finish();
        assert_eq!(laid_out.pages.len(), 3);
        assert!(laid_out.pages.iter().all(|page| page.rects().count() == 1));
    }

    #[test]
    fn bookmarks_remember_page_and_position() {
        let fonts = Arena::new();
        let mut ctx = FlowContext::new(&fonts, A4, margins());
        ctx.move_cursor(Pt(100.0));
        ctx.add_page();
        ctx.move_cursor(Pt(10.0));
        ctx.bookmark("Experience");
        let laid_out = ctx.finish();
        assert_eq!(laid_out.bookmarks.len(), 1);
        assert_eq!(laid_out.bookmarks[0].page_index, 1);
        assert!((laid_out.bookmarks[0].top.0 - (A4.1 .0 - 60.0)).abs() < 1e-3);
    }
}
