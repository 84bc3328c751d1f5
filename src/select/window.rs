//! Incremental ("infinite scroll") paging of the filtered options.
//!
//! Unlike a classic paginator that shows one page at a time, the displayed
//! window always starts at the first filtered option and grows by one page
//! per `load_more`. The window only stores how many pages are loaded; its
//! length is derived from the current filtered length, so it can never run
//! past the end of the list.

/// Fraction of the visible height, measured from the bottom, that counts as
/// "reached the end" when scrolling.
pub const LOAD_MORE_THRESHOLD: f64 = 0.05;

/// The growing prefix of the filtered list that is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    page_size: usize,
    pages: usize,
}

impl Window {
    /// Creates a window showing the first page. `page_size` is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages: 1,
        }
    }

    /// Number of options per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages currently loaded (at least one).
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Shrinks the window back to the first page.
    pub fn reset(&mut self) {
        self.pages = 1;
    }

    /// Window length for a filtered list of `total` options.
    pub fn len(&self, total: usize) -> usize {
        self.page_size.saturating_mul(self.pages).min(total)
    }

    /// Whether the window already covers all `total` options.
    pub fn covers(&self, total: usize) -> bool {
        self.len(total) >= total
    }

    /// Grows the window by one page. Returns false, leaving the window
    /// unchanged, when it already covers all `total` options.
    pub fn load_more(&mut self, total: usize) -> bool {
        if self.covers(total) {
            return false;
        }
        self.pages += 1;
        true
    }
}

/// Scroll position of the rendered option panel, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// First visible row.
    pub offset: usize,
    /// Rows that fit in the panel.
    pub visible: usize,
    /// Total rows of content.
    pub content: usize,
}

impl ScrollMetrics {
    /// True once the bottom of the panel is within the trailing threshold of
    /// the end of the content.
    ///
    /// ```rust
    /// use bubbletea_select::select::ScrollMetrics;
    ///
    /// let far = ScrollMetrics { offset: 0, visible: 10, content: 40 };
    /// let near = ScrollMetrics { offset: 30, visible: 10, content: 40 };
    /// assert!(!far.near_end());
    /// assert!(near.near_end());
    /// ```
    pub fn near_end(&self) -> bool {
        let bottom = self.offset.saturating_add(self.visible) as f64;
        let buffer = self.visible as f64 * LOAD_MORE_THRESHOLD;
        bottom >= self.content as f64 - buffer
    }
}
