//! Scroll position of the result list.

/// Offset of the first visible result row.
///
/// The engine does not know the viewport height until the UI reports it, so
/// the offset is clamped lazily against the last reported height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultScroll {
    offset: usize,
    viewport_rows: usize,
}

impl Default for ResultScroll {
    fn default() -> Self {
        Self {
            offset: 0,
            viewport_rows: 1,
        }
    }
}

impl ResultScroll {
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub(crate) fn set_viewport_rows(&mut self, rows: usize, total: usize) {
        self.viewport_rows = rows.max(1);
        self.clamp(total);
    }

    pub(crate) fn reset(&mut self) {
        self.offset = 0;
    }

    pub(crate) fn up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub(crate) fn down(&mut self, rows: usize, total: usize) {
        self.offset = self.offset.saturating_add(rows);
        self.clamp(total);
    }

    pub(crate) fn to_bottom(&mut self, total: usize) {
        self.offset = Self::max_offset(self.viewport_rows, total);
    }

    fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(Self::max_offset(self.viewport_rows, total));
    }

    fn max_offset(viewport_rows: usize, total: usize) -> usize {
        total.saturating_sub(viewport_rows)
    }
}
