//! Fixed-capacity pagination with asymmetric first/continuation pages

use crate::model::LineItem;

/// Item rows on the first page, which also carries the header block
pub const FIRST_PAGE_ROWS: usize = 10;

/// Item rows on every continuation page
pub const CONTINUATION_PAGE_ROWS: usize = 20;

/// The sub-sequence of line items assigned to one physical page
///
/// Derived from the item list and the two capacity constants; regenerated
/// on every state change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChunk<'a> {
    /// Zero-based page index
    pub page_index: usize,
    pub items: &'a [LineItem],
    pub is_first: bool,
    pub is_last: bool,
}

impl PageChunk<'_> {
    /// Row capacity of this page
    pub fn capacity(&self) -> usize {
        if self.is_first {
            FIRST_PAGE_ROWS
        } else {
            CONTINUATION_PAGE_ROWS
        }
    }

    /// Blank rows appended at render time so every page has uniform height
    ///
    /// Filler rows carry no data and are excluded from numbering and
    /// totals.
    pub fn filler_rows(&self) -> usize {
        self.capacity() - self.items.len()
    }

    /// Global 1-based row number of the item at `index` within this chunk
    pub fn row_number(&self, index: usize) -> usize {
        if self.page_index == 0 {
            index + 1
        } else {
            FIRST_PAGE_ROWS + (self.page_index - 1) * CONTINUATION_PAGE_ROWS + index + 1
        }
    }
}

/// Split items into page chunks
///
/// Chunk 0 is always present, even for an empty item list (an empty first
/// page still renders the header and totals layout). Content past the
/// first page's capacity flows into continuation chunks of
/// [`CONTINUATION_PAGE_ROWS`] each; the final chunk is flagged last.
pub fn paginate(items: &[LineItem]) -> Vec<PageChunk<'_>> {
    let mut chunks = Vec::new();
    let first_end = items.len().min(FIRST_PAGE_ROWS);
    chunks.push(PageChunk {
        page_index: 0,
        items: &items[..first_end],
        is_first: true,
        is_last: true,
    });

    let mut start = FIRST_PAGE_ROWS;
    while start < items.len() {
        let end = items.len().min(start + CONTINUATION_PAGE_ROWS);
        chunks.push(PageChunk {
            page_index: chunks.len(),
            items: &items[start..end],
            is_first: false,
            is_last: false,
        });
        start = end;
    }

    if let Some(last) = chunks.last_mut() {
        last.is_last = true;
    }
    if chunks.len() > 1 {
        chunks[0].is_last = false;
    }

    chunks
}
