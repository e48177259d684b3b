//! The rendering surface trait

use crate::Result;
use doc_core::PageView;

/// One physical output surface, fed page views in order
///
/// Implementations draw each A4 page at 1:1 scale (no distortion);
/// content past a page's fixed row capacity is never reflowed onto the
/// next page. The core treats the page views as a snapshot taken at
/// export start, so a surface must not expect the document to change
/// between calls.
pub trait PageSurface {
    /// Render one page view
    fn render_page(&mut self, page: &PageView) -> Result<()>;

    /// Finish the document and hand back the encoded bytes
    fn finish(&mut self) -> Result<Vec<u8>>;
}
