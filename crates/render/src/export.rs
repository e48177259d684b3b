//! Export driver

use crate::surface::PageSurface;
use crate::Result;
use doc_core::{build_pages, export_file_name, DocumentState};

/// A finished export: the encoded document plus its conventional filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    /// `{documentKind}_{documentNumber}.pdf`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Export a document snapshot through a rendering surface
///
/// The page views are derived once up front and fed to the surface in
/// order, so a long-running surface sees a consistent snapshot even if
/// the caller's state changes afterwards. On failure the document state
/// is untouched and the export can simply be retried.
pub fn export<S: PageSurface>(doc: &DocumentState, surface: &mut S) -> Result<ExportOutput> {
    let pages = build_pages(doc);

    for page in &pages {
        surface.render_page(page)?;
    }

    let bytes = surface.finish()?;
    Ok(ExportOutput {
        file_name: export_file_name(doc),
        bytes,
    })
}
