//! Render - the boundary between derived page views and a rasterizer
//!
//! This crate provides:
//! - The [`PageSurface`] trait an external rasterizer implements
//! - The export driver, which snapshots a document's page views and
//!   drives a surface page by page
//! - A deterministic plain-text surface for tests and previews
//!
//! # Example
//!
//! ```
//! use doc_core::{DocumentKind, DocumentState};
//! use render::{export, TextSurface};
//! use chrono::NaiveDate;
//!
//! let doc = DocumentState::new(
//!     DocumentKind::Receipt,
//!     "DOC-000042",
//!     NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
//! );
//! let mut surface = TextSurface::new();
//! let output = export(&doc, &mut surface).unwrap();
//! assert_eq!(output.file_name, "RECEIPT_DOC-000042.pdf");
//! ```

mod export;
mod surface;
mod text;

pub use export::{export, ExportOutput};
pub use surface::PageSurface;
pub use text::TextSurface;

use thiserror::Error;

/// Errors that can occur while rendering or exporting
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("export failed: {0}")]
    ExportError(String),
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
