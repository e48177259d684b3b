//! Doc Core - business document model and layout derivation
//!
//! This crate provides:
//! - The mutable document state (estimate / transaction statement / receipt)
//! - Totals derivation under tax-inclusive and tax-exclusive conventions
//! - Fixed-capacity pagination with asymmetric first/continuation pages
//! - Page view-model assembly for an external rendering surface
//! - Stamp image handling with a drag-to-position state machine
//!
//! # Example
//!
//! ```
//! use doc_core::{build_pages, DocumentKind, DocumentState, TaxMode};
//! use chrono::NaiveDate;
//!
//! let mut doc = DocumentState::new(
//!     DocumentKind::Estimate,
//!     "DOC-000001",
//!     NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
//! );
//! let id = doc.items[0].id;
//! doc.item_mut(id).unwrap().quantity = 3;
//! doc.item_mut(id).unwrap().unit_price = 10_000;
//!
//! let pages = build_pages(&doc);
//! assert_eq!(pages.len(), 1);
//! ```

mod model;
mod paginate;
mod stamp;
mod totals;
mod view;

pub use model::{
    BizInfo, ClientInfo, DocumentKind, DocumentState, ItemId, LineItem, TaxMode,
};
pub use paginate::{paginate, PageChunk, CONTINUATION_PAGE_ROWS, FIRST_PAGE_ROWS};
pub use stamp::{StampDrag, StampImage, StampPosition};
pub use totals::{calculate_totals, Totals};
pub use view::{
    build_pages, export_file_name, FirstPageHeader, PageView, RowView, StampOverlay,
    TotalsFooter, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM,
};

use thiserror::Error;

/// Errors that can occur while mutating a document
#[derive(Debug, Error)]
pub enum DocError {
    #[error("no line item with id {0}")]
    ItemNotFound(ItemId),

    #[error("failed to decode stamp image: {0}")]
    StampDecodeError(String),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocError>;
