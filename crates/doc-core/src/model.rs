//! Document state types

use crate::stamp::{StampImage, StampPosition};
use crate::{DocError, Result};
use chrono::NaiveDate;
use korean_text::{format_biz_no, format_phone_number};
use serde::{Deserialize, Serialize};

/// Kind of business document being produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Estimate,
    TransactionStatement,
    Receipt,
}

impl DocumentKind {
    /// Printed first-page title
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Estimate => "견 적 서",
            DocumentKind::TransactionStatement => "거래명세서",
            DocumentKind::Receipt => "영 수 증",
        }
    }

    /// Stable identifier used in filenames and continuation headers
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Estimate => "ESTIMATE",
            DocumentKind::TransactionStatement => "TRANSACTION_STATEMENT",
            DocumentKind::Receipt => "RECEIPT",
        }
    }
}

/// Whether entered unit prices already contain the 10% value-added tax
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaxMode {
    /// Prices contain the tax; totals back out the supply value
    #[serde(rename = "VAT_INCLUDED")]
    Inclusive,

    /// Prices are pre-tax; totals add 10% on top
    #[default]
    #[serde(rename = "VAT_EXCLUDED")]
    Exclusive,
}

/// Supplier business identity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BizInfo {
    #[serde(rename = "bizNo")]
    pub biz_no: String,
    pub name: String,
    pub owner: String,
    pub address: String,
    #[serde(rename = "bizType")]
    pub biz_type: String,
    #[serde(rename = "bizItem")]
    pub biz_item: String,
    pub contact: String,
}

/// Client identity (partial record)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientInfo {
    #[serde(rename = "bizNo")]
    pub biz_no: String,
    pub name: String,
    pub owner: String,
}

/// Opaque stable line item identifier, unique for the document's lifetime
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of a document: name, spec, quantity, unit price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub spec: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: u64,
}

impl LineItem {
    fn blank(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            spec: String::new(),
            quantity: 0,
            unit_price: 0,
        }
    }

    /// Line amount: quantity x unit price
    pub fn amount(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }

    /// Set the quantity from raw user text, coercing malformed input to 0
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.quantity = raw.trim().parse().unwrap_or(0);
    }

    /// Set the unit price from raw user text, coercing malformed input to 0
    pub fn set_unit_price_input(&mut self, raw: &str) {
        self.unit_price = raw.trim().parse().unwrap_or(0);
    }
}

/// Default stamp position as percentages of the first page box
const DEFAULT_STAMP_POS: StampPosition = StampPosition { x: 74.0, y: 19.0 };

/// Default rendered stamp square size in pixels
const DEFAULT_STAMP_SCALE: u32 = 60;

/// The complete mutable state of one document
///
/// All derived output (totals, page chunks, view models) is recomputed
/// from this record on every change; nothing derived is stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentState {
    #[serde(rename = "type")]
    pub kind: DocumentKind,

    #[serde(rename = "docNo")]
    pub doc_no: String,

    #[serde(rename = "date")]
    pub issue_date: NaiveDate,

    pub supplier: BizInfo,

    pub client: ClientInfo,

    pub items: Vec<LineItem>,

    #[serde(rename = "taxOption")]
    pub tax_mode: TaxMode,

    #[serde(rename = "stamp")]
    pub stamp_image: Option<StampImage>,

    #[serde(rename = "stampPos")]
    pub stamp_position: StampPosition,

    #[serde(rename = "stampSize")]
    pub stamp_scale: u32,

    #[serde(skip)]
    next_item_id: u64,
}

impl DocumentState {
    /// Create a document with one blank line item
    pub fn new(kind: DocumentKind, doc_no: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            kind,
            doc_no: doc_no.into(),
            issue_date,
            supplier: BizInfo::default(),
            client: ClientInfo::default(),
            items: vec![LineItem::blank(ItemId(1))],
            tax_mode: TaxMode::default(),
            stamp_image: None,
            stamp_position: DEFAULT_STAMP_POS,
            stamp_scale: DEFAULT_STAMP_SCALE,
            next_item_id: 2,
        }
    }

    /// Append a blank line item and return its id
    pub fn add_item(&mut self) -> ItemId {
        // Re-seed the counter after deserialization, where it resets to 0
        let max_seen = self.items.iter().map(|i| i.id.0).max().unwrap_or(0);
        self.next_item_id = self.next_item_id.max(max_seen + 1);

        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        self.items.push(LineItem::blank(id));
        id
    }

    /// Remove the line item with the given id
    pub fn remove_item(&mut self, id: ItemId) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Err(DocError::ItemNotFound(id));
        }
        Ok(())
    }

    /// Mutable access to a line item for in-place field edits
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Set the supplier contact, applying the phone number mask
    pub fn set_supplier_contact(&mut self, raw: &str) {
        self.supplier.contact = format_phone_number(raw);
    }

    /// Set the supplier registration number, applying the mask
    pub fn set_supplier_biz_no(&mut self, raw: &str) {
        self.supplier.biz_no = format_biz_no(raw);
    }

    /// Set the client registration number, applying the mask
    pub fn set_client_biz_no(&mut self, raw: &str) {
        self.client.biz_no = format_biz_no(raw);
    }

    /// Move the stamp, clamping both coordinates to [0, 100]
    pub fn set_stamp_position(&mut self, x: f64, y: f64) {
        self.stamp_position = StampPosition { x, y }.clamped();
    }

    /// Attach a stamp image from uploaded bytes
    pub fn set_stamp(&mut self, bytes: Vec<u8>) -> Result<()> {
        self.stamp_image = Some(StampImage::from_bytes(bytes)?);
        Ok(())
    }

    /// Remove the stamp image, keeping position and scale
    pub fn clear_stamp(&mut self) {
        self.stamp_image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> DocumentState {
        DocumentState::new(
            DocumentKind::Estimate,
            "DOC-123456",
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        )
    }

    #[test]
    fn test_new_document_has_one_blank_item() {
        let doc = doc();
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].quantity, 0);
        assert_eq!(doc.items[0].unit_price, 0);
        assert_eq!(doc.tax_mode, TaxMode::Exclusive);
    }

    #[test]
    fn test_item_ids_unique_across_removals() {
        let mut doc = doc();
        let a = doc.add_item();
        doc.remove_item(a).unwrap();
        let b = doc.add_item();
        assert_ne!(a, b);

        let mut ids: Vec<_> = doc.items.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), doc.items.len());
    }

    #[test]
    fn test_remove_unknown_item() {
        let mut doc = doc();
        assert!(matches!(
            doc.remove_item(ItemId(999)),
            Err(DocError::ItemNotFound(ItemId(999)))
        ));
    }

    #[test]
    fn test_items_may_become_empty() {
        let mut doc = doc();
        let id = doc.items[0].id;
        doc.remove_item(id).unwrap();
        assert!(doc.items.is_empty());
    }

    #[test]
    fn test_malformed_numeric_input_coerced_to_zero() {
        let mut doc = doc();
        let id = doc.items[0].id;
        let item = doc.item_mut(id).unwrap();
        item.set_quantity_input("abc");
        item.set_unit_price_input("12.5");
        assert_eq!(item.quantity, 0);
        assert_eq!(item.unit_price, 0);

        item.set_quantity_input(" 7 ");
        item.set_unit_price_input("1500");
        assert_eq!(item.quantity, 7);
        assert_eq!(item.unit_price, 1500);
        assert_eq!(item.amount(), 10_500);
    }

    #[test]
    fn test_edit_boundary_masks() {
        let mut doc = doc();
        doc.set_supplier_contact("01012345678");
        doc.set_supplier_biz_no("1234567890");
        doc.set_client_biz_no("123456");
        assert_eq!(doc.supplier.contact, "010-1234-5678");
        assert_eq!(doc.supplier.biz_no, "123-45-67890");
        assert_eq!(doc.client.biz_no, "123-45-6");
    }

    #[test]
    fn test_stamp_position_clamped() {
        let mut doc = doc();
        doc.set_stamp_position(120.0, -5.0);
        assert_eq!(doc.stamp_position.x, 100.0);
        assert_eq!(doc.stamp_position.y, 0.0);
    }

    #[test]
    fn test_tax_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaxMode::Inclusive).unwrap(),
            "\"VAT_INCLUDED\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentKind::TransactionStatement).unwrap(),
            "\"TRANSACTION_STATEMENT\""
        );
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut doc = doc();
        doc.add_item();
        let json = serde_json::to_string(&doc).unwrap();
        let back: DocumentState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items, doc.items);
        assert_eq!(back.doc_no, doc.doc_no);

        // The id counter re-seeds past existing ids after deserialization
        let mut back = back;
        let id = back.add_item();
        assert!(back.items.iter().filter(|i| i.id == id).count() == 1);
        assert!(id.0 > 2);
    }
}
