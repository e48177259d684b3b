//! Page view-model assembly for the rendering surface

use crate::model::{BizInfo, ClientInfo, DocumentState, TaxMode};
use crate::paginate::paginate;
use crate::stamp::{StampImage, StampPosition};
use crate::totals::{calculate_totals, Totals};
use chrono::NaiveDate;
use korean_text::format_korean_amount;
use serde::Serialize;

/// Physical page width (ISO A4 portrait)
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// Physical page height (ISO A4 portrait)
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Inner margin on all four sides
pub const PAGE_MARGIN_MM: f64 = 12.0;

/// One computed item row
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowView {
    /// Global 1-based row number
    #[serde(rename = "no")]
    pub row_no: usize,
    pub name: String,
    pub spec: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: u64,
    /// quantity x unit price
    pub amount: u64,
}

/// Stamp overlay, rendered on the first page only
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StampOverlay {
    pub image: StampImage,
    /// Center anchor, percent of page width/height
    pub position: StampPosition,
    /// Rendered square size in pixels
    #[serde(rename = "sizePx")]
    pub size_px: u32,
}

/// Header block rendered on the first page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FirstPageHeader {
    pub title: String,
    #[serde(rename = "docNo")]
    pub doc_no: String,
    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,
    pub supplier: BizInfo,
    pub client: ClientInfo,
    #[serde(rename = "taxMode")]
    pub tax_mode: TaxMode,
    /// Grand total shown in the 합계금액 banner
    pub total: u64,
    /// Formal Korean phrase for the grand total
    #[serde(rename = "amountWords")]
    pub amount_words: String,
}

/// Totals footer and reference notes, rendered on the last page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TotalsFooter {
    pub totals: Totals,
    #[serde(rename = "amountWords")]
    pub amount_words: String,
    pub notes: Vec<String>,
}

/// Everything one rendering surface needs to draw a single page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageView {
    #[serde(rename = "pageIndex")]
    pub page_index: usize,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
    #[serde(rename = "isFirst")]
    pub is_first: bool,
    #[serde(rename = "isLast")]
    pub is_last: bool,
    /// First-page document title or continuation label
    pub title: String,
    pub rows: Vec<RowView>,
    /// Blank rows to pad the table to capacity
    #[serde(rename = "fillerRows")]
    pub filler_rows: usize,
    /// Present on the first page only
    pub header: Option<FirstPageHeader>,
    /// Present on the last page only
    pub footer: Option<TotalsFooter>,
    /// Present on the first page only, when a stamp is attached
    pub stamp: Option<StampOverlay>,
}

/// Derive the full page sequence from a document snapshot
///
/// Pure derivation: call again after any state change to get fresh views.
pub fn build_pages(doc: &DocumentState) -> Vec<PageView> {
    let totals = calculate_totals(&doc.items, doc.tax_mode);
    let amount_words =
        format_korean_amount(i64::try_from(totals.total).unwrap_or(i64::MAX));
    let chunks = paginate(&doc.items);
    let page_count = chunks.len();

    chunks
        .iter()
        .map(|chunk| {
            let rows = chunk
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| RowView {
                    row_no: chunk.row_number(i),
                    name: item.name.clone(),
                    spec: item.spec.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    amount: item.amount(),
                })
                .collect();

            let title = if chunk.is_first {
                doc.kind.title().to_string()
            } else {
                format!("{} (계속)", doc.kind.as_str())
            };

            let header = chunk.is_first.then(|| FirstPageHeader {
                title: doc.kind.title().to_string(),
                doc_no: doc.doc_no.clone(),
                issue_date: doc.issue_date,
                supplier: doc.supplier.clone(),
                client: doc.client.clone(),
                tax_mode: doc.tax_mode,
                total: totals.total,
                amount_words: amount_words.clone(),
            });

            let footer = chunk.is_last.then(|| TotalsFooter {
                totals,
                amount_words: amount_words.clone(),
                notes: reference_notes(doc.tax_mode),
            });

            let stamp = if chunk.is_first {
                doc.stamp_image.as_ref().map(|image| StampOverlay {
                    image: image.clone(),
                    position: doc.stamp_position,
                    size_px: doc.stamp_scale,
                })
            } else {
                None
            };

            PageView {
                page_index: chunk.page_index,
                page_count,
                is_first: chunk.is_first,
                is_last: chunk.is_last,
                title,
                rows,
                filler_rows: chunk.filler_rows(),
                header,
                footer,
                stamp,
            }
        })
        .collect()
}

/// Reference notes printed under the totals table on the last page
fn reference_notes(tax_mode: TaxMode) -> Vec<String> {
    let tax_note = match tax_mode {
        TaxMode::Inclusive => "위 금액에는 부가가치세가 포함되어 있습니다.",
        TaxMode::Exclusive => "위 금액에는 부가가치세가 별도로 부과됩니다.",
    };
    vec![
        "본 문서는 법적 효력을 보장하지 않으며 거래 증빙용으로 활용하십시오.".to_string(),
        tax_note.to_string(),
        "입금계좌: ________________________________________".to_string(),
    ]
}

/// Output filename for the exported document
///
/// Observable convention: `{documentKind}_{documentNumber}.pdf`.
pub fn export_file_name(doc: &DocumentState) -> String {
    format!("{}_{}.pdf", doc.kind.as_str(), doc.doc_no)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentKind;

    fn doc_with_items(n: usize) -> DocumentState {
        let mut doc = DocumentState::new(
            DocumentKind::Estimate,
            "DOC-778899",
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        );
        doc.items.clear();
        for i in 0..n {
            let id = doc.add_item();
            let item = doc.item_mut(id).unwrap();
            item.name = format!("품목 {}", i + 1);
            item.quantity = 2;
            item.unit_price = 5_000;
        }
        doc
    }

    #[test]
    fn test_single_page_views() {
        let doc = doc_with_items(3);
        let pages = build_pages(&doc);
        assert_eq!(pages.len(), 1);

        let page = &pages[0];
        assert!(page.is_first && page.is_last);
        assert_eq!(page.title, "견 적 서");
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.filler_rows, 7);
        assert!(page.header.is_some());
        assert!(page.footer.is_some());
        assert!(page.stamp.is_none());
    }

    #[test]
    fn test_header_and_footer_placement_across_pages() {
        let doc = doc_with_items(25);
        let pages = build_pages(&doc);
        assert_eq!(pages.len(), 2);

        assert!(pages[0].header.is_some());
        assert!(pages[0].footer.is_none());
        assert!(pages[1].header.is_none());
        assert!(pages[1].footer.is_some());
        assert_eq!(pages[1].title, "ESTIMATE (계속)");
        assert_eq!(pages[1].page_count, 2);
        assert_eq!(pages[1].rows[0].row_no, 11);
    }

    #[test]
    fn test_footer_totals_and_phrase() {
        let doc = doc_with_items(25); // 25 * 2 * 5000 = 250,000
        let pages = build_pages(&doc);
        let footer = pages[1].footer.as_ref().unwrap();
        assert_eq!(footer.totals.sub_total, 250_000);
        assert_eq!(footer.totals.tax, 25_000);
        assert_eq!(footer.totals.total, 275_000);
        assert_eq!(footer.amount_words, "일금 이십칠만오천원정");
        assert_eq!(footer.notes.len(), 3);
        assert!(footer.notes[1].contains("별도"));
    }

    #[test]
    fn test_inclusive_mode_note() {
        let mut doc = doc_with_items(1);
        doc.tax_mode = TaxMode::Inclusive;
        let pages = build_pages(&doc);
        let footer = pages[0].footer.as_ref().unwrap();
        assert!(footer.notes[1].contains("포함"));
    }

    #[test]
    fn test_empty_document_renders_one_empty_page() {
        let doc = doc_with_items(0);
        let pages = build_pages(&doc);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].rows.is_empty());
        assert_eq!(pages[0].filler_rows, 10);
        let footer = pages[0].footer.as_ref().unwrap();
        assert_eq!(footer.totals.total, 0);
        assert_eq!(footer.amount_words, "영");
    }

    #[test]
    fn test_export_file_name() {
        let mut doc = doc_with_items(1);
        assert_eq!(export_file_name(&doc), "ESTIMATE_DOC-778899.pdf");
        doc.kind = DocumentKind::Receipt;
        assert_eq!(export_file_name(&doc), "RECEIPT_DOC-778899.pdf");
    }

    #[test]
    fn test_page_format_constants() {
        assert_eq!(PAGE_WIDTH_MM, 210.0);
        assert_eq!(PAGE_HEIGHT_MM, 297.0);
        assert_eq!(PAGE_MARGIN_MM, 12.0);
    }
}
