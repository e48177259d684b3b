//! Plain-text rendering surface
//!
//! Stands in for the external rasterizer in tests and previews: one text
//! block per page, deterministic for a given page view sequence.

use crate::surface::PageSurface;
use crate::{RenderError, Result};
use doc_core::PageView;
use korean_text::format_number;
use std::fmt::Write;

/// Renders page views into a UTF-8 text document
#[derive(Debug, Default)]
pub struct TextSurface {
    pages: Vec<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages rendered so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageSurface for TextSurface {
    fn render_page(&mut self, page: &PageView) -> Result<()> {
        let text =
            render_page_text(page).map_err(|e| RenderError::SurfaceError(e.to_string()))?;
        self.pages.push(text);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let joined = self.pages.join("\u{c}\n"); // form feed between pages
        Ok(joined.into_bytes())
    }
}

fn render_page_text(page: &PageView) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    let rule = "=".repeat(64);

    writeln!(out, "{rule}")?;
    writeln!(out, "{}", page.title)?;
    writeln!(out, "{rule}")?;

    if let Some(header) = &page.header {
        writeln!(out, "작성일자: {}    문서번호: {}", header.issue_date, header.doc_no)?;
        writeln!(out, "{} 귀하", header.client.name)?;
        writeln!(
            out,
            "공급자: {} ({}) / 대표 {} (인)",
            header.supplier.name, header.supplier.biz_no, header.supplier.owner
        )?;
        writeln!(out, "주소: {}", header.supplier.address)?;
        writeln!(
            out,
            "업태: {} / 종목: {} / 연락처: {}",
            header.supplier.biz_type, header.supplier.biz_item, header.supplier.contact
        )?;
        writeln!(
            out,
            "합계금액: ({}) W {}",
            header.amount_words,
            format_number(header.total)
        )?;
    } else {
        writeln!(out, "페이지 {} / {}", page.page_index + 1, page.page_count)?;
    }

    if let Some(stamp) = &page.stamp {
        let (w, h) = stamp.image.dimensions();
        writeln!(
            out,
            "[인감 {}x{} @ {:.1}%, {:.1}% / {}px]",
            w, h, stamp.position.x, stamp.position.y, stamp.size_px
        )?;
    }

    writeln!(out, "{:-<64}", "")?;
    writeln!(out, "{:>4} | {:<20} | {:<8} | 수량 | 단가 | 공급가액", "NO", "품목명", "규격")?;
    for row in &page.rows {
        writeln!(
            out,
            "{:>4} | {:<20} | {:<8} | {} | {} | {}",
            row.row_no,
            row.name,
            row.spec,
            row.quantity,
            format_number(row.unit_price),
            format_number(row.amount)
        )?;
    }
    for _ in 0..page.filler_rows {
        writeln!(out, "{:>4} | {:<20} | {:<8} |  |  | ", "", "", "")?;
    }
    writeln!(out, "{:-<64}", "")?;

    if let Some(footer) = &page.footer {
        writeln!(out, "소 계: {}", format_number(footer.totals.sub_total))?;
        writeln!(out, "부 가 세 (10%): {}", format_number(footer.totals.tax))?;
        writeln!(out, "합 계 (TOTAL): W {}", format_number(footer.totals.total))?;
        writeln!(out, "({})", footer.amount_words)?;
        writeln!(out, "[참고사항]")?;
        for note in &footer.notes {
            writeln!(out, "- {note}")?;
        }
    }

    writeln!(out, "- {} -", page.page_index + 1)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::export;
    use chrono::NaiveDate;
    use doc_core::{DocumentKind, DocumentState, TaxMode};

    fn statement(n_items: usize) -> DocumentState {
        let mut doc = DocumentState::new(
            DocumentKind::TransactionStatement,
            "DOC-202608",
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        );
        doc.supplier.name = "한빛상사".to_string();
        doc.set_supplier_biz_no("1234567890");
        doc.client.name = "거래처".to_string();
        doc.items.clear();
        for i in 0..n_items {
            let id = doc.add_item();
            let item = doc.item_mut(id).unwrap();
            item.name = format!("품목 {}", i + 1);
            item.quantity = 1;
            item.unit_price = 10_000;
        }
        doc
    }

    #[test]
    fn test_single_page_text() {
        let doc = statement(2);
        let mut surface = TextSurface::new();
        let output = export(&doc, &mut surface).unwrap();

        assert_eq!(surface.page_count(), 1);
        assert_eq!(output.file_name, "TRANSACTION_STATEMENT_DOC-202608.pdf");

        let text = String::from_utf8(output.bytes).unwrap();
        assert!(text.contains("거래명세서"));
        assert!(text.contains("거래처 귀하"));
        assert!(text.contains("123-45-67890"));
        assert!(text.contains("일금 이만이천원정"));
        assert!(text.contains("합 계 (TOTAL): W 22,000"));
    }

    #[test]
    fn test_multi_page_text_layout() {
        let doc = statement(25);
        let mut surface = TextSurface::new();
        let output = export(&doc, &mut surface).unwrap();
        let text = String::from_utf8(output.bytes).unwrap();

        let pages: Vec<&str> = text.split('\u{c}').collect();
        assert_eq!(pages.len(), 2);

        // Continuation header on page 2, totals only there
        assert!(pages[1].contains("TRANSACTION_STATEMENT (계속)"));
        assert!(pages[1].contains("페이지 2 / 2"));
        assert!(!pages[0].contains("소 계:"));
        assert!(pages[1].contains("소 계: 250,000"));

        // Row numbering continues across the page break
        assert!(pages[0].contains("  10 |"));
        assert!(pages[1].contains("  11 |"));
    }

    #[test]
    fn test_filler_rows_pad_to_capacity() {
        let doc = statement(3);
        let mut surface = TextSurface::new();
        let output = export(&doc, &mut surface).unwrap();
        let text = String::from_utf8(output.bytes).unwrap();

        // 3 item rows + 7 filler rows on the single page
        let data_rows = text.lines().filter(|l| l.contains("품목 ")).count();
        assert_eq!(data_rows, 3);
        let filler_rows = text
            .lines()
            .filter(|l| l.trim_start().starts_with("|"))
            .count();
        assert_eq!(filler_rows, 7);
    }

    #[test]
    fn test_inclusive_note_in_output() {
        let mut doc = statement(1);
        doc.tax_mode = TaxMode::Inclusive;
        let mut surface = TextSurface::new();
        let output = export(&doc, &mut surface).unwrap();
        let text = String::from_utf8(output.bytes).unwrap();
        assert!(text.contains("포함되어 있습니다"));
    }
}
