//! Build a 25-item transaction statement and print the text rendering
//!
//! Run with: cargo run --example render_statement

use anyhow::Result;
use chrono::NaiveDate;
use doc_core::{DocumentKind, DocumentState, TaxMode};
use render::{export, TextSurface};

fn main() -> Result<()> {
    let mut doc = DocumentState::new(
        DocumentKind::TransactionStatement,
        "DOC-202608",
        NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid date"),
    );

    doc.supplier.name = "한빛상사".to_string();
    doc.supplier.owner = "김한빛".to_string();
    doc.supplier.address = "서울특별시 마포구 한빛로 12".to_string();
    doc.supplier.biz_type = "도소매".to_string();
    doc.supplier.biz_item = "사무용품".to_string();
    doc.set_supplier_biz_no("1234567890");
    doc.set_supplier_contact("01012345678");
    doc.client.name = "모두문구".to_string();
    doc.set_client_biz_no("9876543210");
    doc.tax_mode = TaxMode::Exclusive;

    doc.items.clear();
    for i in 0..25 {
        let id = doc.add_item();
        let item = doc.item_mut(id).expect("item just added");
        item.name = format!("A4 복사용지 {}묶음", i + 1);
        item.spec = "80g".to_string();
        item.quantity = 2;
        item.unit_price = 4_500;
    }

    let mut surface = TextSurface::new();
    let output = export(&doc, &mut surface)?;

    println!("{}", String::from_utf8(output.bytes)?);
    println!("저장 파일명: {}", output.file_name);
    Ok(())
}
