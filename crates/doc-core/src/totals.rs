//! Totals derivation under the two tax conventions

use crate::model::{LineItem, TaxMode};
use serde::{Deserialize, Serialize};

/// Derived monetary totals, always satisfying sub_total + tax == total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    #[serde(rename = "subTotal")]
    pub sub_total: u64,
    pub tax: u64,
    pub total: u64,
}

/// Derive totals from the item list and tax mode
///
/// Under [`TaxMode::Exclusive`] the 10% tax is added on top of the item
/// sum; under [`TaxMode::Inclusive`] the item sum is the final total and
/// the supply value is backed out. All arithmetic is integral with
/// round-half-up, so the three figures are exact and drift-free.
pub fn calculate_totals(items: &[LineItem], mode: TaxMode) -> Totals {
    let raw_sum: u64 = items.iter().map(LineItem::amount).sum();

    match mode {
        TaxMode::Exclusive => {
            let tax = (raw_sum + 5) / 10;
            Totals {
                sub_total: raw_sum,
                tax,
                total: raw_sum + tax,
            }
        }
        TaxMode::Inclusive => {
            // round(total / 1.1) as round(total * 10 / 11)
            let sub_total = (raw_sum * 20 + 11) / 22;
            Totals {
                sub_total,
                tax: raw_sum - sub_total,
                total: raw_sum,
            }
        }
    }
}
