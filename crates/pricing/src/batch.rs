//! Batch runner: the engine applied row-wise over a feature table.
//!
//! Rows are independent: no cross-row state, no ordering dependence between
//! rows, and the input is never mutated. That makes the runner trivially
//! parallelizable; this implementation stays sequential and order-preserving
//! so reports reproduce byte-for-byte. Rolling or running computations belong
//! upstream in feature engineering, never here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use reprice_core::{DomainError, DomainResult, SkuId};

use crate::engine::decide;
use crate::item::LineItem;
use crate::policy::PricingPolicy;

/// One raw row of the scored feature table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemRow {
    pub sku_id: String,
    pub date: NaiveDate,
    pub price: f64,
    pub cost: f64,
    pub competitor_price: f64,
    /// Absent for SKUs with insufficient history.
    #[serde(default)]
    pub rolling_mean_7: Option<f64>,
    pub predicted_demand: f64,
}

/// Output row: the input columns plus the two decision columns, with the
/// price rounded to currency precision for persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedRow {
    #[serde(flatten)]
    pub row: LineItemRow,
    pub adjustment: f64,
    pub optimized_price: f64,
}

/// A row the runner rejected, with enough context to flag it upstream.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {index} (sku {sku_id}): {source}")]
pub struct RowError {
    pub index: usize,
    pub sku_id: String,
    #[source]
    pub source: DomainError,
}

pub type RowOutcome = Result<PricedRow, RowError>;

/// Price every row of a table.
///
/// Output length always equals input length and row order is preserved; the
/// engine never filters. A precondition failure is isolated to its row —
/// the remaining rows are still processed.
pub fn price_rows(policy: &PricingPolicy, rows: &[LineItemRow]) -> Vec<RowOutcome> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            price_row(policy, row).map_err(|source| RowError {
                index,
                sku_id: row.sku_id.clone(),
                source,
            })
        })
        .collect()
}

/// Price a single table row.
fn price_row(policy: &PricingPolicy, row: &LineItemRow) -> DomainResult<PricedRow> {
    let sku_id = SkuId::new(row.sku_id.as_str())?;
    let item = LineItem::new(
        sku_id,
        row.price,
        row.cost,
        row.competitor_price,
        row.rolling_mean_7,
        row.predicted_demand,
    )?;

    let priced = decide(policy, item);

    Ok(PricedRow {
        row: row.clone(),
        adjustment: priced.adjustment(),
        optimized_price: priced.rounded_price(),
    })
}
