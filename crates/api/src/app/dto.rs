use serde::{Deserialize, Serialize};

/// "Price a line item" request: commercial attributes plus the feature
/// inputs the demand model expects. Calendar fields use the wire convention
/// of the upstream feature pipeline (`day_of_week` 0..=6, `is_weekend` 0/1,
/// `month` 1..=12).
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuoteRequest {
    pub sku_id: String,
    pub price: f64,
    pub cost: f64,
    pub promo_discount: f64,
    pub competitor_price: f64,
    pub temperature: f64,
    pub lag_1: f64,
    /// Absent for a SKU with insufficient history.
    #[serde(default)]
    pub rolling_mean_7: Option<f64>,
    pub elasticity: f64,
    pub day_of_week: u8,
    pub is_weekend: u8,
    pub month: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuoteResponse {
    pub sku_id: String,
    /// Raw demand estimate, rounded for presentation.
    pub predicted_demand: f64,
    /// Exactly `-step`, `0.0` or `+step`.
    pub adjustment: f64,
    /// Clamped price at currency precision.
    pub optimized_price: f64,
}
