//! Feature vector handed to demand estimators.
//!
//! The serving path and the batch path must feed models the exact feature set
//! the models were trained on, so the derived features (`price_margin`,
//! `price_vs_competitor`) are computed here, once, instead of per call-site.

use serde::{Deserialize, Serialize};

use crate::estimator::ForecastError;

/// Raw per-item inputs, as supplied by callers (API request, feature table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInputs {
    pub price: f64,
    pub cost: f64,
    pub promo_discount: f64,
    pub competitor_price: f64,
    pub temperature: f64,
    pub lag_1: f64,
    /// Trailing 7-period mean of units sold. `None` for a SKU with
    /// insufficient history.
    pub rolling_mean_7: Option<f64>,
    pub elasticity: f64,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u8,
    pub is_weekend: bool,
    /// 1..=12.
    pub month: u8,
}

/// Complete model input: raw features plus derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub price: f64,
    pub promo_discount: f64,
    pub competitor_price: f64,
    pub temperature: f64,
    pub price_margin: f64,
    pub price_vs_competitor: f64,
    pub lag_1: f64,
    pub rolling_mean_7: f64,
    pub elasticity: f64,
    pub day_of_week: f64,
    pub is_weekend: f64,
    pub month: f64,
}

impl FeatureVector {
    /// Every feature name a model artifact may reference, in training order.
    pub const NAMES: [&'static str; 12] = [
        "price",
        "promo_discount",
        "competitor_price",
        "temperature",
        "price_margin",
        "price_vs_competitor",
        "lag_1",
        "rolling_mean_7",
        "elasticity",
        "day_of_week",
        "is_weekend",
        "month",
    ];

    /// Derive the full feature vector from raw inputs.
    ///
    /// `price_margin = price - cost` and
    /// `price_vs_competitor = price / competitor_price`, matching the features
    /// the upstream training pipeline produces. A SKU without demand history
    /// contributes a zero `rolling_mean_7` feature.
    pub fn derive(inputs: &FeatureInputs) -> Result<Self, ForecastError> {
        for (name, value) in [
            ("price", inputs.price),
            ("cost", inputs.cost),
            ("promo_discount", inputs.promo_discount),
            ("competitor_price", inputs.competitor_price),
            ("temperature", inputs.temperature),
            ("lag_1", inputs.lag_1),
            ("elasticity", inputs.elasticity),
        ] {
            if !value.is_finite() {
                return Err(ForecastError::InvalidInput(format!(
                    "{name} must be finite (got {value})"
                )));
            }
        }

        if inputs.competitor_price == 0.0 {
            return Err(ForecastError::InvalidInput(
                "competitor_price cannot be zero".to_string(),
            ));
        }

        if inputs.day_of_week > 6 {
            return Err(ForecastError::InvalidInput(format!(
                "day_of_week must be in 0..=6 (got {})",
                inputs.day_of_week
            )));
        }

        if !(1..=12).contains(&inputs.month) {
            return Err(ForecastError::InvalidInput(format!(
                "month must be in 1..=12 (got {})",
                inputs.month
            )));
        }

        Ok(Self {
            price: inputs.price,
            promo_discount: inputs.promo_discount,
            competitor_price: inputs.competitor_price,
            temperature: inputs.temperature,
            price_margin: inputs.price - inputs.cost,
            price_vs_competitor: inputs.price / inputs.competitor_price,
            lag_1: inputs.lag_1,
            rolling_mean_7: inputs.rolling_mean_7.unwrap_or(0.0),
            elasticity: inputs.elasticity,
            day_of_week: f64::from(inputs.day_of_week),
            is_weekend: if inputs.is_weekend { 1.0 } else { 0.0 },
            month: f64::from(inputs.month),
        })
    }

    /// Look a feature up by its training-time name.
    pub fn value(&self, name: &str) -> Option<f64> {
        match name {
            "price" => Some(self.price),
            "promo_discount" => Some(self.promo_discount),
            "competitor_price" => Some(self.competitor_price),
            "temperature" => Some(self.temperature),
            "price_margin" => Some(self.price_margin),
            "price_vs_competitor" => Some(self.price_vs_competitor),
            "lag_1" => Some(self.lag_1),
            "rolling_mean_7" => Some(self.rolling_mean_7),
            "elasticity" => Some(self.elasticity),
            "day_of_week" => Some(self.day_of_week),
            "is_weekend" => Some(self.is_weekend),
            "month" => Some(self.month),
            _ => None,
        }
    }
}
