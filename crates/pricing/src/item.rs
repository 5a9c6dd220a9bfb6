//! Line items: the engine's input and output records.

use reprice_core::{DomainError, DomainResult, SkuId};

use crate::engine::{DemandLevel, round_to_cents};

/// One SKU's commercial state at one evaluation instant.
///
/// Construction enforces the engine's preconditions (`price`, `cost` and
/// `competitor_price` positive and finite); violation is a caller error, never
/// silently corrected downstream. The item is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    sku_id: SkuId,
    price: f64,
    cost: f64,
    competitor_price: f64,
    rolling_mean_7: Option<f64>,
    predicted_demand: f64,
}

impl LineItem {
    /// Build a validated line item.
    ///
    /// `rolling_mean_7` is `None` for a SKU with insufficient history.
    /// `predicted_demand` is accepted as-is: the estimator is not clamped at
    /// this boundary, so negative, zero and non-finite values are all legal
    /// inputs the engine must handle.
    pub fn new(
        sku_id: SkuId,
        price: f64,
        cost: f64,
        competitor_price: f64,
        rolling_mean_7: Option<f64>,
        predicted_demand: f64,
    ) -> DomainResult<Self> {
        for (name, value) in [
            ("price", price),
            ("cost", cost),
            ("competitor_price", competitor_price),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DomainError::validation(format!(
                    "{name} must be positive and finite (got {value})"
                )));
            }
        }

        Ok(Self {
            sku_id,
            price,
            cost,
            competitor_price,
            rolling_mean_7,
            predicted_demand,
        })
    }

    pub fn sku_id(&self) -> &SkuId {
        &self.sku_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn competitor_price(&self) -> f64 {
        self.competitor_price
    }

    pub fn rolling_mean_7(&self) -> Option<f64> {
        self.rolling_mean_7
    }

    pub fn predicted_demand(&self) -> f64 {
        self.predicted_demand
    }
}

/// Engine output: the input item plus the pricing decision.
///
/// `optimized_price` keeps full precision; currency rounding belongs to the
/// presentation boundary, see [`PricedLineItem::rounded_price`].
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLineItem {
    item: LineItem,
    demand: DemandLevel,
    adjustment: f64,
    optimized_price: f64,
    degenerate_market: bool,
}

impl PricedLineItem {
    pub(crate) fn new(
        item: LineItem,
        demand: DemandLevel,
        adjustment: f64,
        optimized_price: f64,
        degenerate_market: bool,
    ) -> Self {
        Self {
            item,
            demand,
            adjustment,
            optimized_price,
            degenerate_market,
        }
    }

    pub fn item(&self) -> &LineItem {
        &self.item
    }

    pub fn sku_id(&self) -> &SkuId {
        self.item.sku_id()
    }

    pub fn demand(&self) -> DemandLevel {
        self.demand
    }

    /// Signed fractional price change: exactly `-step`, `0.0` or `+step`.
    pub fn adjustment(&self) -> f64 {
        self.adjustment
    }

    /// Clamped price, full precision.
    pub fn optimized_price(&self) -> f64 {
        self.optimized_price
    }

    /// Clamped price rounded to currency precision (2 decimal digits).
    pub fn rounded_price(&self) -> f64 {
        round_to_cents(self.optimized_price)
    }

    /// True when the cost floor exceeds the competitor ceiling.
    ///
    /// Not an error (the ceiling wins, see [`crate::decide`]), but it signals
    /// inconsistent upstream data and is worth alerting on.
    pub fn market_is_degenerate(&self) -> bool {
        self.degenerate_market
    }
}
