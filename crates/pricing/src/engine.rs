//! The pricing decision function.
//!
//! Pure arithmetic over validated inputs: every call completes in a fixed
//! number of comparisons, holds no state, and is safe to invoke concurrently
//! from any number of threads.

use crate::item::{LineItem, PricedLineItem};
use crate::policy::PricingPolicy;

/// Demand classification relative to the rolling baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandLevel {
    High,
    Normal,
    Low,
}

/// Classify a demand estimate against the rolling baseline.
///
/// Comparisons are strict, so the band endpoints themselves classify as
/// normal. The fallbacks are explicit policy, not incidental float semantics:
///
/// - undefined baseline (new SKU) → normal;
/// - non-finite baseline or estimate → normal (fail safe: no price change).
pub fn classify_demand(
    policy: &PricingPolicy,
    predicted_demand: f64,
    rolling_mean_7: Option<f64>,
) -> DemandLevel {
    let Some(baseline) = rolling_mean_7 else {
        return DemandLevel::Normal;
    };

    if !baseline.is_finite() || !predicted_demand.is_finite() {
        return DemandLevel::Normal;
    }

    if predicted_demand > baseline * policy.high_band {
        DemandLevel::High
    } else if predicted_demand < baseline * policy.low_band {
        DemandLevel::Low
    } else {
        DemandLevel::Normal
    }
}

/// Decide the bounded price adjustment for one line item.
///
/// High demand bumps the price by `+step`, low demand cuts it by `-step`,
/// then the result is clamped: floor at `cost * margin_floor` first, ceiling
/// at `competitor_price * competitor_ceiling` second. The ordering means the
/// ceiling wins in a degenerate market (cost floor above competitor ceiling);
/// callers can detect that state via
/// [`PricedLineItem::market_is_degenerate`].
///
/// Total over all valid [`LineItem`]s: never panics for any real-valued
/// demand estimate or baseline. No rounding happens here; chain or re-evaluate
/// freely and round only at the presentation boundary.
pub fn decide(policy: &PricingPolicy, item: LineItem) -> PricedLineItem {
    let demand = classify_demand(policy, item.predicted_demand(), item.rolling_mean_7());

    let adjustment = match demand {
        DemandLevel::High => policy.step,
        DemandLevel::Low => -policy.step,
        DemandLevel::Normal => 0.0,
    };

    let floor = policy.floor(item.cost());
    let ceiling = policy.ceiling(item.competitor_price());

    let raw = item.price() * (1.0 + adjustment);
    let optimized_price = raw.max(floor).min(ceiling);

    let degenerate_market = floor > ceiling;

    PricedLineItem::new(item, demand, adjustment, optimized_price, degenerate_market)
}

/// Round to currency precision (2 decimal digits).
///
/// Presentation-boundary helper only; the decision arithmetic never rounds.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
