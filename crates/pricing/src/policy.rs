//! Pricing guardrail policy.
//!
//! One parameter object carries every business constant the engine depends
//! on. Both call-sites (batch runner, serving adapter) receive the same
//! policy value, so the two paths cannot drift apart.

use serde::{Deserialize, Serialize};

use reprice_core::{DomainError, DomainResult};

/// Signed fractional price step applied on a high/low demand signal.
pub const DEFAULT_STEP: f64 = 0.05;

/// Demand above `rolling_mean_7 * DEFAULT_HIGH_BAND` classifies as high.
pub const DEFAULT_HIGH_BAND: f64 = 1.1;

/// Demand below `rolling_mean_7 * DEFAULT_LOW_BAND` classifies as low.
pub const DEFAULT_LOW_BAND: f64 = 0.9;

/// Price floor multiplier over unit cost (minimum 10% margin).
pub const DEFAULT_MARGIN_FLOOR: f64 = 1.1;

/// Price ceiling multiplier over the competitor price.
pub const DEFAULT_COMPETITOR_CEILING: f64 = 1.1;

/// Business guardrails for the pricing decision.
///
/// [`PricingPolicy::default`] is the reference behavior. Custom policies go
/// through [`PricingPolicy::new`], which rejects inconsistent values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fractional price change on a high (`+step`) or low (`-step`) signal.
    pub step: f64,
    /// Upper demand band multiplier (strictly above → high demand).
    pub high_band: f64,
    /// Lower demand band multiplier (strictly below → low demand).
    pub low_band: f64,
    /// Floor multiplier applied to unit cost.
    pub margin_floor: f64,
    /// Ceiling multiplier applied to the competitor price.
    pub competitor_ceiling: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            high_band: DEFAULT_HIGH_BAND,
            low_band: DEFAULT_LOW_BAND,
            margin_floor: DEFAULT_MARGIN_FLOOR,
            competitor_ceiling: DEFAULT_COMPETITOR_CEILING,
        }
    }
}

impl PricingPolicy {
    /// Build a validated custom policy.
    pub fn new(
        step: f64,
        high_band: f64,
        low_band: f64,
        margin_floor: f64,
        competitor_ceiling: f64,
    ) -> DomainResult<Self> {
        let policy = Self {
            step,
            high_band,
            low_band,
            margin_floor,
            competitor_ceiling,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check policy consistency.
    pub fn validate(&self) -> DomainResult<()> {
        for (name, value) in [
            ("step", self.step),
            ("high_band", self.high_band),
            ("low_band", self.low_band),
            ("margin_floor", self.margin_floor),
            ("competitor_ceiling", self.competitor_ceiling),
        ] {
            if !value.is_finite() {
                return Err(DomainError::invariant(format!(
                    "policy {name} must be finite (got {value})"
                )));
            }
        }

        if self.step < 0.0 {
            return Err(DomainError::invariant("policy step cannot be negative"));
        }
        if self.low_band <= 0.0 || self.high_band <= 0.0 {
            return Err(DomainError::invariant("demand bands must be positive"));
        }
        if self.low_band > self.high_band {
            return Err(DomainError::invariant(
                "low_band cannot exceed high_band (empty normal band)",
            ));
        }
        if self.margin_floor <= 0.0 || self.competitor_ceiling <= 0.0 {
            return Err(DomainError::invariant("clamp multipliers must be positive"));
        }
        Ok(())
    }

    /// Lowest admissible price for a given unit cost.
    pub fn floor(&self, cost: f64) -> f64 {
        cost * self.margin_floor
    }

    /// Highest admissible price for a given competitor price.
    pub fn ceiling(&self, competitor_price: f64) -> f64 {
        competitor_price * self.competitor_ceiling
    }
}
