//! `reprice-forecast`
//!
//! **Responsibility:** the demand-estimation boundary.
//!
//! This crate is intentionally **not** part of the pricing domain:
//! - It must not depend on pricing decisions or mutate commercial state.
//! - It emits **demand estimates**, not prices.
//!
//! Estimates are deliberately unclamped: a model may return negative, zero,
//! or non-finite values, and the pricing layer decides how to react.

pub mod estimator;
pub mod features;
pub mod linear;

pub use estimator::{DemandEstimator, ForecastError};
pub use features::{FeatureInputs, FeatureVector};
pub use linear::LinearDemandModel;
