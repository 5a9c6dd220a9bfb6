use thiserror::Error;

use crate::features::FeatureVector;

/// A demand estimator for one line item at a time.
///
/// Implementations must be safe to share across request handlers; the models
/// this crate ships are pure functions over their inputs.
pub trait DemandEstimator: Send + Sync + 'static {
    /// Model identity (artifact name/version) for health reporting.
    fn name(&self) -> &str;

    /// Predict expected units sold for one feature vector.
    ///
    /// The estimate is unclamped: it may be negative, zero, or non-finite.
    /// Reacting to such values is the caller's concern.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ForecastError>;
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("invalid estimator input: {0}")]
    InvalidInput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),

    #[error("model artifact error: {0}")]
    Artifact(String),
}
