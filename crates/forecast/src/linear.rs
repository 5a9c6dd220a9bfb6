//! Linear demand model loaded from a JSON coefficient artifact.
//!
//! The training pipeline exports elasticity regressions as an intercept plus
//! per-feature weights. Loading is always explicit (path or reader passed by
//! the caller); there is no process-wide model state.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::estimator::{DemandEstimator, ForecastError};
use crate::features::FeatureVector;

/// Deterministic linear scorer: `intercept + Σ weight_i * feature_i`.
///
/// Features absent from the artifact contribute nothing, so sparse artifacts
/// are valid. Unknown feature names are rejected at load time, not at predict
/// time.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearDemandModel {
    name: String,
    intercept: f64,
    weights: BTreeMap<String, f64>,
}

impl LinearDemandModel {
    /// Load a model artifact from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ForecastError> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| ForecastError::Artifact(format!("open failed: {e}")))?;
        Self::from_reader(file)
    }

    /// Load a model artifact from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ForecastError> {
        let model: Self = serde_json::from_reader(reader)
            .map_err(|e| ForecastError::Artifact(format!("parse failed: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ForecastError> {
        Self::from_reader(json.as_bytes())
    }

    fn validate(&self) -> Result<(), ForecastError> {
        if self.name.trim().is_empty() {
            return Err(ForecastError::Artifact(
                "model name cannot be empty".to_string(),
            ));
        }
        if !self.intercept.is_finite() {
            return Err(ForecastError::Artifact(format!(
                "intercept must be finite (got {})",
                self.intercept
            )));
        }
        for (feature, weight) in &self.weights {
            if !FeatureVector::NAMES.contains(&feature.as_str()) {
                return Err(ForecastError::Artifact(format!(
                    "unknown feature in artifact: {feature}"
                )));
            }
            if !weight.is_finite() {
                return Err(ForecastError::Artifact(format!(
                    "weight for {feature} must be finite (got {weight})"
                )));
            }
        }
        Ok(())
    }
}

impl DemandEstimator for LinearDemandModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ForecastError> {
        let mut estimate = self.intercept;
        for (feature, weight) in &self.weights {
            // Names were checked against FeatureVector::NAMES at load time.
            let value = features.value(feature).ok_or_else(|| {
                ForecastError::InferenceFailed(format!("unresolvable feature: {feature}"))
            })?;
            estimate += weight * value;
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureInputs;

    fn sample_features() -> FeatureVector {
        FeatureVector::derive(&FeatureInputs {
            price: 100.0,
            cost: 60.0,
            promo_discount: 0.1,
            competitor_price: 105.0,
            temperature: 28.0,
            lag_1: 7.0,
            rolling_mean_7: Some(6.5),
            elasticity: -1.2,
            day_of_week: 2,
            is_weekend: false,
            month: 5,
        })
        .unwrap()
    }

    #[test]
    fn loads_artifact_and_scores_linearly() {
        let model = LinearDemandModel::from_json(
            r#"{
                "name": "elasticity-ridge-v1",
                "intercept": 2.0,
                "weights": { "rolling_mean_7": 1.0, "lag_1": 0.5 }
            }"#,
        )
        .unwrap();

        assert_eq!(model.name(), "elasticity-ridge-v1");

        // 2.0 + 1.0 * 6.5 + 0.5 * 7.0
        let estimate = model.predict(&sample_features()).unwrap();
        assert_eq!(estimate, 12.0);
    }

    #[test]
    fn constant_model_ignores_features() {
        let model = LinearDemandModel::from_json(
            r#"{ "name": "constant", "intercept": 8.0, "weights": {} }"#,
        )
        .unwrap();
        assert_eq!(model.predict(&sample_features()).unwrap(), 8.0);
    }

    #[test]
    fn estimates_are_not_clamped() {
        let model = LinearDemandModel::from_json(
            r#"{ "name": "negative", "intercept": -3.0, "weights": {} }"#,
        )
        .unwrap();
        assert_eq!(model.predict(&sample_features()).unwrap(), -3.0);
    }

    #[test]
    fn rejects_unknown_feature_names_at_load() {
        let err = LinearDemandModel::from_json(
            r#"{ "name": "bad", "intercept": 0.0, "weights": { "units_sold": 1.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::Artifact(_)));
    }

    #[test]
    fn rejects_malformed_artifacts() {
        assert!(LinearDemandModel::from_json("not json").is_err());
        assert!(
            LinearDemandModel::from_json(r#"{ "name": "", "intercept": 0.0, "weights": {} }"#)
                .is_err()
        );
    }

    #[test]
    fn missing_artifact_file_is_an_artifact_error() {
        let err = LinearDemandModel::from_path("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, ForecastError::Artifact(_)));
    }
}
