use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, WeightError};
use crate::types::Feature;

/// Maximum drift of a weight sum from 1.0 before [`FeatureWeights::normalized`]
/// rescales.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Label for the scoring backend shown in reports and remote payloads.
///
/// Every variant runs the same closed-form model; the label has no
/// algorithmic effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelType {
    #[default]
    RandomForest,
    LogisticRegression,
    XGBoost,
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelType::RandomForest => write!(f, "Random Forest"),
            ModelType::LogisticRegression => write!(f, "Logistic Regression"),
            ModelType::XGBoost => write!(f, "XGBoost"),
        }
    }
}

/// Per-feature coefficients for the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub marketing_channel: f64,
    pub product_views: f64,
    pub image_quality: f64,
    pub review_count: f64,
    pub time_spent_on_page: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        FeatureWeights {
            marketing_channel: 0.30,
            product_views: 0.20,
            image_quality: 0.15,
            review_count: 0.25,
            time_spent_on_page: 0.10,
        }
    }
}

impl FeatureWeights {
    /// Weight assigned to `feature`.
    #[must_use]
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::MarketingChannel => self.marketing_channel,
            Feature::ProductViews => self.product_views,
            Feature::ImageQuality => self.image_quality,
            Feature::ReviewCount => self.review_count,
            Feature::TimeSpentOnPage => self.time_spent_on_page,
        }
    }

    /// Sum of all five weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.marketing_channel
            + self.product_views
            + self.image_quality
            + self.review_count
            + self.time_spent_on_page
    }

    /// Rescale the weights so they sum to 1.0.
    ///
    /// Sums already within [`WEIGHT_SUM_TOLERANCE`] of 1.0 are returned
    /// untouched, so repeatedly normalizing hand-tuned weights does not drift
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::UnusableSum`] if the sum is zero, negative, or
    /// non-finite.
    pub fn normalized(self) -> Result<Self, WeightError> {
        let sum = self.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(WeightError::UnusableSum(sum));
        }
        if (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            return Ok(self);
        }
        Ok(FeatureWeights {
            marketing_channel: self.marketing_channel / sum,
            product_views: self.product_views / sum,
            image_quality: self.image_quality / sum,
            review_count: self.review_count / sum,
            time_spent_on_page: self.time_spent_on_page / sum,
        })
    }
}

/// Scoring configuration: a model label plus the feature weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributionModelConfig {
    #[serde(default)]
    pub model_type: ModelType,
    pub feature_weights: FeatureWeights,
}

/// Load and validate a model configuration from a YAML file.
///
/// Weights must be finite and non-negative; they are normalized to sum to 1.0
/// before being returned.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_model_config(path: &Path) -> Result<AttributionModelConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WeightsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut config: AttributionModelConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::WeightsFileParse)?;

    validate_weights(&config.feature_weights)?;
    config.feature_weights = config.feature_weights.normalized()?;

    Ok(config)
}

fn validate_weights(weights: &FeatureWeights) -> Result<(), ConfigError> {
    for feature in Feature::ALL {
        let value = weights.get(feature);
        if !value.is_finite() {
            return Err(ConfigError::Validation(format!(
                "weight for {feature} is not a finite number"
            )));
        }
        if value < 0.0 {
            return Err(ConfigError::Validation(format!(
                "weight for {feature} is negative ({value}); weights must be >= 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((FeatureWeights::default().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_keeps_sum_within_tolerance() {
        let weights = FeatureWeights {
            marketing_channel: 0.305,
            ..FeatureWeights::default()
        };
        let normalized = weights.normalized().unwrap();
        assert_eq!(normalized, weights);
    }

    #[test]
    fn normalized_rescales_out_of_tolerance_sum() {
        let weights = FeatureWeights {
            marketing_channel: 0.60,
            product_views: 0.40,
            image_quality: 0.30,
            review_count: 0.50,
            time_spent_on_page: 0.20,
        };
        let normalized = weights.normalized().unwrap();
        assert!((normalized.sum() - 1.0).abs() < 1e-12);
        assert!((normalized.marketing_channel - 0.30).abs() < 1e-12);
        assert!((normalized.review_count - 0.25).abs() < 1e-12);
    }

    #[test]
    fn uniform_overweight_set_normalizes_to_equal_shares() {
        let weights = FeatureWeights {
            marketing_channel: 0.4,
            product_views: 0.4,
            image_quality: 0.4,
            review_count: 0.4,
            time_spent_on_page: 0.4,
        };
        let normalized = weights.normalized().unwrap();
        for feature in Feature::ALL {
            assert!((normalized.get(feature) - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn normalized_rejects_zero_sum() {
        let weights = FeatureWeights {
            marketing_channel: 0.0,
            product_views: 0.0,
            image_quality: 0.0,
            review_count: 0.0,
            time_spent_on_page: 0.0,
        };
        let err = weights.normalized().unwrap_err();
        assert!(matches!(err, WeightError::UnusableSum(s) if s == 0.0));
    }

    #[test]
    fn parses_yaml_with_default_model_type() {
        let yaml = "\
feature_weights:
  marketing_channel: 0.3
  product_views: 0.2
  image_quality: 0.15
  review_count: 0.25
  time_spent_on_page: 0.1
";
        let config: AttributionModelConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.model_type, ModelType::RandomForest);
        assert!((config.feature_weights.review_count - 0.25).abs() < 1e-12);
    }

    #[test]
    fn parses_yaml_with_explicit_model_type() {
        let yaml = "\
model_type: XGBoost
feature_weights:
  marketing_channel: 0.3
  product_views: 0.2
  image_quality: 0.15
  review_count: 0.25
  time_spent_on_page: 0.1
";
        let config: AttributionModelConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.model_type, ModelType::XGBoost);
    }

    #[test]
    fn shipped_weights_file_loads_and_normalizes() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../config/weights.yaml");
        let config = load_model_config(&path).unwrap();
        assert_eq!(config.model_type, ModelType::RandomForest);
        assert!((config.feature_weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_weights_file_is_an_io_error() {
        let path = std::path::Path::new("does/not/exist.yaml");
        let err = load_model_config(path).unwrap_err();
        assert!(
            matches!(err, ConfigError::WeightsFileIo { .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let weights = FeatureWeights {
            image_quality: -0.15,
            ..FeatureWeights::default()
        };
        let err = validate_weights(&weights).unwrap_err();
        assert!(err.to_string().contains("image_quality"));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn validate_rejects_non_finite_weight() {
        let weights = FeatureWeights {
            review_count: f64::NAN,
            ..FeatureWeights::default()
        };
        let err = validate_weights(&weights).unwrap_err();
        assert!(err.to_string().contains("review_count"));
    }
}
