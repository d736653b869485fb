//! Closed-form attribution scoring.
//!
//! Normalizes a profile against each feature's nominal range, combines the
//! five features with configurable weights, and squashes the sum through a
//! sigmoid into a conversion probability.

use attrsim_core::{
    AttributionModelConfig, Feature, FeatureWeights, MarketingChannel, SimulationParameters,
};
use serde::Serialize;

/// Steepness of the sigmoid squash.
const SIGMOID_STEEPNESS: f64 = 10.0;
/// Weighted-sum value that maps to probability 0.5.
const SIGMOID_MIDPOINT: f64 = 0.5;

/// Normalize a raw feature value against its nominal range.
///
/// Linear rescale onto roughly [0, 1]: product_views over 1-10, image_quality
/// over 1-5, review_count over 0-100, time_spent_on_page over 10-300. Inputs
/// outside the nominal range are NOT clamped; the scale stays linear
/// everywhere. Channel scores are already on the model scale and pass
/// through unchanged.
#[must_use]
pub fn normalize_feature(feature: Feature, value: f64) -> f64 {
    match feature {
        Feature::MarketingChannel => value,
        Feature::ProductViews => (value - 1.0) / 9.0,
        Feature::ImageQuality => (value - 1.0) / 4.0,
        Feature::ReviewCount => value / 100.0,
        Feature::TimeSpentOnPage => (value - 10.0) / 290.0,
    }
}

/// Fixed effectiveness score of each acquisition channel.
#[must_use]
pub fn channel_score(channel: MarketingChannel) -> f64 {
    match channel {
        MarketingChannel::Ad => 0.7,
        MarketingChannel::Email => 0.6,
        MarketingChannel::Influencer => 0.8,
    }
}

/// Logistic squash mapping a weighted sum onto (0, 1).
///
/// Centered at `SIGMOID_MIDPOINT` with steepness `SIGMOID_STEEPNESS`, so a
/// weighted sum of 0.5 maps to probability 0.5 and sums between roughly 0.2
/// and 0.8 cover the interesting part of the curve.
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-SIGMOID_STEEPNESS * (x - SIGMOID_MIDPOINT)).exp())
}

/// Weighted sum of the normalized features under `weights`.
#[must_use]
pub fn weighted_sum(params: &SimulationParameters, weights: &FeatureWeights) -> f64 {
    normalized_features(params)
        .iter()
        .map(|&(feature, value)| weights.get(feature) * value)
        .sum()
}

fn normalized_features(params: &SimulationParameters) -> [(Feature, f64); 5] {
    [
        (
            Feature::MarketingChannel,
            channel_score(params.marketing_channel),
        ),
        (
            Feature::ProductViews,
            normalize_feature(Feature::ProductViews, params.product_views),
        ),
        (
            Feature::ImageQuality,
            normalize_feature(Feature::ImageQuality, params.image_quality),
        ),
        (
            Feature::ReviewCount,
            normalize_feature(Feature::ReviewCount, params.review_count),
        ),
        (
            Feature::TimeSpentOnPage,
            normalize_feature(Feature::TimeSpentOnPage, params.time_spent_on_page),
        ),
    ]
}

/// Predicted conversion probability for `params` under `config`.
///
/// Pure and infallible; out-of-range inputs are scored on the same linear
/// scale rather than rejected.
#[must_use]
pub fn predict(params: &SimulationParameters, config: &AttributionModelConfig) -> f64 {
    sigmoid(weighted_sum(params, &config.feature_weights))
}

/// Per-feature share of a prediction.
///
/// Each share is that feature's slice of the weighted sum divided by the
/// final predicted probability rather than by the raw sum, so the shares do
/// NOT add up to 1. They preserve the relative ordering reports rank
/// features by, which is all they are for.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureContributions {
    pub marketing_channel: f64,
    pub product_views: f64,
    pub image_quality: f64,
    pub review_count: f64,
    pub time_spent_on_page: f64,
}

impl FeatureContributions {
    /// Share attributed to `feature`.
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

    /// Features ranked by share, largest first.
    #[must_use]
    pub fn ranked(&self) -> [(Feature, f64); 5] {
        let mut pairs = Feature::ALL.map(|feature| (feature, self.get(feature)));
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        pairs
    }
}

/// Decompose a prediction into per-feature shares.
///
/// With absurd inputs the probability can underflow to zero and the shares
/// become non-finite; inputs are deliberately not validated here.
#[must_use]
pub fn feature_contributions(
    params: &SimulationParameters,
    config: &AttributionModelConfig,
) -> FeatureContributions {
    let weights = &config.feature_weights;
    let features = normalized_features(params);
    let sum: f64 = features
        .iter()
        .map(|&(feature, value)| weights.get(feature) * value)
        .sum();
    let probability = sigmoid(sum);

    let share = |feature: Feature, value: f64| weights.get(feature) * value / probability;
    FeatureContributions {
        marketing_channel: share(Feature::MarketingChannel, features[0].1),
        product_views: share(Feature::ProductViews, features[1].1),
        image_quality: share(Feature::ImageQuality, features[2].1),
        review_count: share(Feature::ReviewCount, features[3].1),
        time_spent_on_page: share(Feature::TimeSpentOnPage, features[4].1),
    }
}

/// Change in predicted probability from `previous` to `current` under the
/// same `config`. Positive means `current` converts better.
#[must_use]
pub fn impact_delta(
    previous: &SimulationParameters,
    current: &SimulationParameters,
    config: &AttributionModelConfig,
) -> f64 {
    predict(current, config) - predict(previous, config)
}
