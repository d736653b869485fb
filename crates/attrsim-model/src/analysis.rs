//! Aggregate statistics over generated datasets.

use attrsim_core::{MarketingChannel, UserInteractionRecord};
use serde::Serialize;

use crate::error::AnalysisError;

/// Summary statistics for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    /// Share of records with `conversion == 1`.
    pub conversion_rate: f64,
    /// Share of records with `add_to_cart == 1`.
    pub add_to_cart_rate: f64,
    /// Per-channel stats in [`MarketingChannel::ALL`] order; channels absent
    /// from the input get no entry.
    pub channels: Vec<ChannelSummary>,
    pub averages: FeatureAverages,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub channel: MarketingChannel,
    pub records: usize,
    pub conversions: usize,
    pub conversion_rate: f64,
}

/// Arithmetic means of the four continuous record fields.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureAverages {
    pub product_views: f64,
    pub image_quality: f64,
    pub review_count: f64,
    pub time_spent_on_page: f64,
}

/// Summarize a dataset: overall rates, per-channel conversion, and feature
/// means.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyDataset`] for an empty slice, so callers
/// never see NaN rates.
pub fn analyze_dataset(
    records: &[UserInteractionRecord],
) -> Result<DatasetSummary, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let total = records.len();
    let conversions = records.iter().filter(|r| r.conversion == 1).count();
    let carts = records.iter().filter(|r| r.add_to_cart == 1).count();

    let mut channels = Vec::new();
    for channel in MarketingChannel::ALL {
        let count = records
            .iter()
            .filter(|r| r.marketing_channel == channel)
            .count();
        if count == 0 {
            continue;
        }
        let converted = records
            .iter()
            .filter(|r| r.marketing_channel == channel && r.conversion == 1)
            .count();
        channels.push(ChannelSummary {
            channel,
            records: count,
            conversions: converted,
            conversion_rate: ratio(converted, count),
        });
    }

    let averages = FeatureAverages {
        product_views: mean(records, |r| f64::from(r.product_views)),
        image_quality: mean(records, |r| f64::from(r.image_quality)),
        review_count: mean(records, |r| f64::from(r.review_count)),
        time_spent_on_page: mean(records, |r| f64::from(r.time_spent_on_page)),
    };

    Ok(DatasetSummary {
        total_records: total,
        conversion_rate: ratio(conversions, total),
        add_to_cart_rate: ratio(carts, total),
        channels,
        averages,
    })
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

#[allow(clippy::cast_precision_loss)]
fn mean<F>(records: &[UserInteractionRecord], field: F) -> f64
where
    F: Fn(&UserInteractionRecord) -> f64,
{
    records.iter().map(field).sum::<f64>() / records.len() as f64
}
