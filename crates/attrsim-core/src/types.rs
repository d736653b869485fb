use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acquisition source a user interaction is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketingChannel {
    Ad,
    Email,
    Influencer,
}

impl MarketingChannel {
    /// All channels, in canonical order.
    pub const ALL: [MarketingChannel; 3] = [
        MarketingChannel::Ad,
        MarketingChannel::Email,
        MarketingChannel::Influencer,
    ];

    /// Wire name used in CSV and JSON exports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MarketingChannel::Ad => "Ad",
            MarketingChannel::Email => "Email",
            MarketingChannel::Influencer => "Influencer",
        }
    }
}

impl std::fmt::Display for MarketingChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown marketing channel '{0}'; expected Ad, Email, or Influencer")]
pub struct ParseChannelError(String);

impl std::str::FromStr for MarketingChannel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ad" => Ok(MarketingChannel::Ad),
            "email" => Ok(MarketingChannel::Email),
            "influencer" => Ok(MarketingChannel::Influencer),
            _ => Err(ParseChannelError(s.to_string())),
        }
    }
}

/// One synthetic user interaction produced by the dataset generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInteractionRecord {
    /// Stable identifier of the form `user_N`, 1-based.
    pub user_id: String,
    pub marketing_channel: MarketingChannel,
    /// Pages viewed, 0-10.
    pub product_views: u8,
    /// 1 if the user added the product to their cart, else 0.
    pub add_to_cart: u8,
    /// Perceived image quality, 1-5.
    pub image_quality: u8,
    /// Reviews read, 0-100.
    pub review_count: u8,
    /// Seconds on the product page, 10-300.
    pub time_spent_on_page: u16,
    /// 1 if the interaction ended in a purchase, else 0.
    pub conversion: u8,
}

/// Hypothetical user profile fed to the scoring model.
///
/// Values are unvalidated floats: the model normalizes against each feature's
/// nominal range but accepts out-of-range inputs without clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub marketing_channel: MarketingChannel,
    pub product_views: f64,
    pub image_quality: f64,
    pub review_count: f64,
    pub time_spent_on_page: f64,
}

impl Default for SimulationParameters {
    /// The profile a fresh simulation session starts from.
    fn default() -> Self {
        SimulationParameters {
            marketing_channel: MarketingChannel::Ad,
            product_views: 3.0,
            image_quality: 3.0,
            review_count: 20.0,
            time_spent_on_page: 120.0,
        }
    }
}

/// The five model features, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    MarketingChannel,
    ProductViews,
    ImageQuality,
    ReviewCount,
    TimeSpentOnPage,
}

impl Feature {
    /// All features, in scoring order.
    pub const ALL: [Feature; 5] = [
        Feature::MarketingChannel,
        Feature::ProductViews,
        Feature::ImageQuality,
        Feature::ReviewCount,
        Feature::TimeSpentOnPage,
    ];

    /// Snake-case wire name, matching export columns and remote payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::MarketingChannel => "marketing_channel",
            Feature::ProductViews => "product_views",
            Feature::ImageQuality => "image_quality",
            Feature::ReviewCount => "review_count",
            Feature::TimeSpentOnPage => "time_spent_on_page",
        }
    }

    /// Human-readable name for report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Feature::MarketingChannel => "Marketing Channel",
            Feature::ProductViews => "Product Views",
            Feature::ImageQuality => "Image Quality",
            Feature::ReviewCount => "Review Count",
            Feature::TimeSpentOnPage => "Time Spent On Page",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn channel_from_str_is_case_insensitive() {
        assert_eq!(
            MarketingChannel::from_str("influencer").unwrap(),
            MarketingChannel::Influencer
        );
        assert_eq!(MarketingChannel::from_str("AD").unwrap(), MarketingChannel::Ad);
        assert_eq!(
            MarketingChannel::from_str("Email").unwrap(),
            MarketingChannel::Email
        );
    }

    #[test]
    fn channel_from_str_rejects_unknown() {
        let err = MarketingChannel::from_str("organic").unwrap_err();
        assert!(err.to_string().contains("organic"));
    }

    #[test]
    fn channel_serializes_to_wire_name() {
        let json = serde_json::to_string(&MarketingChannel::Influencer).unwrap();
        assert_eq!(json, "\"Influencer\"");
    }

    #[test]
    fn record_serializes_with_snake_case_fields() {
        let record = UserInteractionRecord {
            user_id: "user_1".to_string(),
            marketing_channel: MarketingChannel::Ad,
            product_views: 4,
            add_to_cart: 1,
            image_quality: 3,
            review_count: 25,
            time_spent_on_page: 120,
            conversion: 0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["user_id"], "user_1");
        assert_eq!(json["marketing_channel"], "Ad");
        assert_eq!(json["time_spent_on_page"], 120);
        assert_eq!(json["conversion"], 0);
    }

    #[test]
    fn default_parameters_match_initial_profile() {
        let params = SimulationParameters::default();
        assert_eq!(params.marketing_channel, MarketingChannel::Ad);
        assert!((params.product_views - 3.0).abs() < f64::EPSILON);
        assert!((params.image_quality - 3.0).abs() < f64::EPSILON);
        assert!((params.review_count - 20.0).abs() < f64::EPSILON);
        assert!((params.time_spent_on_page - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn feature_wire_names_are_snake_case() {
        assert_eq!(Feature::TimeSpentOnPage.as_str(), "time_spent_on_page");
        let json = serde_json::to_string(&Feature::ProductViews).unwrap();
        assert_eq!(json, "\"product_views\"");
    }
}
