//! Named cohort datasets layered on the base generator.

use attrsim_core::{MarketingChannel, UserInteractionRecord};
use rand::Rng;
use tracing::debug;

use crate::distributions::clamped_normal;
use crate::generator::{to_u16, to_u8, DataGenerator};

/// Records per cohort.
const SEGMENT_SIZE: usize = 50;

/// Channel mix for first-time customers, skewed toward paid acquisition.
const NEW_CUSTOMER_CHANNEL_WEIGHTS: [(MarketingChannel, f64); 3] = [
    (MarketingChannel::Ad, 0.6),
    (MarketingChannel::Influencer, 0.3),
    (MarketingChannel::Email, 0.1),
];

/// The three demo cohorts.
#[derive(Debug, Clone)]
pub struct SegmentDatasets {
    pub high_value_users: Vec<UserInteractionRecord>,
    pub new_customers: Vec<UserInteractionRecord>,
    pub returning_customers: Vec<UserInteractionRecord>,
}

impl SegmentDatasets {
    /// Cohorts paired with their display names, in canonical order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, &[UserInteractionRecord]); 3] {
        [
            ("high-value users", &self.high_value_users),
            ("new customers", &self.new_customers),
            ("returning customers", &self.returning_customers),
        ]
    }
}

impl<R: Rng> DataGenerator<R> {
    /// Generate the three 50-record demo cohorts.
    ///
    /// Each cohort is a full base generation whose fields are overridden
    /// after the fact. Derived labels (`add_to_cart`, `conversion`) are NOT
    /// recomputed against the overridden values, so cohort label rates still
    /// reflect the base draws. User ids restart at `user_1` per cohort.
    pub fn generate_segments(&mut self) -> SegmentDatasets {
        let mut high_value_users = self.generate(SEGMENT_SIZE);
        for record in &mut high_value_users {
            record.time_spent_on_page =
                to_u16(clamped_normal(&mut self.rng, 180.0, 40.0, 120.0, 300.0));
            record.product_views = to_u8(clamped_normal(&mut self.rng, 7.0, 1.5, 5.0, 10.0));
        }

        let mut new_customers = self.generate(SEGMENT_SIZE);
        for record in &mut new_customers {
            record.product_views = to_u8(clamped_normal(&mut self.rng, 2.0, 1.0, 1.0, 5.0));
            record.marketing_channel = self.draw_channel(&NEW_CUSTOMER_CHANNEL_WEIGHTS);
        }

        let mut returning_customers = self.generate(SEGMENT_SIZE);
        for record in &mut returning_customers {
            record.marketing_channel = MarketingChannel::Email;
            record.product_views = to_u8(clamped_normal(&mut self.rng, 3.0, 1.2, 1.0, 8.0));
        }

        debug!(size = SEGMENT_SIZE, "generated segment cohorts");
        SegmentDatasets {
            high_value_users,
            new_customers,
            returning_customers,
        }
    }
}
