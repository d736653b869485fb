//! The synthetic record generator.

use attrsim_core::{MarketingChannel, UserInteractionRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::distributions::{bernoulli, clamped_normal, weighted_choice};

/// Channel mix of the base population.
const CHANNEL_WEIGHTS: [(MarketingChannel, f64); 3] = [
    (MarketingChannel::Ad, 0.5),
    (MarketingChannel::Email, 0.3),
    (MarketingChannel::Influencer, 0.2),
];

/// Synthesizes user-interaction datasets from an owned random source.
///
/// Raw output is random; only distributional shape and the clamped field
/// domains are stable. Seeded construction exists so tolerance-based tests
/// cannot flake, not to promise exact sequences across versions.
pub struct DataGenerator<R: Rng = StdRng> {
    pub(crate) rng: R,
}

impl DataGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        DataGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        DataGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DataGenerator<StdRng> {
    fn default() -> Self {
        DataGenerator::new()
    }
}

impl<R: Rng> DataGenerator<R> {
    /// Generator over a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        DataGenerator { rng }
    }

    /// Generate `count` records with sequential 1-based user ids.
    pub fn generate(&mut self, count: usize) -> Vec<UserInteractionRecord> {
        let records: Vec<UserInteractionRecord> =
            (0..count).map(|index| self.record(index)).collect();
        debug!(count, "generated synthetic records");
        records
    }

    fn record(&mut self, index: usize) -> UserInteractionRecord {
        let marketing_channel = self.draw_channel(&CHANNEL_WEIGHTS);
        let product_views = clamped_normal(&mut self.rng, 4.0, 2.0, 0.0, 10.0);
        let image_quality = clamped_normal(&mut self.rng, 3.5, 0.8, 1.0, 5.0);
        let review_count = clamped_normal(&mut self.rng, 25.0, 15.0, 0.0, 100.0);
        let time_spent = clamped_normal(&mut self.rng, 120.0, 60.0, 10.0, 300.0);

        let add_to_cart = bernoulli(
            &mut self.rng,
            add_to_cart_probability(image_quality, review_count, time_spent),
        );
        let conversion = bernoulli(
            &mut self.rng,
            conversion_probability(
                marketing_channel,
                add_to_cart,
                image_quality,
                review_count,
                time_spent,
            ),
        );

        UserInteractionRecord {
            user_id: format!("user_{}", index + 1),
            marketing_channel,
            product_views: to_u8(product_views),
            add_to_cart: u8::from(add_to_cart),
            image_quality: to_u8(image_quality),
            review_count: to_u8(review_count),
            time_spent_on_page: to_u16(time_spent),
            conversion: u8::from(conversion),
        }
    }

    pub(crate) fn draw_channel(
        &mut self,
        weights: &[(MarketingChannel, f64)],
    ) -> MarketingChannel {
        weighted_choice(&mut self.rng, weights).unwrap_or(MarketingChannel::Ad)
    }
}

/// Probability that a user with these trait values adds to cart.
///
/// Deliberately unclamped: for in-domain inputs it tops out at 0.9, and the
/// Bernoulli draw saturates for anything outside [0, 1].
fn add_to_cart_probability(image_quality: f64, review_count: f64, time_spent: f64) -> f64 {
    0.3 + (image_quality - 3.0) * 0.1
        + (review_count / 100.0) * 0.2
        + (time_spent / 300.0) * 0.2
}

/// Probability that an interaction converts, clamped to [0.05, 0.95].
fn conversion_probability(
    channel: MarketingChannel,
    add_to_cart: bool,
    image_quality: f64,
    review_count: f64,
    time_spent: f64,
) -> f64 {
    let channel_bonus = match channel {
        MarketingChannel::Ad => 0.10,
        MarketingChannel::Email => 0.15,
        MarketingChannel::Influencer => 0.25,
    };
    let cart_bonus = if add_to_cart { 0.3 } else { 0.0 };
    let raw = 0.2
        + channel_bonus
        + cart_bonus
        + (image_quality - 3.0) * 0.05
        + (review_count / 100.0) * 0.1
        + (time_spent / 300.0) * 0.1;
    raw.clamp(0.05, 0.95)
}

// Inputs are rounded and clamped into range before conversion.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(value: f64) -> u8 {
    value as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u16(value: f64) -> u16 {
    value as u16
}

#[cfg(test)]
mod tests {
    use attrsim_core::{parse_csv, render_csv};

    use super::*;

    #[test]
    fn generate_assigns_sequential_one_based_ids() {
        let mut generator = DataGenerator::from_seed(1);
        let records = generator.generate(10);
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].user_id, "user_1");
        assert_eq!(records[9].user_id, "user_10");
    }

    #[test]
    fn generated_fields_stay_in_domain() {
        let mut generator = DataGenerator::from_seed(2);
        let records = generator.generate(500);
        assert_eq!(records.len(), 500);
        for record in records {
            assert!(record.product_views <= 10);
            assert!((1..=5).contains(&record.image_quality));
            assert!(record.review_count <= 100);
            assert!((10..=300).contains(&record.time_spent_on_page));
            assert!(record.add_to_cart <= 1);
            assert!(record.conversion <= 1);
        }
    }

    #[test]
    fn channel_mix_approximates_weights() {
        let mut generator = DataGenerator::from_seed(3);
        let records = generator.generate(5_000);
        #[allow(clippy::cast_precision_loss)]
        let share = |channel: MarketingChannel| {
            records
                .iter()
                .filter(|r| r.marketing_channel == channel)
                .count() as f64
                / records.len() as f64
        };
        assert!((share(MarketingChannel::Ad) - 0.5).abs() < 0.03);
        assert!((share(MarketingChannel::Email) - 0.3).abs() < 0.03);
        assert!((share(MarketingChannel::Influencer) - 0.2).abs() < 0.03);
    }

    #[test]
    fn same_seed_reproduces_the_dataset() {
        let a = DataGenerator::from_seed(99).generate(50);
        let b = DataGenerator::from_seed(99).generate(50);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = DataGenerator::from_seed(1).generate(50);
        let b = DataGenerator::from_seed(2).generate(50);
        assert_ne!(a, b);
    }

    #[test]
    fn generated_batch_round_trips_through_csv() {
        let records = DataGenerator::from_seed(11).generate(100);
        let parsed = parse_csv(&render_csv(&records)).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn entropy_seeded_generator_produces_records() {
        let mut generator = DataGenerator::new();
        assert_eq!(generator.generate(3).len(), 3);
    }

    #[test]
    fn cart_probability_tops_out_at_point_nine_in_domain() {
        // Unclamped formula, but the in-domain maximum is 0.9.
        let max = add_to_cart_probability(5.0, 100.0, 300.0);
        assert!((max - 0.9).abs() < 1e-12, "max = {max}");
        let min = add_to_cart_probability(1.0, 0.0, 10.0);
        assert!(min > 0.0, "min = {min}");
    }

    #[test]
    fn conversion_probability_clamps_at_the_top() {
        // Influencer + cart + best traits would give 1.05 unclamped.
        let p = conversion_probability(MarketingChannel::Influencer, true, 5.0, 100.0, 300.0);
        assert!((p - 0.95).abs() < 1e-12, "p = {p}");
    }

    #[test]
    fn conversion_probability_orders_channels() {
        let p = |channel| conversion_probability(channel, false, 3.0, 20.0, 120.0);
        assert!(p(MarketingChannel::Influencer) > p(MarketingChannel::Email));
        assert!(p(MarketingChannel::Email) > p(MarketingChannel::Ad));
    }
}
