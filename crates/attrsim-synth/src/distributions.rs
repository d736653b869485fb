//! Sampling primitives for the synthetic generator.

use rand::Rng;

/// Draw from N(`mean`, `sd`) via the Box-Muller transform.
///
/// Uses two uniform draws in (0, 1); a draw of exactly zero is rejected and
/// redrawn, since `ln(0)` is undefined.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    let mut u = rng.random::<f64>();
    while u == 0.0 {
        u = rng.random::<f64>();
    }
    let mut v = rng.random::<f64>();
    while v == 0.0 {
        v = rng.random::<f64>();
    }
    let z = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
    mean + sd * z
}

/// Draw from N(`mean`, `sd`), rounded to the nearest integer and clamped to
/// [`min`, `max`].
pub fn clamped_normal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    sd: f64,
    min: f64,
    max: f64,
) -> f64 {
    normal(rng, mean, sd).round().clamp(min, max)
}

/// Pick an item by weight.
///
/// Walks a uniform draw in [0, total) down the weights in order, selecting
/// the item whose weight takes the remainder to or below zero; floating-point
/// edge cases fall back to the last item. Weights may be any positive values,
/// normalized or not. Returns `None` for an empty slice.
pub fn weighted_choice<R, T>(rng: &mut R, items: &[(T, f64)]) -> Option<T>
where
    R: Rng + ?Sized,
    T: Copy,
{
    let (last, _) = *items.last()?;
    let total: f64 = items.iter().map(|(_, weight)| weight).sum();
    let mut remaining = rng.random::<f64>() * total;
    for &(item, weight) in items {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(item);
        }
    }
    Some(last)
}

/// Bernoulli draw.
///
/// Probabilities outside [0, 1] saturate instead of panicking: `p <= 0`
/// never fires, `p >= 1` always fires. Callers feed unclamped probabilities
/// through here.
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn normal_matches_requested_moments() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| normal(&mut rng, 4.0, 2.0)).collect();
        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;
        let mean = draws.iter().sum::<f64>() / count;
        let variance = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / count;
        assert!((mean - 4.0).abs() < 0.1, "mean = {mean}");
        assert!((variance.sqrt() - 2.0).abs() < 0.1, "sd = {}", variance.sqrt());
    }

    #[test]
    fn normal_draws_are_finite() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            assert!(normal(&mut rng, 0.0, 1.0).is_finite());
        }
    }

    #[test]
    fn clamped_normal_yields_integers_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5_000 {
            let draw = clamped_normal(&mut rng, 4.0, 2.0, 0.0, 10.0);
            assert!((0.0..=10.0).contains(&draw), "draw = {draw}");
            assert!((draw - draw.round()).abs() < f64::EPSILON, "draw = {draw}");
        }
    }

    #[test]
    fn weighted_choice_tracks_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = [("a", 0.5), ("b", 0.3), ("c", 0.2)];
        let n = 10_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            match weighted_choice(&mut rng, &items) {
                Some("a") => counts[0] += 1,
                Some("b") => counts[1] += 1,
                Some("c") => counts[2] += 1,
                other => panic!("unexpected draw: {other:?}"),
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let share = |c: usize| c as f64 / n as f64;
        assert!((share(counts[0]) - 0.5).abs() < 0.03);
        assert!((share(counts[1]) - 0.3).abs() < 0.03);
        assert!((share(counts[2]) - 0.2).abs() < 0.03);
    }

    #[test]
    fn weighted_choice_supports_unnormalized_weights() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = [(1, 30.0), (2, 10.0)];
        let n = 4_000;
        let ones = (0..n)
            .filter(|_| weighted_choice(&mut rng, &items) == Some(1))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let share = ones as f64 / f64::from(n);
        assert!((share - 0.75).abs() < 0.05, "share = {share}");
    }

    #[test]
    fn weighted_choice_on_empty_slice_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: [(u8, f64); 0] = [];
        assert_eq!(weighted_choice(&mut rng, &items), None);
    }

    #[test]
    fn weighted_choice_single_item_always_wins() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(weighted_choice(&mut rng, &[("only", 0.001)]), Some("only"));
        }
    }

    #[test]
    fn bernoulli_saturates_outside_unit_interval() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1_000 {
            assert!(!bernoulli(&mut rng, -0.5));
            assert!(bernoulli(&mut rng, 1.5));
        }
    }

    #[test]
    fn bernoulli_rate_tracks_probability() {
        let mut rng = StdRng::seed_from_u64(21);
        let n = 10_000;
        let hits = (0..n).filter(|_| bernoulli(&mut rng, 0.3)).count();
        #[allow(clippy::cast_precision_loss)]
        let rate = hits as f64 / f64::from(n);
        assert!((rate - 0.3).abs() < 0.03, "rate = {rate}");
    }
}
