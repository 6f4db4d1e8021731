//! Objective score composition.
//!
//! Every catalog course gets an integer score; the solver maximizes the
//! sum of scores over selected courses. The score blends:
//!
//! - a credit-proportional base, so heavier courses are worth more
//! - seeded uniform noise for non-fixed courses, so different seeds
//!   favor different feasible regions
//! - a "lucky day" bonus (`seed mod 5`) that tilts each seed toward a
//!   different weekday
//! - per-meeting penalties for the caller's soft preferences
//!
//! Noise is drawn from a ChaCha stream seeded once per request and
//! consumed in catalog order, which makes scores reproducible across
//! runs and platforms. Fixed courses draw no noise, so confirmed
//! selections are never destabilized by the seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{Catalog, Preferences};

/// Number of weekdays eligible as the lucky day (`seed mod 5`).
const LUCKY_DAY_MODULUS: u64 = 5;

/// Tunable scoring magnitudes and cutoffs.
///
/// Defaults reproduce the documented behavior; all values are per
/// matching meeting where applicable, additive and uncapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Base score per credit.
    pub credit_weight: i64,
    /// Noise is uniform in `[-noise_amplitude, +noise_amplitude]`.
    pub noise_amplitude: i64,
    /// Bonus per meeting falling on the lucky day.
    pub lucky_day_bonus: i64,
    /// Penalty per meeting starting before `morning_cutoff`.
    pub morning_penalty: i64,
    /// Penalty per meeting ending after `evening_cutoff`.
    pub evening_penalty: i64,
    /// Penalty per meeting overlapping `[lunch_start, lunch_end)`.
    pub lunch_penalty: i64,
    /// Morning cutoff (hours).
    pub morning_cutoff: f64,
    /// Evening cutoff (hours).
    pub evening_cutoff: f64,
    /// Lunch window start (hours).
    pub lunch_start: f64,
    /// Lunch window end (hours).
    pub lunch_end: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            credit_weight: 10,
            noise_amplitude: 30,
            lucky_day_bonus: 20,
            morning_penalty: 50,
            evening_penalty: 50,
            lunch_penalty: 20,
            morning_cutoff: 11.0,
            evening_cutoff: 18.0,
            lunch_start: 12.0,
            lunch_end: 13.0,
        }
    }
}

/// The weekday favored by the given seed.
pub fn lucky_day(seed: u64) -> u8 {
    (seed % LUCKY_DAY_MODULUS) as u8
}

/// Composes per-course scores in catalog order.
///
/// `fixed` holds catalog positions of confirmed selections; they skip
/// the noise draw entirely (the stream position advances only on
/// non-fixed courses, matching the draw-per-candidate contract).
pub fn compose_scores(
    catalog: &Catalog,
    fixed: &[usize],
    preferences: &Preferences,
    seed: u64,
    weights: &ScoreWeights,
) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lucky = lucky_day(seed);

    catalog
        .courses()
        .iter()
        .enumerate()
        .map(|(i, course)| {
            let mut score = i64::from(course.credits) * weights.credit_weight;

            if !fixed.contains(&i) {
                score += rng.random_range(-weights.noise_amplitude..=weights.noise_amplitude);
            }

            for m in &course.meetings {
                if m.day == lucky {
                    score += weights.lucky_day_bonus;
                }
                if preferences.avoid_morning && m.start < weights.morning_cutoff {
                    score -= weights.morning_penalty;
                }
                if preferences.avoid_evening && m.end > weights.evening_cutoff {
                    score -= weights.evening_penalty;
                }
                if preferences.prefer_long_break
                    && m.start < weights.lunch_end
                    && m.end > weights.lunch_start
                {
                    score -= weights.lunch_penalty;
                }
            }

            score
        })
        .collect()
}
