//! Seeded synthetic forecast generation for dry runs
//!
//! Each slot gets a latent strength; advance probabilities come from
//! squashing strength gaps through the sigmoid, the favorite baseline is
//! each block's best advance probability, and ground truth is the
//! strongest slot advancing everywhere.

use bracket_core::{sigmoid, ForecastTable, RoundTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Steepness of the strength-gap squash; flatter than 1.0 so favorites
/// rarely get near-certain openers
const STRENGTH_SPREAD: f64 = 0.5;

/// Generate a consistent forecast table for a power-of-two field.
pub fn generate_forecast(slots: usize, seed: u64) -> Result<ForecastTable, String> {
    if slots < 2 || !slots.is_power_of_two() {
        return Err(format!("field size must be a power of two, got {}", slots));
    }
    let rounds = slots.trailing_zeros() as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    let strengths: Vec<f64> = (0..slots).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let mut probs = RoundTable::zeros(slots, rounds);
    let mut truth = RoundTable::zeros(slots, rounds);
    for i in 0..slots {
        let mut survival = 1.0;
        for j in 0..rounds {
            let block = 1 << (j + 1);
            let start = i / block * block;
            // Strength of the field the slot must get through this round:
            // the best slot in the half of the block it has not met yet
            let half = block / 2;
            let rival_start = if (i - start) < half { start + half } else { start };
            let rival = (rival_start..rival_start + half)
                .map(|k| strengths[k])
                .fold(f64::MIN, f64::max);
            survival *= sigmoid(strengths[i] - rival, STRENGTH_SPREAD);
            probs.set(i, j, survival);

            let best = (start..start + block)
                .map(|k| strengths[k])
                .fold(f64::MIN, f64::max);
            if strengths[i] == best {
                truth.set(i, j, 1.0);
            }
        }
    }

    // Chalk baseline: every slot in a block carries the block favorite's
    // advance probability for that round
    let mut baseline = RoundTable::zeros(slots, rounds);
    for j in 0..rounds {
        let block = 1 << (j + 1);
        for start in (0..slots).step_by(block) {
            let best = (start..start + block)
                .map(|i| probs.get(i, j))
                .fold(f64::MIN, f64::max);
            for i in start..start + block {
                baseline.set(i, j, best);
            }
        }
    }

    ForecastTable::new(probs, baseline, Some(truth)).map_err(|e| format!("Bad forecast: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(generate_forecast(6, 1).is_err());
        assert!(generate_forecast(1, 1).is_err());
    }

    #[test]
    fn test_shapes_and_ranges() {
        let table = generate_forecast(64, 7).unwrap();
        assert_eq!(table.slots(), 64);
        assert_eq!(table.rounds(), 6);
        // ForecastTable::new already range-checks; spot-check decay
        for i in 0..64 {
            for j in 1..6 {
                assert!(table.probs.get(i, j) <= table.probs.get(i, j - 1));
            }
        }
    }

    #[test]
    fn test_truth_is_a_legal_bracket() {
        let table = generate_forecast(16, 3).unwrap();
        let truth = table.truth.as_ref().unwrap();
        for j in 0..truth.rounds() {
            let block = 1 << (j + 1);
            for start in (0..truth.slots()).step_by(block) {
                let alive: f64 = (start..start + block).map(|i| truth.get(i, j)).sum();
                assert_eq!(alive, 1.0);
            }
        }
    }

    #[test]
    fn test_small_field_scores_with_derived_schedule() {
        // A generated 16-slot table must be scorable with a schedule
        // sized to its own round count
        let table = generate_forecast(16, 5).unwrap();
        let truth = table.truth.as_ref().unwrap();
        let schedule = bracket_core::point_schedule(table.rounds());
        let scores = bracket_core::per_round_score(truth, truth, &schedule).unwrap();
        assert_eq!(scores, vec![320.0; 4]);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = generate_forecast(32, 99).unwrap();
        let b = generate_forecast(32, 99).unwrap();
        assert_eq!(a.probs, b.probs);
        assert_eq!(a.baseline, b.baseline);
    }
}
