//! Bracket scoring against actual tournament outcomes

use crate::table::{RoundTable, TableError};
use crate::PERFECT_ROUND_SCORE;

/// Point schedule for a bracket of the given depth: 10 points per
/// correct opening-round pick, doubling every round.
pub fn point_schedule(rounds: usize) -> Vec<f64> {
    (0..rounds).map(|round| 10.0 * (1u64 << round) as f64).collect()
}

/// Score each round of a picked bracket against the actual outcomes.
///
/// A round starts at the perfect score and loses `schedule[round]` points
/// per mispicked slot. Comparing two 0/1 columns by absolute difference
/// counts every mispick twice (once as the slot wrongly picked, once as
/// the slot wrongly skipped), hence the halving.
pub fn per_round_score(
    picks: &RoundTable,
    truth: &RoundTable,
    schedule: &[f64],
) -> Result<Vec<f64>, TableError> {
    if !picks.same_shape(truth) {
        return Err(TableError::ShapeMismatch {
            expected: format!("truth of {}x{}", picks.slots(), picks.rounds()),
            found: format!("truth of {}x{}", truth.slots(), truth.rounds()),
        });
    }
    if schedule.len() != picks.rounds() {
        return Err(TableError::ShapeMismatch {
            expected: format!("point schedule of length {}", picks.rounds()),
            found: format!("point schedule of length {}", schedule.len()),
        });
    }

    let mut scores = Vec::with_capacity(picks.rounds());
    for round in 0..picks.rounds() {
        let diff: f64 = (0..picks.slots())
            .map(|slot| (picks.get(slot, round) - truth.get(slot, round)).abs())
            .sum();
        scores.push(PERFECT_ROUND_SCORE - schedule[round] * diff / 2.0);
    }
    Ok(scores)
}

/// Total bracket score: sum of the per-round scores
pub fn total_score(
    picks: &RoundTable,
    truth: &RoundTable,
    schedule: &[f64],
) -> Result<f64, TableError> {
    Ok(per_round_score(picks, truth, schedule)?.iter().sum())
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
