//! Slot-by-round tables: forecast probabilities, favorite baselines,
//! ground-truth outcomes, and solver selections.
//!
//! The bracket tree is never materialized. Every table is a flat
//! slots x rounds matrix; tournament structure lives entirely in
//! power-of-two stride arithmetic over slot indices.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::{NUM_ROUNDS, NUM_SLOTS};

/// Column layout of the legacy wide dataset: per-round advance
/// probabilities, then per-round actual outcomes, then per-round
/// favorite-baseline probabilities.
pub const WIDE_PROB_COLS: std::ops::Range<usize> = 2..8;
pub const WIDE_TRUTH_COLS: std::ops::Range<usize> = 8..14;
pub const WIDE_BASELINE_COLS: std::ops::Range<usize> = 14..20;

/// Errors raised by table construction and persistence
#[derive(Debug, Error)]
pub enum TableError {
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },
    #[error("probability out of range at slot {slot}, round {round}: {value}")]
    ProbabilityOutOfRange {
        slot: usize,
        round: usize,
        value: f64,
    },
    #[error("failed to read or write table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A slots x rounds matrix of f64 values, stored flat in row-major order.
///
/// Holds forecast probabilities, 0/1 outcome indicators, and 0/1
/// selection indicators alike; entry `(i, j)` always refers to slot `i`
/// in round `j` (round 0 = opening round).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTable {
    slots: usize,
    rounds: usize,
    values: Vec<f64>,
}

impl RoundTable {
    /// All-zero table of the given dimensions
    pub fn zeros(slots: usize, rounds: usize) -> Self {
        Self {
            slots,
            rounds,
            values: vec![0.0; slots * rounds],
        }
    }

    /// Build from per-slot rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, TableError> {
        let slots = rows.len();
        let rounds = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut values = Vec::with_capacity(slots * rounds);
        for (slot, row) in rows.iter().enumerate() {
            if row.len() != rounds {
                return Err(TableError::ShapeMismatch {
                    expected: format!("{} columns in every row", rounds),
                    found: format!("{} columns in row {}", row.len(), slot),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            slots,
            rounds,
            values,
        })
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    // Flat indexing would silently alias a neighboring slot's cell on a
    // bad round index, so bounds are checked in release builds too.
    #[inline]
    fn index(&self, slot: usize, round: usize) -> usize {
        assert!(
            slot < self.slots && round < self.rounds,
            "entry ({}, {}) out of bounds for {}x{} table",
            slot,
            round,
            self.slots,
            self.rounds
        );
        slot * self.rounds + round
    }

    #[inline]
    pub fn get(&self, slot: usize, round: usize) -> f64 {
        self.values[self.index(slot, round)]
    }

    #[inline]
    pub fn set(&mut self, slot: usize, round: usize, value: f64) {
        let idx = self.index(slot, round);
        self.values[idx] = value;
    }

    /// True if both tables have the same dimensions
    pub fn same_shape(&self, other: &RoundTable) -> bool {
        self.slots == other.slots && self.rounds == other.rounds
    }

    /// Slot indices with a 1 in the given round column
    pub fn winners(&self, round: usize) -> Vec<usize> {
        (0..self.slots)
            .filter(|&i| self.get(i, round) > 0.5)
            .collect()
    }

    fn check_probabilities(&self) -> Result<(), TableError> {
        for slot in 0..self.slots {
            for round in 0..self.rounds {
                let value = self.get(slot, round);
                if !(0.0..=1.0).contains(&value) || value.is_nan() {
                    return Err(TableError::ProbabilityOutOfRange { slot, round, value });
                }
            }
        }
        Ok(())
    }
}

/// Forecast input for one bracket: named fields instead of the legacy
/// positional-column contract, same semantic groupings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastTable {
    /// Probability that each slot advances through each round
    pub probs: RoundTable,
    /// Favorite-baseline probability used to normalize chalk distance
    pub baseline: RoundTable,
    /// Actual 0/1 outcomes, present only when scoring is wanted
    pub truth: Option<RoundTable>,
}

impl ForecastTable {
    /// Validate shapes and probability ranges and assemble the table.
    pub fn new(
        probs: RoundTable,
        baseline: RoundTable,
        truth: Option<RoundTable>,
    ) -> Result<Self, TableError> {
        if !probs.same_shape(&baseline) {
            return Err(TableError::ShapeMismatch {
                expected: format!("baseline of {}x{}", probs.slots(), probs.rounds()),
                found: format!("baseline of {}x{}", baseline.slots(), baseline.rounds()),
            });
        }
        if let Some(t) = &truth {
            if !probs.same_shape(t) {
                return Err(TableError::ShapeMismatch {
                    expected: format!("truth of {}x{}", probs.slots(), probs.rounds()),
                    found: format!("truth of {}x{}", t.slots(), t.rounds()),
                });
            }
        }
        probs.check_probabilities()?;
        baseline.check_probabilities()?;
        Ok(Self {
            probs,
            baseline,
            truth,
        })
    }

    pub fn slots(&self) -> usize {
        self.probs.slots()
    }

    pub fn rounds(&self) -> usize {
        self.probs.rounds()
    }

    /// Ingest the legacy wide layout: 64 rows, at least 20 columns, with
    /// probabilities in columns [2,8), outcomes in [8,14), and favorite
    /// baselines in [14,20).
    pub fn from_wide_rows(rows: &[Vec<f64>]) -> Result<Self, TableError> {
        if rows.len() != NUM_SLOTS {
            return Err(TableError::ShapeMismatch {
                expected: format!("{} rows", NUM_SLOTS),
                found: format!("{} rows", rows.len()),
            });
        }
        let mut probs = RoundTable::zeros(NUM_SLOTS, NUM_ROUNDS);
        let mut truth = RoundTable::zeros(NUM_SLOTS, NUM_ROUNDS);
        let mut baseline = RoundTable::zeros(NUM_SLOTS, NUM_ROUNDS);
        for (slot, row) in rows.iter().enumerate() {
            if row.len() < WIDE_BASELINE_COLS.end {
                return Err(TableError::ShapeMismatch {
                    expected: format!("at least {} columns", WIDE_BASELINE_COLS.end),
                    found: format!("{} columns in row {}", row.len(), slot),
                });
            }
            for round in 0..NUM_ROUNDS {
                probs.set(slot, round, row[WIDE_PROB_COLS.start + round]);
                truth.set(slot, round, row[WIDE_TRUTH_COLS.start + round]);
                baseline.set(slot, round, row[WIDE_BASELINE_COLS.start + round]);
            }
        }
        Self::new(probs, baseline, Some(truth))
    }

    /// Load a table from a JSON file
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let contents = std::fs::read_to_string(path)?;
        let table: Self = serde_json::from_str(&contents)?;
        Self::new(table.probs, table.baseline, table.truth)
    }

    /// Save the table to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
