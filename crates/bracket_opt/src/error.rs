//! Optimizer error and status types

use bracket_core::TableError;
use thiserror::Error;

/// Errors raised while validating inputs or solving the bracket model
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("distance budget out of range at round {round}: {value}")]
    InvalidBudget { round: usize, value: f64 },
    #[error("expected {expected} distance budgets, found {found}")]
    BudgetLength { expected: usize, found: usize },
    #[error("expected point schedule of length {expected}, found {found}")]
    ScheduleLength { expected: usize, found: usize },
    #[error("no bracket satisfies the distance budgets")]
    Infeasible,
    #[error("model is unbounded; objective coefficients are malformed")]
    Unbounded,
    #[error("solver backend failed: {0}")]
    Solver(String),
}

/// How the backend terminated for a solution it did return.
///
/// A timeout is not a failure: the best incumbent found inside the wall
/// clock budget is a valid, possibly sub-optimal bracket. Callers that
/// care about proven optimality must check this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    FeasibleTimeout,
}
