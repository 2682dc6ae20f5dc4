//! Bracket model construction, solving, and result extraction
//!
//! One binary variable per (slot, round): "this slot wins through this
//! round". Legality of the bracket is enforced with two constraint
//! families over the flat slot array:
//!
//! - per-slot elimination monotonicity, `x[i][j+1] <= x[i][j]`
//! - exactly one winner per contiguous block of `2^(j+1)` slots in round
//!   `j` (the last round's block is the whole field, so this includes the
//!   single-champion rule)
//!
//! A pairwise-balance encoding with a separate global champion constraint
//! would admit the same optima, but is weaker per-node; the exact
//! one-per-block form is used exclusively and the two are never mixed.

use std::time::{Duration, Instant};

use good_lp::solvers::SolutionStatus;
use good_lp::{
    constraint, default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable,
};

use bracket_core::{ForecastTable, RoundTable, TableError, POINT_SCHEDULE};

use crate::error::{OptimizeError, SolveStatus};

/// Tunables for one optimization run
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Weight each round's expected picks by the point schedule; when
    /// false the objective is raw expected survival probability
    pub point_weighted: bool,
    /// Wall clock budget handed to the backend; on expiry the best
    /// incumbent is returned instead of an error
    pub time_limit_secs: f64,
    /// Points per correct pick per round, only read when point-weighted
    pub point_schedule: Vec<f64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            point_weighted: true,
            time_limit_secs: 60.0,
            point_schedule: POINT_SCHEDULE.to_vec(),
        }
    }
}

/// A solved bracket: the 0/1 selection table plus solve metadata
#[derive(Debug, Clone)]
pub struct BracketSolution {
    /// slots x rounds 0/1 table; entry (i, j) = 1 means slot i is picked
    /// to win through round j
    pub picks: RoundTable,
    /// Objective value of the returned picks under the configured weighting
    pub objective: f64,
    pub status: SolveStatus,
    pub solve_time: Duration,
}

/// Builds and solves bracket selection models
#[derive(Debug, Clone, Default)]
pub struct BracketOptimizer {
    config: OptimizerConfig,
}

impl BracketOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Pick the expected-score-maximal legal bracket within the given
    /// per-round distance-from-chalk budgets.
    ///
    /// Budgets and table shape are validated before any model is built;
    /// infeasibility under valid inputs is the backend's verdict and is
    /// surfaced as [`OptimizeError::Infeasible`] without retrying.
    pub fn optimize(
        &self,
        table: &ForecastTable,
        budgets: &[f64],
    ) -> Result<BracketSolution, OptimizeError> {
        let slots = table.slots();
        let rounds = table.rounds();
        self.validate(slots, rounds, budgets)?;

        let mut vars = variables!();
        let grid: Vec<Vec<Variable>> = (0..slots)
            .map(|_| (0..rounds).map(|_| vars.add(variable().binary())).collect())
            .collect();

        let mut objective = Expression::with_capacity(slots * rounds);
        for (i, row) in grid.iter().enumerate() {
            for (j, &var) in row.iter().enumerate() {
                objective.add_mul(self.weight(j) * table.probs.get(i, j), var);
            }
        }

        let mut problem = vars.maximise(objective).using(default_solver);
        problem.set_parameter("log", "0");
        problem.set_parameter("sec", &format!("{}", self.config.time_limit_secs));

        // A slot eliminated in round j stays eliminated
        for row in &grid {
            for j in 0..rounds - 1 {
                problem = problem.with(constraint!(row[j + 1] <= row[j]));
            }
        }

        // Exactly one slot per bracket subtree survives each round
        for j in 0..rounds {
            let block = 1 << (j + 1);
            for start in (0..slots).step_by(block) {
                let mut alive = Expression::with_capacity(block);
                for i in start..start + block {
                    alive.add_mul(1.0, grid[i][j]);
                }
                problem = problem.with(constraint!(alive == 1.0));
            }
        }

        // Per-round cap on probability mass relative to the chalk baseline
        for j in 0..rounds {
            let norm: f64 = (0..slots)
                .map(|i| table.probs.get(i, j) * table.baseline.get(i, j))
                .sum();
            let mut mass = Expression::with_capacity(slots);
            for (i, row) in grid.iter().enumerate() {
                mass.add_mul(table.probs.get(i, j), row[j]);
            }
            problem = problem.with(constraint!(mass <= budgets[j] * norm));
        }

        let start = Instant::now();
        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Err(OptimizeError::Infeasible),
            Err(ResolutionError::Unbounded) => return Err(OptimizeError::Unbounded),
            Err(other) => return Err(OptimizeError::Solver(other.to_string())),
        };
        let solve_time = start.elapsed();

        let status = backend_status(solution.status());
        let picks = extract_picks(&solution, &grid);
        let objective = self.eval_objective(table, &picks);

        Ok(BracketSolution {
            picks,
            objective,
            status,
            solve_time,
        })
    }

    fn validate(&self, slots: usize, rounds: usize, budgets: &[f64]) -> Result<(), OptimizeError> {
        if rounds == 0 || slots != 1usize << rounds {
            return Err(TableError::ShapeMismatch {
                expected: format!("2^{} = {} slots", rounds, 1usize << rounds),
                found: format!("{} slots over {} rounds", slots, rounds),
            }
            .into());
        }
        if budgets.len() != rounds {
            return Err(OptimizeError::BudgetLength {
                expected: rounds,
                found: budgets.len(),
            });
        }
        for (round, &value) in budgets.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(OptimizeError::InvalidBudget { round, value });
            }
        }
        if self.config.point_weighted && self.config.point_schedule.len() != rounds {
            return Err(OptimizeError::ScheduleLength {
                expected: rounds,
                found: self.config.point_schedule.len(),
            });
        }
        Ok(())
    }

    fn weight(&self, round: usize) -> f64 {
        if self.config.point_weighted {
            self.config.point_schedule[round]
        } else {
            1.0
        }
    }

    fn eval_objective(&self, table: &ForecastTable, picks: &RoundTable) -> f64 {
        let mut total = 0.0;
        for i in 0..picks.slots() {
            for j in 0..picks.rounds() {
                total += picks.get(i, j) * table.probs.get(i, j) * self.weight(j);
            }
        }
        total
    }
}

/// Map the backend's verdict onto the two statuses callers act on:
/// anything short of proven optimality (time limit, gap limit) is a
/// best-effort incumbent.
fn backend_status(status: SolutionStatus) -> SolveStatus {
    match status {
        SolutionStatus::Optimal => SolveStatus::Optimal,
        _ => SolveStatus::FeasibleTimeout,
    }
}

/// Read the solved variable grid back into a 0/1 selection table.
///
/// Only reachable once the backend has produced a solution, so the
/// "never read an unsolved model" precondition holds by construction.
fn extract_picks(solution: &impl Solution, grid: &[Vec<Variable>]) -> RoundTable {
    let rounds = grid.first().map(|row| row.len()).unwrap_or(0);
    let mut picks = RoundTable::zeros(grid.len(), rounds);
    for (i, row) in grid.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            if solution.value(var) > 0.5 {
                picks.set(i, j, 1.0);
            }
        }
    }
    picks
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
