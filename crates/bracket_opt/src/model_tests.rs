//! Eager-validation tests; nothing here reaches the solver backend

use super::*;

fn flat_table(slots: usize, rounds: usize) -> ForecastTable {
    let probs = RoundTable::from_rows(&vec![vec![0.5; rounds]; slots]).unwrap();
    let baseline = probs.clone();
    ForecastTable::new(probs, baseline, None).unwrap()
}

fn probability_optimizer() -> BracketOptimizer {
    BracketOptimizer::new(OptimizerConfig {
        point_weighted: false,
        ..OptimizerConfig::default()
    })
}

#[test]
fn test_budget_out_of_range_rejected() {
    let table = flat_table(4, 2);
    let err = probability_optimizer()
        .optimize(&table, &[0.5, 1.5])
        .unwrap_err();
    match err {
        OptimizeError::InvalidBudget { round, value } => {
            assert_eq!(round, 1);
            assert_eq!(value, 1.5);
        }
        other => panic!("expected InvalidBudget, got {:?}", other),
    }
}

#[test]
fn test_negative_budget_rejected() {
    let table = flat_table(4, 2);
    assert!(matches!(
        probability_optimizer().optimize(&table, &[-0.1, 1.0]),
        Err(OptimizeError::InvalidBudget { round: 0, .. })
    ));
}

#[test]
fn test_budget_length_checked() {
    let table = flat_table(4, 2);
    assert!(matches!(
        probability_optimizer().optimize(&table, &[1.0, 1.0, 1.0]),
        Err(OptimizeError::BudgetLength {
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn test_non_power_of_two_field_rejected() {
    let probs = RoundTable::from_rows(&vec![vec![0.5; 2]; 6]).unwrap();
    let table = ForecastTable::new(probs.clone(), probs, None).unwrap();
    assert!(matches!(
        probability_optimizer().optimize(&table, &[1.0, 1.0]),
        Err(OptimizeError::Table(TableError::ShapeMismatch { .. }))
    ));
}

#[test]
fn test_point_schedule_length_checked() {
    let table = flat_table(4, 2);
    // Default schedule has 6 entries, the toy table only 2 rounds
    let optimizer = BracketOptimizer::new(OptimizerConfig::default());
    assert!(matches!(
        optimizer.optimize(&table, &[1.0, 1.0]),
        Err(OptimizeError::ScheduleLength {
            expected: 2,
            found: 6
        })
    ));
}

#[test]
fn test_backend_status_mapping() {
    assert_eq!(
        backend_status(SolutionStatus::Optimal),
        SolveStatus::Optimal
    );
    assert_eq!(
        backend_status(SolutionStatus::TimeLimit),
        SolveStatus::FeasibleTimeout
    );
    assert_eq!(
        backend_status(SolutionStatus::GapLimit),
        SolveStatus::FeasibleTimeout
    );
}

#[test]
fn test_default_config_matches_legacy_run() {
    let config = OptimizerConfig::default();
    assert!(config.point_weighted);
    assert_eq!(config.time_limit_secs, 60.0);
    assert_eq!(config.point_schedule, POINT_SCHEDULE.to_vec());
}
