//! Run configuration loaded from TOML

use bracket_core::point_schedule;
use bracket_opt::OptimizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one optimization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Per-round distance-from-chalk budgets, each in [0, 1]; an empty
    /// list means no restriction (all 1.0, sized to the table)
    #[serde(default)]
    pub budgets: Vec<f64>,
    /// Wall clock budget for the solver backend
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: f64,
    /// Weight the objective by the escalating point schedule
    #[serde(default = "default_point_weighted")]
    pub point_weighted: bool,
}

fn default_time_limit() -> f64 {
    60.0
}

fn default_point_weighted() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            budgets: Vec::new(),
            time_limit_secs: default_time_limit(),
            point_weighted: default_point_weighted(),
        }
    }
}

impl RunConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Optimizer settings implied by this run config, with the point
    /// schedule sized to the table's round count
    pub fn optimizer_config(&self, rounds: usize) -> OptimizerConfig {
        OptimizerConfig {
            point_weighted: self.point_weighted,
            time_limit_secs: self.time_limit_secs,
            point_schedule: point_schedule(rounds),
        }
    }

    /// Budgets sized to the table; an empty config means no restriction
    pub fn budgets_for(&self, rounds: usize) -> Vec<f64> {
        if self.budgets.is_empty() {
            vec![1.0; rounds]
        } else {
            self.budgets.clone()
        }
    }
}
