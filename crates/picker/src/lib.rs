//! Bracket Pick Runner
//!
//! This crate provides infrastructure for:
//! - Loading forecast tables (JSON, or the legacy wide CSV layout)
//! - Running the MILP bracket optimizer with a TOML run configuration
//! - Scoring picked brackets against actual outcomes
//! - Generating seeded synthetic forecasts for dry runs
//!
//! # Usage
//!
//! ```bash
//! # Optimize a bracket from a forecast table
//! cargo run -p picker -- optimize forecast.json --config run.toml --out picks.json
//!
//! # Score saved picks against the table's recorded outcomes
//! cargo run -p picker -- score picks.json forecast.json
//!
//! # Generate a synthetic 64-slot forecast to experiment with
//! cargo run -p picker -- synth forecast.json --seed 42
//! ```

mod config;
mod data;
mod report;
mod synth;

pub use config::*;
pub use data::*;
pub use report::*;
pub use synth::*;
