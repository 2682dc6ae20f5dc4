//! Bracket Pick Optimizer
//!
//! Formulates "pick a legal single-elimination bracket maximizing expected
//! score, staying within per-round distance-from-chalk budgets" as a binary
//! integer program and hands it to an external MILP backend.
//!
//! The bracket tree is encoded purely through linear constraints over a
//! flat slot array: elimination monotonicity per slot, plus exactly one
//! surviving slot per contiguous block of size 2^(round+1) per round.

mod error;
mod model;

pub use error::*;
pub use model::*;
