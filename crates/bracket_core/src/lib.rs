pub mod score;
pub mod sigmoid;
pub mod table;

// Re-export core bracket logic (not optimizer-specific)
pub use score::*;
pub use sigmoid::sigmoid;
pub use table::*;

/// Default number of entrant slots in the opening round
pub const NUM_SLOTS: usize = 64;

/// Default number of rounds (log2 of the slot count)
pub const NUM_ROUNDS: usize = 6;

/// Points awarded per correct pick in each round, doubling round over round
pub const POINT_SCHEDULE: [f64; NUM_ROUNDS] = [10.0, 20.0, 40.0, 80.0, 160.0, 320.0];

/// Score earned for a round with zero mispicks
pub const PERFECT_ROUND_SCORE: f64 = 320.0;
