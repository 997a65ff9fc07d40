//! Fixed policy constants shared by the generator and the scorer.

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 12;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 20;

/// Synthesis attempts before generation gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 20;

/// Replacement draws per adjacent duplicate before falling back to another class.
pub const MAX_REPAIR_RETRIES: usize = 10;

/// Length threshold used by the two scorer length criteria.
pub const SCORER_LENGTH_THRESHOLD: usize = 8;

/// Highest score the strength scorer can award.
pub const MAX_SCORE: u8 = 8;
