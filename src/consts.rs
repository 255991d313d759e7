//! Shared constants for the game core.

/// Tolerance for floating-point probability comparisons.
pub const PROB_EPSILON: f64 = 1e-9;

/// Every allocation must total exactly this many percent before submission.
pub const TOTAL_ALLOCATION: u32 = 100;

/// Maximum length of the free-text rationale accepted by the scoring service.
pub const MAX_RATIONALE_LEN: usize = 500;

/// Lower bound of the confidence half-interval in the Yes/No decomposition.
pub const MIN_CONFIDENCE: f64 = 0.5;
