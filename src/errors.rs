use thiserror::Error;

/// Allocation-level failures.
///
/// The normalizer itself is total and never fails; these arise only at the
/// validation boundary (preset application and the pre-submission check).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("allocation must sum to 100, got {total} (delta {delta:+})")]
    SumMismatch { total: u32, delta: i32 },
    #[error("preset does not sum to 100, got {total}")]
    InvalidPreset { total: u32 },
}

/// Failures raised when freezing user input into a submission payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error("predictions are not monotonic: P(>15%) <= P(>10%) <= P(>5%) <= P(>0%) must hold")]
    NonMonotonic,
    #[error("rationale is {len} chars, max {max}")]
    RationaleTooLong { len: usize, max: usize },
}
