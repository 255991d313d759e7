//! Monotonic cumulative-probability predictions.
//!
//! - **engine**: the constraint engine keeping the four threshold
//!   probabilities monotonic under single-field edits
//! - **direction**: the Yes/No + confidence presentation wrapper

mod direction;
mod engine;

pub use direction::*;
pub use engine::*;
