#![deny(unreachable_pub)]

//! Core logic for the Hindsight forecasting game.
//!
//! The game shows the player obscured historical economic data; the player
//! answers with four cumulative return predictions and a four-way portfolio
//! split, both of which must stay internally consistent while being edited:
//!
//! - [`PredictionVector`]: P(>15%) <= P(>10%) <= P(>5%) <= P(>0%) after
//!   every slider edit, maintained by the constraint engine
//! - [`AllocationVector`]: stocks + bonds + gold + cash == 100, with cash as
//!   an auto-computed (but overridable) remainder slot
//!
//! Both engines are pure `(current, edit) -> new` functions; the host UI owns
//! the state and re-invokes them on every change. [`Submission`] freezes the
//! finished vectors into the payload the remote scoring service expects.

// Core modules
mod consts;
mod errors;
mod helpers;

// Feature modules
mod allocation;
mod prediction;
mod submission;

// Re-exports
pub use allocation::{AllocationCheck, AllocationPreset, AllocationVector, AssetField, CashMode};
pub use consts::{MAX_RATIONALE_LEN, MIN_CONFIDENCE, PROB_EPSILON, TOTAL_ALLOCATION};
pub use errors::{AllocationError, SubmissionError};
pub use helpers::{clamp_percent, clamp_probability, format_percent};
pub use prediction::{
    flip_direction, set_confidence, Direction, Outlook, PredictionVector, ThresholdField,
    THRESHOLD_COUNT,
};
pub use submission::{AllocationPayload, PredictionsPayload, Submission};
