//! Submission payload for the remote scoring service.
//!
//! The wire shape is a fixed contract: four probability fields, four
//! percentage fields, a scenario identifier and a free-text rationale. The
//! vectors are serialized verbatim: this module freezes them, it never
//! adjusts them. A vector that fails validation blocks submission with the
//! reported delta; nothing is silently corrected and no partial payload is
//! ever produced.

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationVector;
use crate::consts::MAX_RATIONALE_LEN;
use crate::errors::SubmissionError;
use crate::prediction::PredictionVector;

/// The four threshold probabilities as the scoring service names them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionsPayload {
    #[serde(rename = "above_15pct")]
    pub above_15: f64,
    #[serde(rename = "above_10pct")]
    pub above_10: f64,
    #[serde(rename = "above_5pct")]
    pub above_5: f64,
    #[serde(rename = "above_0pct")]
    pub above_0: f64,
}

impl From<&PredictionVector> for PredictionsPayload {
    fn from(v: &PredictionVector) -> Self {
        Self {
            above_15: v.above15,
            above_10: v.above10,
            above_5: v.above5,
            above_0: v.above0,
        }
    }
}

/// The four asset weights as the scoring service names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPayload {
    pub stocks: u8,
    pub bonds: u8,
    pub cash: u8,
    pub gold: u8,
}

impl From<&AllocationVector> for AllocationPayload {
    fn from(v: &AllocationVector) -> Self {
        Self {
            stocks: v.stocks,
            bonds: v.bonds,
            cash: v.cash,
            gold: v.gold,
        }
    }
}

/// A complete, validated game submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub scenario_id: i64,
    pub predictions: PredictionsPayload,
    pub allocation: AllocationPayload,
    pub rationale: String,
}

impl Submission {
    /// Freeze the player's vectors into a submission payload.
    ///
    /// The gate before anything leaves the client: rejects an allocation
    /// whose total is not 100 (naming the delta for display), a prediction
    /// vector that is not monotonic (the engine cannot produce one, but the
    /// scoring service validates independently, so this mirrors its check),
    /// and a rationale over [`MAX_RATIONALE_LEN`] characters.
    pub fn build(
        scenario_id: i64,
        predictions: &PredictionVector,
        allocation: &AllocationVector,
        rationale: impl Into<String>,
    ) -> Result<Submission, SubmissionError> {
        allocation.validate()?;
        if !predictions.is_monotonic() {
            return Err(SubmissionError::NonMonotonic);
        }
        let rationale = rationale.into();
        let len = rationale.chars().count();
        if len > MAX_RATIONALE_LEN {
            return Err(SubmissionError::RationaleTooLong {
                len,
                max: MAX_RATIONALE_LEN,
            });
        }
        Ok(Submission {
            scenario_id,
            predictions: predictions.into(),
            allocation: allocation.into(),
            rationale,
        })
    }
}
