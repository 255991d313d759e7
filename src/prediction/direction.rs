//! Yes/No + confidence presentation of a threshold probability.
//!
//! The UI does not show raw probabilities. Each threshold is presented as a
//! direction ("will returns exceed X%?") plus a confidence slider over
//! [0.5, 1.0]. The mapping is fixed by the scoring service: `Yes` iff the
//! stored probability is >= 0.5, confidence `p` for Yes and `1 - p` for No.
//! This module only converts between the two representations; all constraint
//! logic lives in [`super::engine`].

use serde::{Deserialize, Serialize};

use crate::consts::MIN_CONFIDENCE;
use crate::prediction::{PredictionVector, ThresholdField};

/// Which way the player leans on a threshold question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Yes,
    No,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Yes => Direction::No,
            Direction::No => Direction::Yes,
        }
    }
}

/// A probability decomposed into direction and confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlook {
    pub direction: Direction,
    /// Confidence in the stated direction, in [0.5, 1.0].
    pub confidence: f64,
}

impl Outlook {
    /// Decompose a stored probability. `p = 0.5` reads as Yes at 50%.
    pub fn from_probability(p: f64) -> Outlook {
        if p >= MIN_CONFIDENCE {
            Outlook {
                direction: Direction::Yes,
                confidence: p,
            }
        } else {
            Outlook {
                direction: Direction::No,
                confidence: 1.0 - p,
            }
        }
    }

    /// Recompose into the underlying probability.
    pub fn to_probability(self) -> f64 {
        match self.direction {
            Direction::Yes => self.confidence,
            Direction::No => 1.0 - self.confidence,
        }
    }
}

/// Flip the direction of one threshold, keeping its confidence, and re-run
/// the constraint engine on the resulting probability.
pub fn flip_direction(vector: &PredictionVector, field: ThresholdField) -> PredictionVector {
    let mut outlook = Outlook::from_probability(vector.get(field));
    outlook.direction = outlook.direction.flipped();
    vector.apply_edit(field, outlook.to_probability())
}

/// Set the confidence of one threshold, keeping its direction, and re-run the
/// constraint engine. `confidence` is clamped into [0.5, 1.0] first.
pub fn set_confidence(
    vector: &PredictionVector,
    field: ThresholdField,
    confidence: f64,
) -> PredictionVector {
    let mut outlook = Outlook::from_probability(vector.get(field));
    outlook.confidence = confidence.clamp(MIN_CONFIDENCE, 1.0);
    vector.apply_edit(field, outlook.to_probability())
}
