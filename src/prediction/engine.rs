//! Cumulative-probability constraint engine.
//!
//! The player states four cumulative probabilities for the hidden 12-month
//! return: P(>15%), P(>10%), P(>5%), P(>0%). Cumulative probabilities over
//! nested events must be monotonic (a return above 15% is also above 10%),
//! so every edit to one slider may drag its neighbors:
//!
//! ```text
//! above15 <= above10 <= above5 <= above0
//! ```
//!
//! The engine applies the *minimal* adjustment: the edited field lands exactly
//! on the requested value, looser thresholds below it are raised to meet it,
//! tighter thresholds above it are lowered to meet it, and nothing else moves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::PROB_EPSILON;

/// Number of return thresholds the player predicts against.
pub const THRESHOLD_COUNT: usize = 4;

/// One of the four cumulative return thresholds, ordered tightest to loosest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdField {
    /// P(return > 15%)
    Above15,
    /// P(return > 10%)
    Above10,
    /// P(return > 5%)
    Above5,
    /// P(return > 0%)
    Above0,
}

impl ThresholdField {
    /// All fields, tightest threshold first.
    pub const ALL: [ThresholdField; THRESHOLD_COUNT] = [
        ThresholdField::Above15,
        ThresholdField::Above10,
        ThresholdField::Above5,
        ThresholdField::Above0,
    ];

    /// Position in the tightest-first ordering.
    pub fn index(self) -> usize {
        match self {
            ThresholdField::Above15 => 0,
            ThresholdField::Above10 => 1,
            ThresholdField::Above5 => 2,
            ThresholdField::Above0 => 3,
        }
    }

    /// Display label, e.g. `">15%"`.
    pub fn label(self) -> &'static str {
        match self {
            ThresholdField::Above15 => ">15%",
            ThresholdField::Above10 => ">10%",
            ThresholdField::Above5 => ">5%",
            ThresholdField::Above0 => ">0%",
        }
    }
}

/// The player's four cumulative-probability predictions.
///
/// Constructed monotonic and kept monotonic by [`PredictionVector::apply_edit`];
/// frozen and serialized verbatim into the submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionVector {
    pub above15: f64,
    pub above10: f64,
    pub above5: f64,
    pub above0: f64,
}

impl Default for PredictionVector {
    /// Starting vector for a new game: a mildly bullish, well-spread prior.
    fn default() -> Self {
        Self {
            above15: 0.25,
            above10: 0.40,
            above5: 0.60,
            above0: 0.75,
        }
    }
}

impl PredictionVector {
    /// Probabilities as an array, tightest threshold first.
    pub fn as_array(&self) -> [f64; THRESHOLD_COUNT] {
        [self.above15, self.above10, self.above5, self.above0]
    }

    fn from_array(probs: [f64; THRESHOLD_COUNT]) -> Self {
        Self {
            above15: probs[0],
            above10: probs[1],
            above5: probs[2],
            above0: probs[3],
        }
    }

    /// Probability stored for one field.
    pub fn get(&self, field: ThresholdField) -> f64 {
        self.as_array()[field.index()]
    }

    /// Whether the cumulative ordering invariant holds.
    pub fn is_monotonic(&self) -> bool {
        let p = self.as_array();
        p.windows(2).all(|w| w[0] <= w[1] + PROB_EPSILON)
    }

    /// Set `field` to `value` and restore monotonicity with the minimal
    /// adjustment to the remaining fields.
    ///
    /// Propagation runs outward from the edited index: looser thresholds
    /// (higher index) sitting below `value` are raised to it, tighter
    /// thresholds (lower index) sitting above `value` are lowered to it.
    /// Fields already on the right side of `value` never move, so re-applying
    /// an edit to a consistent vector is a no-op.
    ///
    /// `value` must already be clamped to [0, 1] by the caller; boundary
    /// values 0 and 1 are fine.
    pub fn apply_edit(&self, field: ThresholdField, value: f64) -> PredictionVector {
        let idx = field.index();
        let mut probs = self.as_array();
        probs[idx] = value;

        // Tighter thresholds can only come down to the edited value. min()
        // preserves their relative order, so the tail stays sorted.
        for p in probs.iter_mut().take(idx) {
            if *p > value {
                *p = value;
            }
        }
        // Looser thresholds can only come up to the edited value.
        for p in probs.iter_mut().skip(idx + 1) {
            if *p < value {
                *p = value;
            }
        }

        let updated = Self::from_array(probs);
        if updated != self.with(field, value) {
            debug!(
                field = field.label(),
                value,
                ?updated,
                "monotonicity propagation adjusted neighboring thresholds"
            );
        }
        updated
    }

    /// Copy with one field replaced, no constraint propagation. Internal to
    /// the engine; callers go through [`PredictionVector::apply_edit`].
    fn with(&self, field: ThresholdField, value: f64) -> PredictionVector {
        let mut probs = self.as_array();
        probs[field.index()] = value;
        Self::from_array(probs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_vector(p: [f64; 4]) -> PredictionVector {
        PredictionVector {
            above15: p[0],
            above10: p[1],
            above5: p[2],
            above0: p[3],
        }
    }

    #[test]
    fn test_default_is_monotonic() {
        assert!(PredictionVector::default().is_monotonic());
    }

    #[test]
    fn test_consistent_edit_touches_nothing_else() {
        // An already-consistent edit is a pure set.
        let v = make_vector([0.3, 0.4, 0.6, 0.75]);
        let out = v.apply_edit(ThresholdField::Above10, 0.5);
        assert_eq!(out, make_vector([0.3, 0.5, 0.6, 0.75]));
    }

    #[test]
    fn test_raising_middle_drags_looser_threshold_up() {
        let v = make_vector([0.3, 0.4, 0.6, 0.75]);
        let out = v.apply_edit(ThresholdField::Above10, 0.7);
        assert_eq!(out, make_vector([0.3, 0.7, 0.7, 0.75]));
    }

    #[test]
    fn test_editing_tightest_raises_all_below() {
        let v = make_vector([0.2, 0.3, 0.4, 0.5]);
        let out = v.apply_edit(ThresholdField::Above15, 0.45);
        assert_eq!(out, make_vector([0.45, 0.45, 0.45, 0.5]));
        assert!(out.is_monotonic());
    }

    #[test]
    fn test_editing_loosest_lowers_all_above() {
        let v = make_vector([0.2, 0.3, 0.6, 0.8]);
        let out = v.apply_edit(ThresholdField::Above0, 0.25);
        assert_eq!(out, make_vector([0.2, 0.25, 0.25, 0.25]));
        assert!(out.is_monotonic());
    }

    #[test]
    fn test_lowering_keeps_tighter_fields_ordered() {
        // above15 and above10 both exceed the new above5 value; both drop to
        // it and keep their (now equal) ordering.
        let v = make_vector([0.5, 0.6, 0.7, 0.9]);
        let out = v.apply_edit(ThresholdField::Above5, 0.4);
        assert_eq!(out, make_vector([0.4, 0.4, 0.4, 0.9]));
        assert!(out.is_monotonic());
    }

    #[test]
    fn test_fields_off_the_path_never_move() {
        let v = make_vector([0.1, 0.3, 0.5, 0.9]);
        let out = v.apply_edit(ThresholdField::Above5, 0.4);
        // above15 (0.1) and above0 (0.9) already straddle 0.4.
        assert_eq!(out.above15, 0.1);
        assert_eq!(out.above0, 0.9);
        assert_eq!(out, make_vector([0.1, 0.3, 0.4, 0.9]));
    }

    #[test]
    fn test_idempotent() {
        let v = make_vector([0.3, 0.4, 0.6, 0.75]);
        let once = v.apply_edit(ThresholdField::Above10, 0.7);
        let twice = once.apply_edit(ThresholdField::Above10, 0.7);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_boundary_values() {
        let v = PredictionVector::default();
        let all_up = v.apply_edit(ThresholdField::Above15, 1.0);
        assert_eq!(all_up.as_array(), [1.0, 1.0, 1.0, 1.0]);

        let all_down = v.apply_edit(ThresholdField::Above0, 0.0);
        assert_eq!(all_down.as_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_monotonic_after_every_single_edit() {
        // Sweep each field over a value grid from a fixed start.
        let v = make_vector([0.1, 0.35, 0.55, 0.8]);
        for field in ThresholdField::ALL {
            for step in 0..=20 {
                let value = step as f64 / 20.0;
                let out = v.apply_edit(field, value);
                assert!(out.is_monotonic(), "{field:?} -> {value}: {out:?}");
                assert_eq!(out.get(field), value);
            }
        }
    }
}
