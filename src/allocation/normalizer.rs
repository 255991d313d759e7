//! Sum-constrained portfolio allocation with a remainder slot.
//!
//! The player splits 100% across stocks, bonds, gold and cash. Cash is the
//! remainder slot: whenever one of the other three weights moves, cash
//! absorbs the difference so the total stays at 100. A direct edit to cash is
//! an intentional override: the other weights are left alone and the total
//! is allowed to drift below 100 until the player corrects it (the UI shows a
//! "total != 100%" warning; nothing is silently renormalized). The next edit
//! to a non-cash weight puts cash back in remainder mode.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::TOTAL_ALLOCATION;
use crate::errors::AllocationError;

/// One of the four asset-class weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetField {
    Stocks,
    Bonds,
    Gold,
    Cash,
}

/// Whether cash is tracking the remainder or pinned by a direct edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CashMode {
    /// Cash is recomputed as `100 - stocks - bonds - gold` on every edit to
    /// a non-cash weight.
    #[default]
    Auto,
    /// Cash was set directly; it holds its value (and the total may be under
    /// 100) until the next non-cash edit.
    Overridden,
}

/// Read-only result of the pre-submission total check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationCheck {
    pub valid: bool,
    /// `total - 100`; negative when under-allocated.
    pub delta: i32,
}

/// The player's portfolio split, in whole percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationVector {
    pub stocks: u8,
    pub bonds: u8,
    pub gold: u8,
    pub cash: u8,
    #[serde(default, skip_serializing)]
    pub cash_mode: CashMode,
}

impl Default for AllocationVector {
    /// Starting split for a new game.
    fn default() -> Self {
        Self::new(40, 30, 10, 20)
    }
}

impl AllocationVector {
    /// Build a vector with cash in remainder mode. Weights are taken as
    /// given; use [`AllocationVector::validate`] to enforce the sum.
    pub fn new(stocks: u8, bonds: u8, gold: u8, cash: u8) -> Self {
        Self {
            stocks,
            bonds,
            gold,
            cash,
            cash_mode: CashMode::Auto,
        }
    }

    /// Current weight of one field.
    pub fn get(&self, field: AssetField) -> u8 {
        match field {
            AssetField::Stocks => self.stocks,
            AssetField::Bonds => self.bonds,
            AssetField::Gold => self.gold,
            AssetField::Cash => self.cash,
        }
    }

    /// Sum of all four weights.
    pub fn total(&self) -> u32 {
        self.stocks as u32 + self.bonds as u32 + self.gold as u32 + self.cash as u32
    }

    /// Apply a single-field edit and return the updated vector.
    ///
    /// Editing a non-cash weight clamps it so the non-cash total cannot
    /// exceed 100, recomputes cash as the remainder, and returns cash to
    /// [`CashMode::Auto`]. Editing cash clamps it to the room left by the
    /// other three weights, marks it [`CashMode::Overridden`], and leaves the
    /// other weights untouched; the total may then be under 100.
    ///
    /// `value` is expected pre-clamped to [0, 100] by the caller; the
    /// internal clamps keep every output weight in range regardless.
    pub fn apply_edit(&self, field: AssetField, value: u8) -> AllocationVector {
        let mut next = *self;
        match field {
            AssetField::Cash => {
                let others = self.stocks as u32 + self.bonds as u32 + self.gold as u32;
                let room = TOTAL_ALLOCATION.saturating_sub(others);
                let clamped = (value as u32).min(room) as u8;
                if clamped != value {
                    debug!(requested = value, clamped, "cash edit clamped to remaining room");
                }
                next.cash = clamped;
                next.cash_mode = CashMode::Overridden;
            }
            _ => {
                let others: u32 = [AssetField::Stocks, AssetField::Bonds, AssetField::Gold]
                    .into_iter()
                    .filter(|f| *f != field)
                    .map(|f| self.get(f) as u32)
                    .sum();
                let room = TOTAL_ALLOCATION.saturating_sub(others);
                let clamped = (value as u32).min(room) as u8;
                if clamped != value {
                    debug!(
                        ?field,
                        requested = value,
                        clamped,
                        "weight edit clamped to remaining room"
                    );
                }
                match field {
                    AssetField::Stocks => next.stocks = clamped,
                    AssetField::Bonds => next.bonds = clamped,
                    AssetField::Gold => next.gold = clamped,
                    AssetField::Cash => unreachable!(),
                }
                // Cash absorbs whatever is left; the clamp above keeps this
                // non-negative.
                next.cash = TOTAL_ALLOCATION.saturating_sub(clamped as u32 + others) as u8;
                next.cash_mode = CashMode::Auto;
            }
        }
        next
    }

    /// Replace the whole split atomically with a preset vector.
    ///
    /// Presets are constructed to sum to 100; a vector that does not is
    /// rejected outright rather than partially applied. Cash returns to
    /// remainder mode.
    pub fn apply_preset(preset: &AllocationVector) -> Result<AllocationVector, AllocationError> {
        let total = preset.total();
        if total != TOTAL_ALLOCATION {
            return Err(AllocationError::InvalidPreset { total });
        }
        debug!(?preset, "applying allocation preset");
        Ok(AllocationVector::new(
            preset.stocks,
            preset.bonds,
            preset.gold,
            preset.cash,
        ))
    }

    /// Pre-submission total check. Read-only: reports the delta from 100 for
    /// display, never corrects the vector.
    pub fn check_total(&self) -> AllocationCheck {
        let total = self.total();
        AllocationCheck {
            valid: total == TOTAL_ALLOCATION,
            delta: total as i32 - TOTAL_ALLOCATION as i32,
        }
    }

    /// [`AllocationVector::check_total`] as a `Result`, for the submission path.
    pub fn validate(&self) -> Result<(), AllocationError> {
        let check = self.check_total();
        if check.valid {
            Ok(())
        } else {
            Err(AllocationError::SumMismatch {
                total: self.total(),
                delta: check.delta,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_alloc(stocks: u8, bonds: u8, gold: u8, cash: u8) -> AllocationVector {
        AllocationVector::new(stocks, bonds, gold, cash)
    }

    #[test]
    fn test_default_sums_to_100() {
        let v = AllocationVector::default();
        assert_eq!(v.total(), 100);
        assert_eq!(v.cash_mode, CashMode::Auto);
    }

    #[test]
    fn test_non_cash_edit_recomputes_cash() {
        let v = AllocationVector::default(); // 40/30/10/20
        let out = v.apply_edit(AssetField::Stocks, 55);
        assert_eq!(out.stocks, 55);
        assert_eq!(out.bonds, 30);
        assert_eq!(out.gold, 10);
        assert_eq!(out.cash, 5);
        assert_eq!(out.total(), 100);
    }

    #[test]
    fn test_non_cash_edit_clamps_to_room() {
        // stocks -> 90 with bonds=50, gold=0 leaves
        // room for only 50; cash drops to 0.
        let v = make_alloc(0, 50, 0, 50);
        let out = v.apply_edit(AssetField::Stocks, 90);
        assert_eq!(out.stocks, 50);
        assert_eq!(out.cash, 0);
        assert_eq!(out.total(), 100);
    }

    #[test]
    fn test_non_cash_edit_always_sums_to_100() {
        let v = make_alloc(60, 30, 5, 5);
        for field in [AssetField::Stocks, AssetField::Bonds, AssetField::Gold] {
            for value in 0..=100u8 {
                let out = v.apply_edit(field, value);
                assert_eq!(out.total(), 100, "{field:?} -> {value}: {out:?}");
            }
        }
    }

    #[test]
    fn test_cash_edit_overrides_without_renormalizing() {
        // cash -> 0 is kept verbatim and leaves the sum at 95.
        let v = make_alloc(60, 30, 5, 5);
        let out = v.apply_edit(AssetField::Cash, 0);
        assert_eq!((out.stocks, out.bonds, out.gold, out.cash), (60, 30, 5, 0));
        assert_eq!(out.total(), 95);
        assert_eq!(out.cash_mode, CashMode::Overridden);

        let check = out.check_total();
        assert!(!check.valid);
        assert_eq!(check.delta, -5);
    }

    #[test]
    fn test_cash_edit_clamps_to_room() {
        let v = make_alloc(60, 30, 5, 5);
        let out = v.apply_edit(AssetField::Cash, 40);
        assert_eq!(out.cash, 5); // only 5 points of room left
        assert_eq!(out.total(), 100);
    }

    #[test]
    fn test_non_cash_edit_clears_override() {
        let v = make_alloc(60, 30, 5, 5).apply_edit(AssetField::Cash, 0);
        assert_eq!(v.cash_mode, CashMode::Overridden);

        let out = v.apply_edit(AssetField::Gold, 10);
        assert_eq!(out.cash_mode, CashMode::Auto);
        assert_eq!(out.cash, 0); // 100 - 60 - 30 - 10
        assert_eq!(out.total(), 100);
    }

    #[test]
    fn test_preset_applies_verbatim() {
        // Presets replace the whole vector; no starting state involved.
        let preset = make_alloc(25, 25, 25, 25);
        let out = AllocationVector::apply_preset(&preset).unwrap();
        assert_eq!((out.stocks, out.bonds, out.gold, out.cash), (25, 25, 25, 25));
        assert_eq!(out.cash_mode, CashMode::Auto);
    }

    #[test]
    fn test_preset_rejected_when_sum_is_off() {
        let bad = make_alloc(25, 25, 25, 30);
        let err = AllocationVector::apply_preset(&bad).unwrap_err();
        assert_eq!(err, AllocationError::InvalidPreset { total: 105 });
    }

    #[test]
    fn test_validate_reports_delta() {
        assert!(make_alloc(25, 25, 25, 25).validate().is_ok());
        let err = make_alloc(60, 30, 5, 0).validate().unwrap_err();
        assert_eq!(
            err,
            AllocationError::SumMismatch {
                total: 95,
                delta: -5
            }
        );
    }

    #[test]
    fn test_idempotent_edits() {
        let v = AllocationVector::default();
        let once = v.apply_edit(AssetField::Bonds, 45);
        let twice = once.apply_edit(AssetField::Bonds, 45);
        assert_eq!(once, twice);
    }
}
