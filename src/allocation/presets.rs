//! Named allocation presets offered as one-click starting points.
//!
//! Every preset sums to 100 by construction, so applying one through
//! [`AllocationVector::apply_preset`] cannot fail.

use crate::allocation::AllocationVector;

/// One-click portfolio mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationPreset {
    /// Equal quarter in each asset class.
    #[default]
    Balanced,
    /// Equity-heavy growth mix.
    Equities,
    /// Bond-heavy defensive mix.
    Defensive,
    /// Everything in cash.
    AllCash,
}

impl AllocationPreset {
    pub const ALL: [AllocationPreset; 4] = [
        AllocationPreset::Balanced,
        AllocationPreset::Equities,
        AllocationPreset::Defensive,
        AllocationPreset::AllCash,
    ];

    /// Display label for the preset button.
    pub fn label(self) -> &'static str {
        match self {
            AllocationPreset::Balanced => "Balanced",
            AllocationPreset::Equities => "Equities",
            AllocationPreset::Defensive => "Defensive",
            AllocationPreset::AllCash => "All cash",
        }
    }

    /// The preset's full allocation vector.
    pub fn vector(self) -> AllocationVector {
        match self {
            AllocationPreset::Balanced => AllocationVector::new(25, 25, 25, 25),
            AllocationPreset::Equities => AllocationVector::new(70, 20, 5, 5),
            AllocationPreset::Defensive => AllocationVector::new(20, 50, 10, 20),
            AllocationPreset::AllCash => AllocationVector::new(0, 0, 0, 100),
        }
    }
}
