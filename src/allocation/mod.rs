//! Sum-constrained portfolio allocation.
//!
//! - **normalizer**: single-field edits with cash as the remainder slot,
//!   preset application, and the pre-submission total check
//! - **presets**: the named one-click mixes

mod normalizer;
mod presets;

pub use normalizer::*;
pub use presets::*;
