pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::TrialDivision;
pub use crate::core::{compose::Composer, decompose::Decomposer};
pub use crate::domain::model::{Composition, Decomposition, PrimePair};
pub use crate::domain::ports::PrimalityTest;
pub use crate::utils::error::{GoldbachError, Result};

/// Goldbach decomposition of a single even number using the built-in
/// trial-division predicate. `Ok(NotFound)` for odd input, input below 4,
/// or (should the conjecture ever fail) an even number with no prime pair.
pub fn goldbach_numbers(n: i64) -> Result<Decomposition> {
    Decomposer::new(TrialDivision).decompose(n)
}

/// Goldbach decompositions for every even number in `[low, high)` after
/// rounding `low` up and `high` down to even. Requires `low < high`.
pub fn goldbach_compositions(low: i64, high: i64) -> Result<Vec<Composition>> {
    Composer::new(TrialDivision).compositions(low, high)
}
