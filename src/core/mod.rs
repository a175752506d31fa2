pub mod compose;
pub mod decompose;
pub mod range;

pub use crate::domain::model::{Composition, Decomposition, PrimePair};
pub use crate::domain::ports::PrimalityTest;
pub use crate::utils::error::Result;
