// Adapters layer: concrete implementations of the domain ports.

pub mod trial_division;

pub use trial_division::TrialDivision;
