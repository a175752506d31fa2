use crate::core::range::range;
use crate::domain::model::{Decomposition, PrimePair};
use crate::domain::ports::PrimalityTest;
use crate::utils::error::Result;

/// Searches for a Goldbach decomposition of a single even number.
pub struct Decomposer<P: PrimalityTest> {
    primality: P,
}

impl<P: PrimalityTest> Decomposer<P> {
    pub fn new(primality: P) -> Self {
        Self { primality }
    }

    /// Return the prime pair `(p, n - p)` with the smallest prime `p` such
    /// that both halves are prime, or `NotFound` when `n` is odd, below 4,
    /// or no candidate in `[2, n)` qualifies.
    pub fn decompose(&self, n: i64) -> Result<Decomposition> {
        if n < 4 || n % 2 != 0 {
            tracing::debug!("n={} is not a decomposable even number", n);
            return Ok(Decomposition::NotFound);
        }

        let candidates = range(2, n, 1)?;
        tracing::debug!("Scanning {} candidates for n={}", candidates.len(), n);

        let found = candidates
            .into_iter()
            .find(|&m| self.primality.is_prime(m) && self.primality.is_prime(n - m));

        match found {
            Some(m) => Ok(Decomposition::Found(PrimePair::new(m, n - m))),
            None => {
                tracing::debug!("No prime pair found for n={}", n);
                Ok(Decomposition::NotFound)
            }
        }
    }
}
