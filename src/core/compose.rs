use crate::core::decompose::Decomposer;
use crate::core::range::range;
use crate::domain::model::Composition;
use crate::domain::ports::PrimalityTest;
use crate::utils::error::Result;
use crate::utils::validation::validate_bounds;

/// Applies the decomposer to every even number in a bounded range.
pub struct Composer<P: PrimalityTest> {
    decomposer: Decomposer<P>,
}

impl<P: PrimalityTest> Composer<P> {
    pub fn new(primality: P) -> Self {
        Self {
            decomposer: Decomposer::new(primality),
        }
    }

    /// Decompose every even number from `low` rounded up to even, up to but
    /// excluding `high` rounded down to even. Requires `low < high`.
    pub fn compositions(&self, low: i64, high: i64) -> Result<Vec<Composition>> {
        validate_bounds(low, high)?;

        let lo = if low % 2 == 0 { low } else { low + 1 };
        let hi = if high % 2 == 0 { high } else { high - 1 };

        let evens = range(lo, hi, 2)?;
        tracing::debug!(
            "Composing {} even numbers in [{}, {})",
            evens.len(),
            lo,
            hi
        );

        let mut records = Vec::with_capacity(evens.len());
        for n in evens {
            records.push(Composition {
                number: n,
                decomposition: self.decomposer.decompose(n)?,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TrialDivision;
    use crate::domain::model::Decomposition;

    fn composer() -> Composer<TrialDivision> {
        Composer::new(TrialDivision)
    }

    #[test]
    fn test_even_bounds_exclude_high() {
        let records = composer().compositions(20, 30).unwrap();
        let numbers: Vec<i64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![20, 22, 24, 26, 28]);

        for record in &records {
            match record.decomposition {
                Decomposition::Found(pair) => assert_eq!(pair.sum(), record.number),
                Decomposition::NotFound => panic!("no pair for {}", record.number),
            }
        }
    }

    #[test]
    fn test_odd_bounds_normalize() {
        let from_odd = composer().compositions(21, 29).unwrap();
        let from_even = composer().compositions(22, 28).unwrap();
        assert_eq!(from_odd, from_even);

        let numbers: Vec<i64> = from_odd.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![22, 24, 26]);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(composer().compositions(30, 20).is_err());
        assert!(composer().compositions(20, 20).is_err());
    }

    #[test]
    fn test_empty_after_normalization() {
        // (21, 22) normalizes to [22, 22), which holds no even numbers.
        assert!(composer().compositions(21, 22).unwrap().is_empty());
    }
}
