use serde::{Deserialize, Serialize};

/// Two primes summing to the even number they decompose.
///
/// `first` is the smallest qualifying addend found by the ascending scan, so
/// `first <= second` is typical but not an enforced invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePair {
    pub first: i64,
    pub second: i64,
}

impl PrimePair {
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }

    pub fn sum(&self) -> i64 {
        self.first + self.second
    }
}

/// Outcome of a decomposition search.
///
/// `NotFound` covers odd input, input below 4, and even numbers with no prime
/// pair in the scanned range. It is a value, not an error: callers must treat
/// it as "no decomposition exists" rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decomposition {
    Found(PrimePair),
    NotFound,
}

impl Decomposition {
    pub fn pair(&self) -> Option<PrimePair> {
        match self {
            Decomposition::Found(pair) => Some(*pair),
            Decomposition::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Decomposition::Found(_))
    }
}

/// An even number together with its decomposition outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub number: i64,
    pub decomposition: Decomposition,
}
