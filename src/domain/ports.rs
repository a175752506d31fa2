/// Primality predicate the decomposer is built on.
///
/// Implementations must be pure and total over all integers: negative values
/// and 0/1 are simply not prime. Correctness of every decomposition rests on
/// this predicate being correct up to the largest number scanned.
pub trait PrimalityTest: Send + Sync {
    fn is_prime(&self, x: i64) -> bool;
}
