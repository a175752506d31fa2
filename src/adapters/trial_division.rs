use crate::domain::ports::PrimalityTest;

/// Odd trial division up to the square root. Fine for the small ranges the
/// brute-force decomposer is meant for; swap in a different `PrimalityTest`
/// for anything heavier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn is_prime(&self, x: i64) -> bool {
        if x < 2 {
            return false;
        }
        if x < 4 {
            return true;
        }
        if x % 2 == 0 {
            return false;
        }

        let mut divisor = 3;
        while divisor * divisor <= x {
            if x % divisor == 0 {
                return false;
            }
            divisor += 2;
        }
        true
    }
}
