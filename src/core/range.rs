use crate::utils::error::Result;
use crate::utils::validation::validate_step;

/// Ordered integers from `start` up to but excluding `end`, advancing by
/// `step`. Empty when `start >= end`. Zero and negative steps are rejected.
pub fn range(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    validate_step("step", step)?;

    let mut values = Vec::new();
    let mut current = start;
    while current < end {
        values.push(current);
        current += step;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_step_one() {
        assert_eq!(range(2, 6, 1).unwrap(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_step_two_excludes_end() {
        assert_eq!(range(20, 30, 2).unwrap(), vec![20, 22, 24, 26, 28]);
        assert_eq!(range(22, 28, 2).unwrap(), vec![22, 24, 26]);
    }

    #[test]
    fn test_empty_when_start_not_below_end() {
        assert!(range(5, 5, 1).unwrap().is_empty());
        assert!(range(9, 3, 1).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_zero_and_negative_step() {
        assert!(range(0, 10, 0).is_err());
        assert!(range(10, 0, -1).is_err());
    }
}
