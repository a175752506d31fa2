use crate::utils::error::{GoldbachError, Result};

pub fn validate_step(field_name: &str, step: i64) -> Result<()> {
    if step == 0 {
        return Err(GoldbachError::InvalidStepError {
            field: field_name.to_string(),
            value: step,
            reason: "Step of zero would never terminate".to_string(),
        });
    }

    if step < 0 {
        return Err(GoldbachError::InvalidStepError {
            field: field_name.to_string(),
            value: step,
            reason: "Descending ranges are not supported".to_string(),
        });
    }

    Ok(())
}

pub fn validate_bounds(low: i64, high: i64) -> Result<()> {
    if low >= high {
        return Err(GoldbachError::InvalidBoundsError {
            low,
            high,
            reason: "low must be strictly less than high".to_string(),
        });
    }
    Ok(())
}
