use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldbachError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidStepError {
        field: String,
        value: i64,
        reason: String,
    },

    #[error("Invalid bounds: low={low}, high={high} - {reason}")]
    InvalidBoundsError {
        low: i64,
        high: i64,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GoldbachError>;
