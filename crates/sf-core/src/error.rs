use thiserror::Error;

pub type SfResult<T> = Result<T, SfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Inverted range for {what}: min {min} > max {max}")]
    InvertedRange {
        what: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Value for {what} must be strictly positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
}
