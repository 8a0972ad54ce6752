use sf_catalog::Family;
use thiserror::Error;

pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors building a selection policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error(
        "Side-stream fraction for {family} must satisfy 0 <= min <= max <= 1 (got min={min}, max={max})"
    )]
    InvalidFraction { family: Family, min: f64, max: f64 },
}
