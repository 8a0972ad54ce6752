//! Error types for the sf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives the CLI one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Design error: {0}")]
    Design(String),

    #[error("Failed to read {what} file: {path}")]
    FileRead {
        what: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Design validation failed: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for sf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sf_project::ProjectError> for AppError {
    fn from(err: sf_project::ProjectError) -> Self {
        match err {
            sf_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Design(other.to_string()),
        }
    }
}

impl From<sf_project::ValidationError> for AppError {
    fn from(err: sf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<sf_catalog::CatalogError> for AppError {
    fn from(err: sf_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<sf_select::PolicyError> for AppError {
    fn from(err: sf_select::PolicyError) -> Self {
        AppError::Policy(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let err: AppError = sf_project::ValidationError::Input {
            field: "energy_price_per_kwh".into(),
            reason: "Electrical cost must be a positive number.".into(),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().ends_with("Electrical cost must be a positive number."));
    }

    #[test]
    fn catalog_errors_convert() {
        let err: AppError = sf_catalog::CatalogError::DuplicateModel {
            model: "VC50".into(),
        }
        .into();
        assert!(matches!(err, AppError::Catalog(ref m) if m.contains("VC50")));
    }
}
