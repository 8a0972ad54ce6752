//! Catalog errors.

use sf_core::SfError;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while assembling a catalog. All of them are load-time
/// failures; a constructed `Catalog` never produces one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A record has an empty model identifier.
    #[error("Catalog record has an empty model identifier")]
    EmptyModel,

    /// Two records share a model identifier.
    #[error("Duplicate model in catalog: {model}")]
    DuplicateModel { model: String },

    /// A record's numeric data breaks a catalog invariant.
    #[error("Invalid catalog record {model}: {source}")]
    InvalidRecord {
        model: String,
        #[source]
        source: SfError,
    },

    /// Unknown product family name.
    #[error("Unknown filter family: {name}")]
    UnknownFamily { name: String },
}
