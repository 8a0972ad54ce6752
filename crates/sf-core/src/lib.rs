//! sf-core: shared foundation for the side-stream filter selection tools.
//!
//! Contains:
//! - units (uom SI types + the horsepower / annual energy conversions)
//! - numeric (Real + float validation helpers)
//! - range (inclusive applicability intervals)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod range;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use range::InclusiveRange;
pub use units::*;
