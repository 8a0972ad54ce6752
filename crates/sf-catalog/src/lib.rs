//! sf-catalog: the equipment catalog the selection engine reads from.
//!
//! Provides:
//! - Product family definitions (Separator, VAF, Vortisand)
//! - Equipment records with family-typed applicability ranges
//! - A validated, read-only `Catalog`
//! - The built-in reference catalog
//!
//! # Example
//!
//! ```
//! use sf_catalog::{Catalog, Family};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let vafs: Vec<_> = catalog.records_of_family(Family::Vaf).collect();
//! assert_eq!(vafs.len(), 5);
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod family;
pub mod record;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use family::Family;
pub use record::{EquipmentRecord, Sizing};
