//! Shared application service layer for the filter selection tools.
//!
//! Loads design and catalog files, runs the per-family selections, prices
//! the selected units and assembles a report the CLI can print or serialize.

pub mod compile;
pub mod cost;
pub mod design_service;
pub mod error;
pub mod report;
pub mod selection_service;

// Re-export key types for convenience
pub use compile::{catalog_file, compile_catalog, compile_policy, compile_system};
pub use cost::{annual_energy_cost, annual_energy_kwh, format_usd, price_basis};
pub use design_service::{LoadedDesign, load_catalog, load_design, prepare, read_design};
pub use error::{AppError, AppResult};
pub use report::{
    FamilyResult, NO_RESULTS_MESSAGE, Outcome, ReportText, SelectedModel, SelectionReport,
    report_title,
};
pub use selection_service::evaluate;
