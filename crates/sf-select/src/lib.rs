//! sf-select: per-family equipment selection.
//!
//! Given a cooling-water system description, narrows the catalog to the
//! records eligible for one product family and picks the smallest one that
//! fits. Selection is a pure function of (catalog, policy, family, system);
//! "no eligible model" is an ordinary `None`, never an error.

pub mod engine;
pub mod error;
pub mod policy;
pub mod system;

pub use engine::{SelectionEngine, SelectionTrace, SkipReason, Stage, StageCount};
pub use error::{PolicyError, PolicyResult};
pub use policy::{OpenLoopInputs, SelectionPolicy, SideStreamFraction, SideStreamTable};
pub use system::{LoopType, SystemDescription, SystemLoop};
