//! Design and catalog file schema definitions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sf_catalog::Family;

pub const LATEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    LATEST_VERSION
}

/// One filter-sizing request as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub system: SystemDef,
    pub energy_price_per_kwh: f64,
    #[serde(default, skip_serializing_if = "PolicyDef::is_default")]
    pub policy: PolicyDef,
    /// Catalog file to use instead of the built-in catalog, relative to the
    /// design file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SystemDef {
    Open {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tonnage: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_recirc_gpm: Option<f64>,
    },
    Closed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        system_volume_gal: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OpenLoopInputsDef {
    #[default]
    Either,
    Both,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PolicyDef {
    #[serde(default)]
    pub open_loop_inputs: OpenLoopInputsDef,
    /// Per-family overrides of the side-stream fraction table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub side_stream: BTreeMap<Family, FractionDef>,
}

impl PolicyDef {
    pub fn is_default(&self) -> bool {
        self == &PolicyDef::default()
    }
}

/// Fractions of total recirculation, e.g. `{ min: 0.20, max: 0.25 }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FractionDef {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeDef {
    pub min: f64,
    pub max: f64,
}

/// Equipment catalog as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogFile {
    #[serde(default)]
    pub records: Vec<RecordDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDef {
    pub model: String,
    pub family: Family,
    pub power_hp: f64,
    pub rated_flow_gpm: f64,
    pub recirc_gpm: RangeDef,
    pub tonnage: RangeDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_volume_gal: Option<RangeDef>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}
