//! Selection policy: side-stream fractions and open-loop input rules.
//!
//! Built once by the caller and handed to the engine; nothing here is
//! global state.

use serde::{Deserialize, Serialize};
use sf_catalog::Family;
use sf_core::Real;

use crate::{PolicyError, PolicyResult};

/// Share of total recirculation a family's unit should filter.
///
/// The engine enforces `min` as a floor on rated flow. `max` only bounds the
/// reported target band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideStreamFraction {
    min: Real,
    max: Real,
}

impl SideStreamFraction {
    pub fn new(family: Family, min: Real, max: Real) -> PolicyResult<Self> {
        let ok = min.is_finite() && max.is_finite() && 0.0 <= min && min <= max && max <= 1.0;
        if !ok {
            return Err(PolicyError::InvalidFraction { family, min, max });
        }
        Ok(Self { min, max })
    }

    const fn from_bounds(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Real {
        self.min
    }

    pub fn max(&self) -> Real {
        self.max
    }

    /// Minimum side-stream flow for a given total recirculation.
    pub fn floor_gpm(&self, total_recirc_gpm: Real) -> Real {
        total_recirc_gpm * self.min
    }

    /// Target side-stream band `(low, high)` in gpm.
    pub fn band_gpm(&self, total_recirc_gpm: Real) -> (Real, Real) {
        (total_recirc_gpm * self.min, total_recirc_gpm * self.max)
    }
}

/// Per-family side-stream fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideStreamTable {
    separator: SideStreamFraction,
    vaf: SideStreamFraction,
    vortisand: SideStreamFraction,
}

impl Default for SideStreamTable {
    fn default() -> Self {
        Self {
            separator: SideStreamFraction::from_bounds(0.20, 0.25),
            vaf: SideStreamFraction::from_bounds(0.05, 0.10),
            vortisand: SideStreamFraction::from_bounds(0.01, 0.05),
        }
    }
}

impl SideStreamTable {
    pub fn get(&self, family: Family) -> &SideStreamFraction {
        match family {
            Family::Separator => &self.separator,
            Family::Vaf => &self.vaf,
            Family::Vortisand => &self.vortisand,
        }
    }

    /// Copy of the table with one family's fraction replaced.
    pub fn with(mut self, family: Family, fraction: SideStreamFraction) -> Self {
        match family {
            Family::Separator => self.separator = fraction,
            Family::Vaf => self.vaf = fraction,
            Family::Vortisand => self.vortisand = fraction,
        }
        self
    }
}

/// Which open-loop inputs must be present before a selection is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpenLoopInputs {
    /// Tonnage or recirculation alone is enough; missing constraints are skipped.
    #[default]
    Either,
    /// Tonnage and recirculation are both required.
    Both,
}

impl OpenLoopInputs {
    pub fn is_satisfied(self, tonnage: Option<Real>, total_recirc_gpm: Option<Real>) -> bool {
        match self {
            OpenLoopInputs::Either => tonnage.is_some() || total_recirc_gpm.is_some(),
            OpenLoopInputs::Both => tonnage.is_some() && total_recirc_gpm.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionPolicy {
    pub side_stream: SideStreamTable,
    pub open_loop_inputs: OpenLoopInputs,
}

impl SelectionPolicy {
    pub fn strict() -> Self {
        Self {
            open_loop_inputs: OpenLoopInputs::Both,
            ..Self::default()
        }
    }
}
