//! Equipment records.

use sf_core::{InclusiveRange, Real, SfError, ensure_positive};

use crate::{CatalogError, CatalogResult, Family};

/// Family-specific sizing data.
///
/// Only Vortisand units are rated by closed-loop volume, so the loop-volume
/// range lives on that variant alone. A Vortisand row may still leave it
/// unset, meaning the row is not offered for closed-loop sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    Separator,
    Vaf,
    Vortisand {
        loop_volume_gal: Option<InclusiveRange>,
    },
}

impl Sizing {
    pub fn family(&self) -> Family {
        match self {
            Sizing::Separator => Family::Separator,
            Sizing::Vaf => Family::Vaf,
            Sizing::Vortisand { .. } => Family::Vortisand,
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentRecord {
    model: String,
    sizing: Sizing,
    power_hp: Real,
    rated_flow_gpm: Real,
    recirc_gpm: InclusiveRange,
    tonnage: InclusiveRange,
    description: String,
}

impl EquipmentRecord {
    /// Build a record, checking power and flow are strictly positive.
    ///
    /// Ranges arrive already validated as `InclusiveRange`.
    pub fn new(
        model: impl Into<String>,
        sizing: Sizing,
        power_hp: Real,
        rated_flow_gpm: Real,
        recirc_gpm: InclusiveRange,
        tonnage: InclusiveRange,
    ) -> CatalogResult<Self> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(CatalogError::EmptyModel);
        }
        let invalid = |source: SfError| CatalogError::InvalidRecord {
            model: model.clone(),
            source,
        };
        let power_hp = ensure_positive(power_hp, "power rating (hp)").map_err(invalid)?;
        let rated_flow_gpm = ensure_positive(rated_flow_gpm, "rated flow (gpm)").map_err(invalid)?;

        Ok(Self {
            model,
            sizing,
            power_hp,
            rated_flow_gpm,
            recirc_gpm,
            tonnage,
            description: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn family(&self) -> Family {
        self.sizing.family()
    }

    pub fn power_hp(&self) -> Real {
        self.power_hp
    }

    pub fn rated_flow_gpm(&self) -> Real {
        self.rated_flow_gpm
    }

    /// Total system recirculation this unit is rated for.
    pub fn recirc_range(&self) -> &InclusiveRange {
        &self.recirc_gpm
    }

    pub fn tonnage_range(&self) -> &InclusiveRange {
        &self.tonnage
    }

    /// Closed-loop system volume this unit is rated for, if any.
    pub fn loop_volume_range(&self) -> Option<&InclusiveRange> {
        match &self.sizing {
            Sizing::Vortisand { loop_volume_gal } => loop_volume_gal.as_ref(),
            Sizing::Separator | Sizing::Vaf => None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
