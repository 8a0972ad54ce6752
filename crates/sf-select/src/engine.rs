//! Selection engine.
//!
//! Open loops are sized by side-stream flow: a unit must filter at least the
//! family's minimum share of total recirculation, and the smallest such unit
//! (by rated flow) wins. Closed loops are sized by system volume and the
//! lowest-horsepower eligible unit wins. Ties always go to the record that
//! appears first in the catalog.

use core::fmt;

use sf_catalog::{Catalog, EquipmentRecord, Family};
use sf_core::Real;
use tracing::debug;

use crate::{LoopType, SelectionPolicy, SystemDescription};

/// Filtering step applied to the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Family,
    SideStreamFloor,
    RecircRange,
    TonnageRange,
    LoopVolumeRange,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Family => "family",
            Stage::SideStreamFloor => "side-stream floor",
            Stage::RecircRange => "recirc range",
            Stage::TonnageRange => "tonnage range",
            Stage::LoopVolumeRange => "loop volume range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageCount {
    pub stage: Stage,
    /// Candidates left after the stage ran.
    pub remaining: usize,
}

/// Why a selection was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingSystemVolume,
    MissingOpenLoopInputs,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSystemVolume => f.write_str("system volume not supplied"),
            SkipReason::MissingOpenLoopInputs => {
                f.write_str("tonnage / recirculation not supplied")
            }
        }
    }
}

/// Full account of one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionTrace<'a> {
    pub family: Family,
    pub loop_type: LoopType,
    pub skipped: Option<SkipReason>,
    /// Rated-flow floor applied in open-loop mode, if recirculation was given.
    pub side_stream_floor_gpm: Option<Real>,
    pub stages: Vec<StageCount>,
    pub selected: Option<&'a EquipmentRecord>,
}

impl<'a> SelectionTrace<'a> {
    fn new(family: Family, loop_type: LoopType) -> Self {
        Self {
            family,
            loop_type,
            skipped: None,
            side_stream_floor_gpm: None,
            stages: Vec::new(),
            selected: None,
        }
    }
}

/// Picks one catalog record per family for a system description.
///
/// Holds only shared references and a copy of the policy, so one engine can
/// serve any number of concurrent selections.
#[derive(Debug, Clone, Copy)]
pub struct SelectionEngine<'a> {
    catalog: &'a Catalog,
    policy: SelectionPolicy,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a Catalog, policy: SelectionPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Best-matching record for `family`, or `None` when nothing fits or the
    /// sizing inputs for the loop type are missing.
    pub fn select(&self, family: Family, system: SystemDescription) -> Option<&'a EquipmentRecord> {
        self.explain(family, system).selected
    }

    /// Run a selection and keep the intermediate candidate counts.
    pub fn explain(&self, family: Family, system: SystemDescription) -> SelectionTrace<'a> {
        let trace = match system.loop_type() {
            LoopType::Closed => self.closed_loop(family, system),
            LoopType::Open => self.open_loop(family, system),
        };
        debug!(
            family = %family,
            loop_type = %trace.loop_type,
            selected = trace.selected.map(|r| r.model()).unwrap_or("<none>"),
            "selection finished"
        );
        trace
    }

    fn closed_loop(&self, family: Family, system: SystemDescription) -> SelectionTrace<'a> {
        let mut trace = SelectionTrace::new(family, LoopType::Closed);
        let Some(volume) = system.system_volume_gal() else {
            trace.skipped = Some(SkipReason::MissingSystemVolume);
            return trace;
        };

        let mut candidates = self.family_candidates(family, &mut trace);

        // Separators and VAFs have no volume rating; their recirc range stands in for it.
        if family == Family::Vortisand {
            candidates.retain(|r| r.loop_volume_range().is_some_and(|lv| lv.contains(volume)));
            record_stage(&mut trace, Stage::LoopVolumeRange, candidates.len());
        } else {
            candidates.retain(|r| r.recirc_range().contains(volume));
            record_stage(&mut trace, Stage::RecircRange, candidates.len());
        }

        trace.selected = smallest_by(candidates, EquipmentRecord::power_hp);
        trace
    }

    fn open_loop(&self, family: Family, system: SystemDescription) -> SelectionTrace<'a> {
        let mut trace = SelectionTrace::new(family, LoopType::Open);
        let tonnage = system.tonnage();
        let recirc = system.total_recirc_gpm();
        if !self.policy.open_loop_inputs.is_satisfied(tonnage, recirc) {
            trace.skipped = Some(SkipReason::MissingOpenLoopInputs);
            return trace;
        }

        let mut candidates = self.family_candidates(family, &mut trace);

        if let Some(recirc) = recirc {
            let floor = self.policy.side_stream.get(family).floor_gpm(recirc);
            trace.side_stream_floor_gpm = Some(floor);
            candidates.retain(|r| r.rated_flow_gpm() >= floor);
            record_stage(&mut trace, Stage::SideStreamFloor, candidates.len());
        }

        match family {
            Family::Vaf => {
                if let Some(tonnage) = tonnage {
                    candidates.retain(|r| r.tonnage_range().contains(tonnage));
                    record_stage(&mut trace, Stage::TonnageRange, candidates.len());
                }
                if let Some(recirc) = recirc {
                    candidates.retain(|r| r.recirc_range().contains(recirc));
                    record_stage(&mut trace, Stage::RecircRange, candidates.len());
                }
            }
            // Separator side streams are sized by flow; nominal tonnage is not checked.
            Family::Separator => {
                if let Some(recirc) = recirc {
                    candidates.retain(|r| r.recirc_range().contains(recirc));
                    record_stage(&mut trace, Stage::RecircRange, candidates.len());
                }
            }
            Family::Vortisand => {}
        }

        trace.selected = smallest_by(candidates, EquipmentRecord::rated_flow_gpm);
        trace
    }

    fn family_candidates(
        &self,
        family: Family,
        trace: &mut SelectionTrace<'a>,
    ) -> Vec<&'a EquipmentRecord> {
        let candidates: Vec<_> = self.catalog.records_of_family(family).collect();
        record_stage(trace, Stage::Family, candidates.len());
        candidates
    }
}

fn record_stage(trace: &mut SelectionTrace<'_>, stage: Stage, remaining: usize) {
    debug!(family = %trace.family, stage = stage.label(), remaining, "candidates filtered");
    trace.stages.push(StageCount { stage, remaining });
}

/// First record with the smallest key. `Iterator::min_by` keeps the earliest
/// of equal elements, which gives the catalog-order tie-break.
fn smallest_by<'a>(
    candidates: Vec<&'a EquipmentRecord>,
    key: impl Fn(&EquipmentRecord) -> Real,
) -> Option<&'a EquipmentRecord> {
    candidates
        .into_iter()
        .min_by(|a, b| key(*a).total_cmp(&key(*b)))
}
