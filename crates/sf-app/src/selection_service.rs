//! Runs the three per-family selections and prices the results.

use rayon::prelude::*;
use sf_catalog::{Catalog, Family};
use sf_select::{SelectionEngine, SelectionPolicy, SystemDescription};
use tracing::{info, warn};

use crate::cost::{annual_energy_cost, annual_energy_kwh, price_basis};
use crate::report::{
    FamilyResult, InputsSummary, Outcome, SelectedModel, SelectionReport, StageSummary,
    report_title,
};

/// Select one model per family and build the report.
///
/// Families are evaluated in parallel; they share nothing mutable, so the
/// result is the same as running them one after another.
pub fn evaluate(
    catalog: &Catalog,
    policy: SelectionPolicy,
    system: SystemDescription,
) -> SelectionReport {
    let engine = SelectionEngine::new(catalog, policy);
    info!(
        loop_type = %system.loop_type(),
        records = catalog.len(),
        "evaluating filter selection"
    );

    let results: Vec<FamilyResult> = Family::ALL
        .par_iter()
        .map(|&family| family_result(&engine, family, system))
        .collect();

    SelectionReport {
        title: report_title(system.tonnage(), system.total_recirc_gpm()),
        loop_type: system.loop_type(),
        inputs: InputsSummary {
            tonnage: system.tonnage(),
            total_recirc_gpm: system.total_recirc_gpm(),
            system_volume_gal: system.system_volume_gal(),
        },
        energy_price_per_kwh: system.energy_price_per_kwh,
        results,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn family_result(
    engine: &SelectionEngine<'_>,
    family: Family,
    system: SystemDescription,
) -> FamilyResult {
    let trace = engine.explain(family, system);
    let price = system.energy_price_per_kwh;

    let outcome = match (trace.skipped, trace.selected) {
        (Some(reason), _) => Outcome::Skipped {
            reason: reason.to_string(),
        },
        (None, Some(record)) => {
            let annual_cost_usd = annual_energy_cost(record.power_hp(), price);
            Outcome::Selected(SelectedModel {
                model: record.model().to_string(),
                power_hp: record.power_hp(),
                rated_flow_gpm: record.rated_flow_gpm(),
                annual_energy_kwh: annual_energy_kwh(record.power_hp()),
                annual_cost_usd,
                price_basis_per_kwh: price_basis(annual_cost_usd, record.power_hp())
                    .filter(|_| annual_cost_usd > 0.0),
                description: record.description().to_string(),
            })
        }
        (None, None) => {
            warn!(family = %family, "no catalog record fits the system");
            Outcome::NoMatch
        }
    };

    let side_stream_band_gpm = system
        .total_recirc_gpm()
        .filter(|_| trace.skipped.is_none())
        .map(|recirc| engine.policy().side_stream.get(family).band_gpm(recirc));

    FamilyResult {
        family,
        water_quality: family.water_quality(),
        outcome,
        side_stream_band_gpm,
        stages: trace
            .stages
            .iter()
            .map(|s| StageSummary {
                stage: s.stage.label(),
                remaining: s.remaining,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_keep_family_order() {
        let catalog = Catalog::builtin().unwrap();
        let report = evaluate(
            &catalog,
            SelectionPolicy::default(),
            SystemDescription::open(Some(3300.0), Some(7200.0), 0.2),
        );
        let families: Vec<Family> = report.results.iter().map(|r| r.family).collect();
        assert_eq!(families, Family::ALL);
    }

    #[test]
    fn skipped_family_has_no_band() {
        let catalog = Catalog::builtin().unwrap();
        let report = evaluate(
            &catalog,
            SelectionPolicy::strict(),
            SystemDescription::open(None, Some(7200.0), 0.2),
        );
        for result in &report.results {
            assert!(matches!(result.outcome, Outcome::Skipped { .. }));
            assert!(result.side_stream_band_gpm.is_none());
            assert!(result.stages.is_empty());
        }
        assert!(!report.any_selected());
    }
}
