//! Selection report: per-family outcome plus energy cost, ready to print or
//! serialize.

use std::fmt;

use serde::Serialize;
use sf_catalog::Family;
use sf_core::Real;
use sf_select::LoopType;

use crate::cost::format_usd;

pub const REPORT_TITLE: &str = "Side Stream Filter CAPEX/OPEX";
pub const NO_RESULTS_MESSAGE: &str =
    "No suitable filters found for the given criteria. Please adjust your inputs.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedModel {
    pub model: String,
    pub power_hp: Real,
    pub rated_flow_gpm: Real,
    pub annual_energy_kwh: Real,
    pub annual_cost_usd: Real,
    /// $/kWh the cost was computed at, recovered from the cost itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_basis_per_kwh: Option<Real>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Selected(SelectedModel),
    /// Inputs were complete but no catalog record fits.
    NoMatch,
    /// Sizing inputs for the loop type were missing.
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSummary {
    pub stage: &'static str,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyResult {
    pub family: Family,
    pub water_quality: &'static str,
    pub outcome: Outcome,
    /// Target side-stream band `[low, high]` in gpm, open loops only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_stream_band_gpm: Option<(Real, Real)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<StageSummary>,
}

impl FamilyResult {
    pub fn selected(&self) -> Option<&SelectedModel> {
        match &self.outcome {
            Outcome::Selected(m) => Some(m),
            Outcome::NoMatch | Outcome::Skipped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tonnage: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_recirc_gpm: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_volume_gal: Option<Real>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub title: String,
    pub loop_type: LoopType,
    pub inputs: InputsSummary,
    pub energy_price_per_kwh: Real,
    /// Always Separator, VAF, Vortisand.
    pub results: Vec<FamilyResult>,
    pub generated_at: String,
}

impl SelectionReport {
    pub fn result(&self, family: Family) -> Option<&FamilyResult> {
        self.results.iter().find(|r| r.family == family)
    }

    pub fn any_selected(&self) -> bool {
        self.results.iter().any(|r| r.selected().is_some())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendering for terminals. `explain` adds per-stage counts.
    pub fn text(&self, explain: bool) -> ReportText<'_> {
        ReportText {
            report: self,
            explain,
        }
    }
}

/// Terminal view of a [`SelectionReport`].
pub struct ReportText<'a> {
    report: &'a SelectionReport,
    explain: bool,
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "{}", report.title)?;
        writeln!(f, "{}", "=".repeat(report.title.chars().count()))?;

        if !report.any_selected() {
            writeln!(f, "{NO_RESULTS_MESSAGE}")?;
        }

        for result in &report.results {
            writeln!(f)?;
            writeln!(f, "{} - {}", result.family, result.water_quality)?;
            match &result.outcome {
                Outcome::Selected(m) => {
                    writeln!(f, "  Model:        {}", m.model)?;
                    writeln!(f, "  Filter OPEX:  {}/year", format_usd(m.annual_cost_usd))?;
                    writeln!(f, "  Flow Rate:    {} gpm", m.rated_flow_gpm)?;
                    writeln!(f, "  HP:           {} hp", m.power_hp)?;
                    if let Some(basis) = m.price_basis_per_kwh {
                        writeln!(f, "  Basis:        @${basis:.2}/kwh")?;
                    }
                }
                Outcome::NoMatch => writeln!(f, "  No suitable model.")?,
                Outcome::Skipped { reason } => writeln!(f, "  Not evaluated: {reason}.")?,
            }
            if let Some((low, high)) = result.side_stream_band_gpm {
                writeln!(f, "  Side stream:  {low:.0}-{high:.0} gpm target")?;
            }
            if self.explain {
                for stage in &result.stages {
                    writeln!(f, "    after {:<18} {}", stage.stage, stage.remaining)?;
                }
            }
        }
        Ok(())
    }
}

/// Report heading; names the load and flow when both were given.
pub fn report_title(tonnage: Option<Real>, total_recirc_gpm: Option<Real>) -> String {
    match (tonnage, total_recirc_gpm) {
        (Some(t), Some(r)) => format!("{REPORT_TITLE} - {t} tons ({r} gpm Tower Recirc)"),
        _ => REPORT_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_with_both_inputs() {
        assert_eq!(
            report_title(Some(3300.0), Some(7200.0)),
            "Side Stream Filter CAPEX/OPEX - 3300 tons (7200 gpm Tower Recirc)"
        );
        assert_eq!(report_title(Some(3300.0), None), REPORT_TITLE);
        assert_eq!(report_title(None, None), REPORT_TITLE);
    }

    fn result(family: Family, outcome: Outcome) -> FamilyResult {
        FamilyResult {
            family,
            water_quality: family.water_quality(),
            outcome,
            side_stream_band_gpm: None,
            stages: Vec::new(),
        }
    }

    fn report(results: Vec<FamilyResult>) -> SelectionReport {
        SelectionReport {
            title: REPORT_TITLE.to_string(),
            loop_type: LoopType::Open,
            inputs: InputsSummary {
                tonnage: None,
                total_recirc_gpm: None,
                system_volume_gal: None,
            },
            energy_price_per_kwh: 0.2,
            results,
            generated_at: String::new(),
        }
    }

    #[test]
    fn empty_report_says_so() {
        let text = report(vec![
            result(Family::Separator, Outcome::NoMatch),
            result(
                Family::Vaf,
                Outcome::Skipped {
                    reason: "tonnage / recirculation not supplied".into(),
                },
            ),
        ])
        .text(false)
        .to_string();
        assert!(text.contains(NO_RESULTS_MESSAGE));
        assert!(text.contains("No suitable model."));
        assert!(text.contains("Not evaluated: tonnage / recirculation not supplied."));
    }

    #[test]
    fn selected_model_is_rendered() {
        let selected = SelectedModel {
            model: "CTS1600".into(),
            power_hp: 60.0,
            rated_flow_gpm: 1600.0,
            annual_energy_kwh: 391_939.92,
            annual_cost_usd: 78_387.984,
            price_basis_per_kwh: Some(0.2),
            description: String::new(),
        };
        let mut sep = result(Family::Separator, Outcome::Selected(selected));
        sep.side_stream_band_gpm = Some((1440.0, 1800.0));
        let text = report(vec![sep]).text(false).to_string();
        assert!(!text.contains(NO_RESULTS_MESSAGE));
        assert!(text.contains("Separator - Good (70 Micron / High SG)"));
        assert!(text.contains("Model:        CTS1600"));
        assert!(text.contains("$78,387.98/year"));
        assert!(text.contains("@$0.20/kwh"));
        assert!(text.contains("1440-1800 gpm target"));
    }

    #[test]
    fn json_uses_status_tag() {
        let json = report(vec![result(Family::Vaf, Outcome::NoMatch)])
            .to_json()
            .unwrap();
        assert!(json.contains("\"status\": \"no_match\""));
        assert!(json.contains("\"family\": \"VAF\""));
        assert!(json.contains("\"loop_type\": \"Open\""));
    }

    #[test]
    fn explain_adds_stage_lines() {
        let mut vaf = result(Family::Vaf, Outcome::NoMatch);
        vaf.stages = vec![
            StageSummary {
                stage: "family",
                remaining: 5,
            },
            StageSummary {
                stage: "side-stream floor",
                remaining: 0,
            },
        ];
        let report = report(vec![vaf]);
        let plain = format!("{}", report.text(false));
        let explained = format!("{}", report.text(true));
        assert!(!plain.contains("after "));
        assert!(explained.contains("after family"));
        assert!(explained.contains("after side-stream floor"));
    }
}
