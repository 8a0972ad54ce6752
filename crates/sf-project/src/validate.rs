//! Design and catalog file validation.
//!
//! This is the input boundary: once a design passes, the selection engine
//! trusts its numbers.

use std::collections::HashSet;

use sf_catalog::Family;

use crate::schema::{CatalogFile, DesignFile, OpenLoopInputsDef, PolicyDef, SystemDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// User-facing input problem; the reason is shown as-is.
    #[error("{reason}")]
    Input { field: String, reason: String },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn input(field: &str, reason: &str) -> ValidationError {
    ValidationError::Input {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

pub fn validate_design(design: &DesignFile) -> Result<(), ValidationError> {
    if design.version > crate::schema::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: design.version,
        });
    }

    let price = design.energy_price_per_kwh;
    if !(price.is_finite() && price > 0.0) {
        return Err(input(
            "energy_price_per_kwh",
            "Electrical cost must be a positive number.",
        ));
    }

    validate_system(&design.system, design.policy.open_loop_inputs)?;
    validate_policy(&design.policy)
}

fn validate_system(system: &SystemDef, rule: OpenLoopInputsDef) -> Result<(), ValidationError> {
    const TONNAGE: &str = "Tonnage must be a non-negative number for open systems.";
    const RECIRC: &str = "Recirculation must be a non-negative number for open systems.";

    match *system {
        SystemDef::Open {
            tonnage,
            total_recirc_gpm,
        } => {
            if tonnage.is_some_and(|t| !non_negative(t)) {
                return Err(input("tonnage", TONNAGE));
            }
            if total_recirc_gpm.is_some_and(|r| !non_negative(r)) {
                return Err(input("total_recirc_gpm", RECIRC));
            }
            match rule {
                OpenLoopInputsDef::Both => {
                    if tonnage.is_none() {
                        return Err(input("tonnage", TONNAGE));
                    }
                    if total_recirc_gpm.is_none() {
                        return Err(input("total_recirc_gpm", RECIRC));
                    }
                }
                OpenLoopInputsDef::Either => {
                    if tonnage.is_none() && total_recirc_gpm.is_none() {
                        return Err(input(
                            "tonnage",
                            "Tonnage or recirculation must be given for open systems.",
                        ));
                    }
                }
            }
        }
        SystemDef::Closed { system_volume_gal } => {
            if !system_volume_gal.is_some_and(non_negative) {
                return Err(input(
                    "system_volume_gal",
                    "System Volume must be a non-negative number for closed systems.",
                ));
            }
        }
    }
    Ok(())
}

fn validate_policy(policy: &PolicyDef) -> Result<(), ValidationError> {
    for (family, fraction) in &policy.side_stream {
        let ok = fraction.min.is_finite()
            && fraction.max.is_finite()
            && 0.0 <= fraction.min
            && fraction.min <= fraction.max
            && fraction.max <= 1.0;
        if !ok {
            return Err(ValidationError::InvalidValue {
                field: format!("policy.side_stream.{family}"),
                value: format!("{{min: {}, max: {}}}", fraction.min, fraction.max),
                reason: "fractions must satisfy 0 <= min <= max <= 1".to_string(),
            });
        }
    }
    Ok(())
}

/// Structural checks on a catalog file.
///
/// Numeric invariants (positive power, ordered ranges) are enforced when the
/// records are compiled into a `Catalog`.
pub fn validate_catalog(file: &CatalogFile) -> Result<(), ValidationError> {
    let mut models = HashSet::new();
    for record in &file.records {
        if !models.insert(record.model.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: record.model.clone(),
                context: "catalog records".to_string(),
            });
        }
        if record.loop_volume_gal.is_some() && record.family != Family::Vortisand {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.loop_volume_gal", record.model),
                value: "present".to_string(),
                reason: format!("{} units are not sized by loop volume", record.family),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FractionDef, RangeDef, RecordDef};

    fn open(tonnage: Option<f64>, recirc: Option<f64>) -> DesignFile {
        DesignFile {
            version: 1,
            name: "test".into(),
            system: SystemDef::Open {
                tonnage,
                total_recirc_gpm: recirc,
            },
            energy_price_per_kwh: 0.2,
            policy: PolicyDef::default(),
            catalog: None,
        }
    }

    fn reason(err: ValidationError) -> String {
        err.to_string()
    }

    #[test]
    fn valid_open_design() {
        assert!(validate_design(&open(Some(3300.0), Some(7200.0))).is_ok());
        assert!(validate_design(&open(Some(3300.0), None)).is_ok());
        assert!(validate_design(&open(None, Some(7200.0))).is_ok());
    }

    #[test]
    fn price_must_be_positive() {
        let mut design = open(Some(1.0), Some(1.0));
        design.energy_price_per_kwh = 0.0;
        assert_eq!(
            reason(validate_design(&design).unwrap_err()),
            "Electrical cost must be a positive number."
        );
        design.energy_price_per_kwh = f64::NAN;
        assert!(validate_design(&design).is_err());
    }

    #[test]
    fn negative_open_inputs() {
        assert_eq!(
            reason(validate_design(&open(Some(-1.0), Some(1.0))).unwrap_err()),
            "Tonnage must be a non-negative number for open systems."
        );
        assert_eq!(
            reason(validate_design(&open(Some(1.0), Some(-1.0))).unwrap_err()),
            "Recirculation must be a non-negative number for open systems."
        );
    }

    #[test]
    fn open_needs_at_least_one_input() {
        assert!(validate_design(&open(None, None)).is_err());
    }

    #[test]
    fn strict_open_needs_both_inputs() {
        let mut design = open(Some(3300.0), None);
        design.policy.open_loop_inputs = OpenLoopInputsDef::Both;
        let err = validate_design(&design).unwrap_err();
        assert!(
            matches!(err, ValidationError::Input { ref field, .. } if field == "total_recirc_gpm")
        );
    }

    #[test]
    fn closed_needs_volume() {
        let mut design = open(None, None);
        design.system = SystemDef::Closed {
            system_volume_gal: None,
        };
        assert_eq!(
            reason(validate_design(&design).unwrap_err()),
            "System Volume must be a non-negative number for closed systems."
        );
        design.system = SystemDef::Closed {
            system_volume_gal: Some(100_000.0),
        };
        assert!(validate_design(&design).is_ok());
    }

    #[test]
    fn future_version_is_rejected() {
        let mut design = open(Some(1.0), Some(1.0));
        design.version = 99;
        assert_eq!(
            validate_design(&design).unwrap_err(),
            ValidationError::UnsupportedVersion { version: 99 }
        );
    }

    #[test]
    fn bad_fraction_override() {
        let mut design = open(Some(1.0), Some(1.0));
        design
            .policy
            .side_stream
            .insert(Family::Vaf, FractionDef { min: 0.2, max: 0.1 });
        let err = validate_design(&design).unwrap_err();
        assert!(err.to_string().contains("policy.side_stream.VAF"));
    }

    fn record(model: &str, family: Family, loop_volume: bool) -> RecordDef {
        let r = RangeDef {
            min: 0.0,
            max: 10.0,
        };
        RecordDef {
            model: model.into(),
            family,
            power_hp: 1.0,
            rated_flow_gpm: 10.0,
            recirc_gpm: r,
            tonnage: r,
            loop_volume_gal: loop_volume.then_some(r),
            description: String::new(),
        }
    }

    #[test]
    fn catalog_duplicates() {
        let file = CatalogFile {
            records: vec![
                record("A", Family::Vaf, false),
                record("A", Family::Separator, false),
            ],
        };
        assert!(matches!(
            validate_catalog(&file),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn catalog_loop_volume_only_on_vortisand() {
        let ok = CatalogFile {
            records: vec![record("VC", Family::Vortisand, true)],
        };
        assert!(validate_catalog(&ok).is_ok());

        let bad = CatalogFile {
            records: vec![record("CTF", Family::Vaf, true)],
        };
        assert!(matches!(
            validate_catalog(&bad),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
