//! Compile on-disk definitions into the runtime types the engine reads.

use sf_catalog::{Catalog, CatalogError, CatalogResult, EquipmentRecord, Family, Sizing};
use sf_core::InclusiveRange;
use sf_project::{
    CatalogFile, DesignFile, OpenLoopInputsDef, PolicyDef, RangeDef, RecordDef, SystemDef,
};
use sf_select::{
    OpenLoopInputs, SelectionPolicy, SideStreamFraction, SideStreamTable, SystemDescription,
};

use crate::error::AppResult;

pub fn compile_system(design: &DesignFile) -> SystemDescription {
    let price = design.energy_price_per_kwh;
    match design.system {
        SystemDef::Open {
            tonnage,
            total_recirc_gpm,
        } => SystemDescription::open(tonnage, total_recirc_gpm, price),
        SystemDef::Closed { system_volume_gal } => {
            SystemDescription::closed(system_volume_gal, price)
        }
    }
}

pub fn compile_policy(policy: &PolicyDef) -> AppResult<SelectionPolicy> {
    let mut side_stream = SideStreamTable::default();
    for (&family, fraction) in &policy.side_stream {
        let fraction = SideStreamFraction::new(family, fraction.min, fraction.max)?;
        side_stream = side_stream.with(family, fraction);
    }

    let open_loop_inputs = match policy.open_loop_inputs {
        OpenLoopInputsDef::Either => OpenLoopInputs::Either,
        OpenLoopInputsDef::Both => OpenLoopInputs::Both,
    };

    Ok(SelectionPolicy {
        side_stream,
        open_loop_inputs,
    })
}

fn compile_range(model: &str, def: RangeDef, what: &'static str) -> CatalogResult<InclusiveRange> {
    InclusiveRange::new(def.min, def.max, what).map_err(|source| CatalogError::InvalidRecord {
        model: model.to_string(),
        source,
    })
}

pub fn compile_record(def: &RecordDef) -> CatalogResult<EquipmentRecord> {
    let recirc = compile_range(&def.model, def.recirc_gpm, "recirc range")?;
    let tonnage = compile_range(&def.model, def.tonnage, "tonnage range")?;
    let sizing = match def.family {
        Family::Separator => Sizing::Separator,
        Family::Vaf => Sizing::Vaf,
        Family::Vortisand => Sizing::Vortisand {
            loop_volume_gal: def
                .loop_volume_gal
                .map(|lv| compile_range(&def.model, lv, "loop volume range"))
                .transpose()?,
        },
    };

    Ok(EquipmentRecord::new(
        def.model.clone(),
        sizing,
        def.power_hp,
        def.rated_flow_gpm,
        recirc,
        tonnage,
    )?
    .with_description(def.description.clone()))
}

pub fn compile_catalog(file: &CatalogFile) -> AppResult<Catalog> {
    let records = file
        .records
        .iter()
        .map(compile_record)
        .collect::<CatalogResult<Vec<_>>>()?;
    Ok(Catalog::new(records)?)
}

/// Inverse of `compile_record`, used to export a catalog.
pub fn record_def(record: &EquipmentRecord) -> RecordDef {
    let range = |r: &InclusiveRange| RangeDef {
        min: r.min(),
        max: r.max(),
    };
    RecordDef {
        model: record.model().to_string(),
        family: record.family(),
        power_hp: record.power_hp(),
        rated_flow_gpm: record.rated_flow_gpm(),
        recirc_gpm: range(record.recirc_range()),
        tonnage: range(record.tonnage_range()),
        loop_volume_gal: record.loop_volume_range().map(range),
        description: record.description().to_string(),
    }
}

pub fn catalog_file(catalog: &Catalog) -> CatalogFile {
    CatalogFile {
        records: catalog.records().iter().map(record_def).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_project::FractionDef;
    use sf_select::LoopType;

    #[test]
    fn policy_overrides_apply() {
        let mut def = PolicyDef::default();
        def.open_loop_inputs = OpenLoopInputsDef::Both;
        def.side_stream.insert(
            Family::Vortisand,
            FractionDef {
                min: 0.02,
                max: 0.04,
            },
        );
        let policy = compile_policy(&def).unwrap();
        assert_eq!(policy.open_loop_inputs, OpenLoopInputs::Both);
        assert_eq!(policy.side_stream.get(Family::Vortisand).min(), 0.02);
        assert_eq!(policy.side_stream.get(Family::Vaf).min(), 0.05);
    }

    #[test]
    fn bad_policy_fraction_is_an_error() {
        let mut def = PolicyDef::default();
        def.side_stream
            .insert(Family::Vaf, FractionDef { min: 0.5, max: 0.1 });
        assert!(compile_policy(&def).is_err());
    }

    #[test]
    fn builtin_catalog_survives_export_and_compile() {
        let catalog = Catalog::builtin().unwrap();
        let rebuilt = compile_catalog(&catalog_file(&catalog)).unwrap();
        assert_eq!(rebuilt.records(), catalog.records());
    }

    #[test]
    fn inverted_range_fails_compile() {
        let def = RecordDef {
            model: "VC50".into(),
            family: Family::Vortisand,
            power_hp: 1.5,
            rated_flow_gpm: 50.0,
            recirc_gpm: RangeDef {
                min: 0.0,
                max: 5000.0,
            },
            tonnage: RangeDef {
                min: 7334.0,
                max: 1667.0,
            },
            loop_volume_gal: None,
            description: String::new(),
        };
        let err = compile_record(&def).unwrap_err();
        assert!(err.to_string().contains("VC50"));
    }

    #[test]
    fn system_follows_loop_type() {
        let design = DesignFile {
            version: 1,
            name: String::new(),
            system: SystemDef::Closed {
                system_volume_gal: Some(1.0),
            },
            energy_price_per_kwh: 0.3,
            policy: PolicyDef::default(),
            catalog: None,
        };
        let system = compile_system(&design);
        assert_eq!(system.loop_type(), LoopType::Closed);
        assert_eq!(system.energy_price_per_kwh, 0.3);
    }
}
