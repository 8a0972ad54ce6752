//! Built-in reference catalog.
//!
//! Rows are ordered by increasing capacity within each family. Selection
//! tie-breaks depend on this order, so new rows go in capacity order too.

use sf_core::{InclusiveRange, Real};

use crate::{CatalogResult, EquipmentRecord, Family, Sizing};

#[derive(Debug, Clone, Copy)]
struct BuiltinRow {
    model: &'static str,
    family: Family,
    power_hp: Real,
    rated_flow_gpm: Real,
    recirc_gpm: (Real, Real),
    tonnage: (Real, Real),
    loop_volume_gal: Option<(Real, Real)>,
    description: &'static str,
}

impl BuiltinRow {
    fn to_record(self) -> CatalogResult<EquipmentRecord> {
        let invalid = |source| crate::CatalogError::InvalidRecord {
            model: self.model.to_string(),
            source,
        };
        let recirc = InclusiveRange::new(self.recirc_gpm.0, self.recirc_gpm.1, "recirc range")
            .map_err(invalid)?;
        let tonnage =
            InclusiveRange::new(self.tonnage.0, self.tonnage.1, "tonnage range").map_err(invalid)?;
        let sizing = match self.family {
            Family::Separator => Sizing::Separator,
            Family::Vaf => Sizing::Vaf,
            Family::Vortisand => Sizing::Vortisand {
                loop_volume_gal: self
                    .loop_volume_gal
                    .map(|(min, max)| InclusiveRange::new(min, max, "loop volume range"))
                    .transpose()
                    .map_err(invalid)?,
            },
        };

        Ok(EquipmentRecord::new(
            self.model,
            sizing,
            self.power_hp,
            self.rated_flow_gpm,
            recirc,
            tonnage,
        )?
        .with_description(self.description))
    }
}

const BUILTIN_ROWS: [BuiltinRow; 23] = [
    BuiltinRow {
        model: "LCS120",
        family: Family::Separator,
        power_hp: 3.0,
        rated_flow_gpm: 120.0,
        recirc_gpm: (0.0, 600.0),
        tonnage: (0.0, 200.0),
        loop_volume_gal: None,
        description: "VHS-120 Hydrocyclone Separator, 3HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a 304SS formed base.",
    },
    BuiltinRow {
        model: "LCS180",
        family: Family::Separator,
        power_hp: 5.0,
        rated_flow_gpm: 180.0,
        recirc_gpm: (601.0, 900.0),
        tonnage: (201.0, 300.0),
        loop_volume_gal: None,
        description: "VHS-180 Hydrocyclone Separator, 5HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a 304SS formed base.",
    },
    BuiltinRow {
        model: "LCS260",
        family: Family::Separator,
        power_hp: 7.5,
        rated_flow_gpm: 260.0,
        recirc_gpm: (901.0, 1300.0),
        tonnage: (301.0, 433.0),
        loop_volume_gal: None,
        description: "VHS-260 Hydrocyclone Separator, 7.5HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a 304SS formed base.",
    },
    BuiltinRow {
        model: "LCS340",
        family: Family::Separator,
        power_hp: 7.5,
        rated_flow_gpm: 340.0,
        recirc_gpm: (1301.0, 1700.0),
        tonnage: (434.0, 567.0),
        loop_volume_gal: None,
        description: "VHS-340 Hydrocyclone Separator, 7.5HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a 304SS formed base.",
    },
    BuiltinRow {
        model: "CTS400",
        family: Family::Separator,
        power_hp: 15.0,
        rated_flow_gpm: 400.0,
        recirc_gpm: (1701.0, 2000.0),
        tonnage: (568.0, 667.0),
        loop_volume_gal: None,
        description: "VHS-400A Hydrocyclone Separator, 15HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a polyurethane coated channel frame base.",
    },
    BuiltinRow {
        model: "CTS700",
        family: Family::Separator,
        power_hp: 20.0,
        rated_flow_gpm: 700.0,
        recirc_gpm: (2001.0, 3500.0),
        tonnage: (668.0, 1167.0),
        loop_volume_gal: None,
        description: "VHS-700A Hydrocyclone Separator, 20HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a polyurethane coated channel frame base.",
    },
    BuiltinRow {
        model: "CTS950",
        family: Family::Separator,
        power_hp: 20.0,
        rated_flow_gpm: 950.0,
        recirc_gpm: (3501.0, 4750.0),
        tonnage: (1168.0, 1583.0),
        loop_volume_gal: None,
        description: "VHS-950A Hydrocyclone Separator, 20HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a polyurethane coated channel frame base.",
    },
    BuiltinRow {
        model: "CTS1600",
        family: Family::Separator,
        power_hp: 60.0,
        rated_flow_gpm: 1600.0,
        recirc_gpm: (4751.0, 8000.0),
        tonnage: (1584.0, 2667.0),
        loop_volume_gal: None,
        description: "VHS-1600A Hydrocyclone Separator, 60HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a polyurethane coated channel frame base.",
    },
    BuiltinRow {
        model: "CTS2300",
        family: Family::Separator,
        power_hp: 60.0,
        rated_flow_gpm: 2300.0,
        recirc_gpm: (8001.0, 11_500.0),
        tonnage: (2668.0, 3833.0),
        loop_volume_gal: None,
        description: "VHS-2300A Hydrocyclone Separator, 60HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a polyurethane coated channel frame base.",
    },
    BuiltinRow {
        model: "CTS3400",
        family: Family::Separator,
        power_hp: 100.0,
        rated_flow_gpm: 3400.0,
        recirc_gpm: (11_501.0, 17_000.0),
        tonnage: (3834.0, 5667.0),
        loop_volume_gal: None,
        description: "VHS-3400A Hydrocyclone Separator, 100HP bronze fitted DPPE pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, 2” Auto-purge valve, outlet throttle bronze gate valve, SCH80 PVC piping.  Mounted, wired, plumbed and tested on a polyurethane coated channel frame base.",
    },
    BuiltinRow {
        model: "CTF200",
        family: Family::Vaf,
        power_hp: 5.0,
        rated_flow_gpm: 100.0,
        recirc_gpm: (0.0, 2000.0),
        tonnage: (0.0, 667.0),
        loop_volume_gal: None,
        description: "V200PA Self-Cleaning Screen Filter, 25 micron screen, 140gpm Pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, Aquamatic 1.5 NPT Spring Assist w/ ASCO 24vac Solenoid, NEMA 3S MF 4 station AC 120/220VAC 1PH with DP gage/switch, setpoint of 6-8 psid, 24VAC steady Output, V42 Series cast Iron diaphragm valve, 1/4 NPT drill-tap of ports 1 & 3.",
    },
    BuiltinRow {
        model: "CTF250",
        family: Family::Vaf,
        power_hp: 7.5,
        rated_flow_gpm: 150.0,
        recirc_gpm: (2001.0, 3000.0),
        tonnage: (668.0, 1000.0),
        loop_volume_gal: None,
        description: "V250 Self-Cleaning Screen Filter, 25 micron screen, 180gpm Pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, Aquamatic 1.5 NPT Spring Assist w/ ASCO 24vac Solenoid, NEMA 3S MF 4 station AC 120/220VAC 1PH with DP gage/switch, setpoint of 6-8 psid, 24VAC steady Output, V42 Series cast Iron diaphragm valve, 1/4 NPT drill-tap of ports 1 & 3.",
    },
    BuiltinRow {
        model: "CTF500",
        family: Family::Vaf,
        power_hp: 15.0,
        rated_flow_gpm: 300.0,
        recirc_gpm: (3001.0, 6000.0),
        tonnage: (1001.0, 2000.0),
        loop_volume_gal: None,
        description: "V500 Self-Cleaning Screen Filter, 25 micron screen, 360gpm Pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, Aquamatic 1.5 NPT Spring Assist w/ ASCO 24vac Solenoid, NEMA 3S MF 4 station AC 120/220VAC 1PH with DP gage/switch, setpoint of 6-8 psid, 24VAC steady Output, V42 Series cast Iron diaphragm valve, 1/4 NPT drill-tap of ports 1 & 3.",
    },
    BuiltinRow {
        model: "CTF1000",
        family: Family::Vaf,
        power_hp: 30.0,
        rated_flow_gpm: 700.0,
        recirc_gpm: (6001.0, 14_000.0),
        tonnage: (2001.0, 4667.0),
        loop_volume_gal: None,
        description: "V1000 Self-Cleaning Screen Filter, 25 micron screen, 700gpm Pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, Aquamatic 1.5 NPT Spring Assist w/ ASCO 24vac Solenoid, NEMA 3S MF 4 station AC 120/220VAC 1PH with DP gage/switch, setpoint of 6-8 psid, 24VAC steady Output, V42 Series cast Iron diaphragm valve, 1/4 NPT drill-tap of ports 1 & 3.",
    },
    BuiltinRow {
        model: "CTF1500",
        family: Family::Vaf,
        power_hp: 50.0,
        rated_flow_gpm: 1100.0,
        recirc_gpm: (14_001.0, 22_000.0),
        tonnage: (4668.0, 7333.0),
        loop_volume_gal: None,
        description: "V1500 Self-Cleaning Screen Filter, 25 micron screen, 1050gpm Pump, 460VAC/3PH/60Hz NEMA 4X basic pump starter with green power available light, Aquamatic 1.5 NPT Spring Assist w/ ASCO 24vac Solenoid, NEMA 3S MF 4 station AC 120/220VAC 1PH with DP gage/switch, setpoint of 6-8 psid, 24VAC steady Output, V42 Series cast Iron diaphragm valve, 1/4 NPT drill-tap of ports 1 & 3.",
    },
    BuiltinRow {
        model: "VC50",
        family: Family::Vortisand,
        power_hp: 1.5,
        rated_flow_gpm: 50.0,
        recirc_gpm: (0.0, 5000.0),
        tonnage: (0.0, 1667.0),
        loop_volume_gal: Some((0.0, 190_000.0)),
        description: "Vortisand VC-50 filter, Filtration capacity 50 gpm,  1.5 HP Filter feed pump included, Filtered or city water used for backwash: 22 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC75",
        family: Family::Vortisand,
        power_hp: 1.5,
        rated_flow_gpm: 75.0,
        recirc_gpm: (5001.0, 7500.0),
        tonnage: (1668.0, 2500.0),
        loop_volume_gal: Some((190_001.0, 285_000.0)),
        description: "Vortisand VC-75 filter, Filtration capacity 75 gpm,  1.5 HP Filter feed pump included, Filtered or city water used for backwash: 35 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC100",
        family: Family::Vortisand,
        power_hp: 3.0,
        rated_flow_gpm: 100.0,
        recirc_gpm: (7501.0, 10_000.0),
        tonnage: (2501.0, 3333.0),
        loop_volume_gal: Some((285_001.0, 380_000.0)),
        description: "Vortisand VC-100 filter, Filtration capacity 100 gpm,  2.0 HP Filter feed pump included, Filtered or city water used for backwash: 50 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC140",
        family: Family::Vortisand,
        power_hp: 3.0,
        rated_flow_gpm: 140.0,
        recirc_gpm: (10_001.0, 14_000.0),
        tonnage: (3334.0, 4667.0),
        loop_volume_gal: Some((380_001.0, 532_000.0)),
        description: "Vortisand VC-140 filter, Filtration capacity 140 gpm,  3.0 HP Filter feed pump included, Filtered or city water used for backwash: 50 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC200",
        family: Family::Vortisand,
        power_hp: 5.0,
        rated_flow_gpm: 200.0,
        recirc_gpm: (14_001.0, 20_000.0),
        tonnage: (4668.0, 6667.0),
        loop_volume_gal: Some((532_001.0, 760_000.0)),
        description: "Vortisand VC-200 filter, Filtration capacity 200 gpm,  5.0 HP Filter feed pump included, Filtered or city water used for backwash: 100 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC280",
        family: Family::Vortisand,
        power_hp: 7.5,
        rated_flow_gpm: 280.0,
        recirc_gpm: (20_001.0, 28_000.0),
        tonnage: (6668.0, 9333.0),
        loop_volume_gal: Some((760_001.0, 1_064_000.0)),
        description: "Vortisand VC-280 filter, Filtration capacity 280 gpm,  5.0 HP Filter feed pump included, Filtered or city water used for backwash: 100 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC350",
        family: Family::Vortisand,
        power_hp: 10.0,
        rated_flow_gpm: 350.0,
        recirc_gpm: (28_001.0, 35_000.0),
        tonnage: (9334.0, 11_667.0),
        loop_volume_gal: Some((1_064_001.0, 1_330_000.0)),
        description: "Vortisand VC-350 filter, Filtration capacity 350 gpm,  10 HP Filter feed pump included, Filtered or city water used for backwash: 100 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
    BuiltinRow {
        model: "VC600",
        family: Family::Vortisand,
        power_hp: 15.0,
        rated_flow_gpm: 600.0,
        recirc_gpm: (35_001.0, 60_000.0),
        tonnage: (11_668.0, 20_000.0),
        loop_volume_gal: Some((1_330_001.0, 2_280_000.0)),
        description: "Vortisand VC-600 filter, Filtration capacity 600 gpm,  15 HP Filter feed pump included, Filtered or city water used for backwash: 300 gpm, System shall be shipped in two parts (the vessel and the structural steel skid, urethane painted), Media shall be shipped separately, Stainless Steel 304 vessel with ASME, Sec. VIII Div.1, Backwash booster pump is not included, PVC Sch. 80 face piping, PLC included: PLC /w Touchscreen HMI, Metering pump option.",
    },
];

/// Materialize the built-in rows as validated records, in table order.
pub fn builtin_records() -> CatalogResult<Vec<EquipmentRecord>> {
    BUILTIN_ROWS.iter().map(|row| row.to_record()).collect()
}
