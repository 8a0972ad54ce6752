use std::collections::HashSet;

use tracing::debug;

use crate::{CatalogError, CatalogResult, EquipmentRecord, Family, builtin};

/// Read-only collection of equipment records.
///
/// Record order is significant: selection tie-breaks resolve to the record
/// that appears first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<EquipmentRecord>,
}

impl Catalog {
    /// Assemble a catalog, rejecting duplicate model identifiers.
    ///
    /// Per-record invariants are enforced when the records are built.
    pub fn new(records: Vec<EquipmentRecord>) -> CatalogResult<Self> {
        {
            let mut seen = HashSet::new();
            for record in &records {
                if !seen.insert(record.model()) {
                    return Err(CatalogError::DuplicateModel {
                        model: record.model().to_string(),
                    });
                }
            }
        }
        debug!(records = records.len(), "catalog assembled");
        Ok(Self { records })
    }

    /// The built-in reference catalog.
    pub fn builtin() -> CatalogResult<Self> {
        Self::new(builtin::builtin_records()?)
    }

    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    /// Records of one family, in catalog order.
    pub fn records_of_family(
        &self,
        family: Family,
    ) -> impl Iterator<Item = &EquipmentRecord> + '_ {
        self.records.iter().filter(move |r| r.family() == family)
    }

    pub fn get(&self, model: &str) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| r.model() == model)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sizing;
    use sf_core::InclusiveRange;

    fn record(model: &str) -> EquipmentRecord {
        let r = InclusiveRange::new(0.0, 100.0, "test").unwrap();
        EquipmentRecord::new(model, Sizing::Vaf, 1.0, 10.0, r, r).unwrap()
    }

    #[test]
    fn duplicate_models_are_rejected() {
        let err = Catalog::new(vec![record("A"), record("B"), record("A")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateModel {
                model: "A".to_string()
            }
        );
    }

    #[test]
    fn records_of_family_keeps_order() {
        let catalog = Catalog::builtin().unwrap();
        let models: Vec<&str> = catalog
            .records_of_family(Family::Vaf)
            .map(|r| r.model())
            .collect();
        assert_eq!(models, ["CTF200", "CTF250", "CTF500", "CTF1000", "CTF1500"]);
    }

    #[test]
    fn get_by_model() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get("VC350").map(|r| r.power_hp()), Some(10.0));
        assert!(catalog.get("VC9999").is_none());
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.records_of_family(Family::Separator).count(), 0);
    }
}
