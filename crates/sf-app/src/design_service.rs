//! Design file loading and catalog resolution.

use std::path::{Path, PathBuf};

use sf_catalog::Catalog;
use sf_project::{DesignFile, FileFormat, validate_design};
use sf_select::{SelectionPolicy, SystemDescription};
use tracing::info;

use crate::compile::{compile_catalog, compile_policy, compile_system};
use crate::error::{AppError, AppResult};
use crate::report::SelectionReport;
use crate::selection_service;

/// A design file with everything resolved for evaluation.
#[derive(Debug, Clone)]
pub struct LoadedDesign {
    pub design: DesignFile,
    pub catalog: Catalog,
    pub policy: SelectionPolicy,
    pub system: SystemDescription,
}

impl LoadedDesign {
    pub fn evaluate(&self) -> SelectionReport {
        selection_service::evaluate(&self.catalog, self.policy, self.system)
    }
}

fn read_file(path: &Path, what: &'static str) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Load the catalog at `path`, or the built-in catalog when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin()?);
    };
    let content = read_file(path, "catalog")?;
    let file = sf_project::parse_catalog(&content, FileFormat::from_path(path))?;
    let catalog = compile_catalog(&file)?;
    info!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse and validate a design file without resolving its catalog.
pub fn read_design(path: &Path) -> AppResult<DesignFile> {
    let content = read_file(path, "design")?;
    Ok(sf_project::parse_design(&content, FileFormat::from_path(path))?)
}

/// Catalog path named by a design, resolved against the design's directory.
pub fn design_catalog_path(design_path: &Path, design: &DesignFile) -> Option<PathBuf> {
    design.catalog.as_ref().map(|rel| {
        if rel.is_absolute() {
            rel.clone()
        } else {
            design_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(rel)
        }
    })
}

/// Load a design file, its catalog and its policy. `catalog_override` wins
/// over the catalog named in the file.
pub fn load_design(path: &Path, catalog_override: Option<&Path>) -> AppResult<LoadedDesign> {
    let design = read_design(path)?;
    info!(path = %path.display(), name = %design.name, "design loaded");

    let catalog_path = catalog_override
        .map(Path::to_path_buf)
        .or_else(|| design_catalog_path(path, &design));
    let catalog = load_catalog(catalog_path.as_deref())?;

    prepare(design, catalog)
}

/// Validate an in-memory design against a catalog and compile it.
pub fn prepare(design: DesignFile, catalog: Catalog) -> AppResult<LoadedDesign> {
    validate_design(&design)?;
    let policy = compile_policy(&design.policy)?;
    let system = compile_system(&design);
    Ok(LoadedDesign {
        design,
        catalog,
        policy,
        system,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_catalog_resolves_next_to_design() {
        let design = DesignFile {
            version: 1,
            name: String::new(),
            system: sf_project::SystemDef::Closed {
                system_volume_gal: Some(1.0),
            },
            energy_price_per_kwh: 0.1,
            policy: Default::default(),
            catalog: Some(PathBuf::from("cat.yaml")),
        };
        assert_eq!(
            design_catalog_path(Path::new("/plant/designs/tower.yaml"), &design),
            Some(PathBuf::from("/plant/designs/cat.yaml"))
        );
        assert_eq!(
            design_catalog_path(Path::new("tower.yaml"), &design),
            Some(PathBuf::from("cat.yaml"))
        );
    }

    #[test]
    fn missing_design_file_is_a_read_error() {
        let err = read_design(Path::new("/nonexistent/design.yaml")).unwrap_err();
        assert!(matches!(err, AppError::FileRead { what: "design", .. }));
    }

    #[test]
    fn prepare_rejects_invalid_design() {
        let design = DesignFile {
            version: 1,
            name: String::new(),
            system: sf_project::SystemDef::Open {
                tonnage: None,
                total_recirc_gpm: None,
            },
            energy_price_per_kwh: 0.1,
            policy: Default::default(),
            catalog: None,
        };
        let err = prepare(design, Catalog::builtin().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
