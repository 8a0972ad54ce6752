//! sf-project: design file and catalog file formats, plus input validation.

pub mod schema;
pub mod validate;

use std::path::Path;

pub use schema::*;
pub use validate::{ValidationError, validate_catalog, validate_design};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// `.json` is JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

pub fn parse_design(content: &str, format: FileFormat) -> ProjectResult<DesignFile> {
    let design: DesignFile = match format {
        FileFormat::Yaml => serde_yaml::from_str(content)?,
        FileFormat::Json => serde_json::from_str(content)?,
    };
    validate_design(&design)?;
    Ok(design)
}

pub fn load_design(path: &Path) -> ProjectResult<DesignFile> {
    let content = std::fs::read_to_string(path)?;
    parse_design(&content, FileFormat::from_path(path))
}

pub fn save_design(path: &Path, design: &DesignFile) -> ProjectResult<()> {
    validate_design(design)?;
    let content = match FileFormat::from_path(path) {
        FileFormat::Yaml => serde_yaml::to_string(design)?,
        FileFormat::Json => serde_json::to_string_pretty(design)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

pub fn parse_catalog(content: &str, format: FileFormat) -> ProjectResult<CatalogFile> {
    let file: CatalogFile = match format {
        FileFormat::Yaml => serde_yaml::from_str(content)?,
        FileFormat::Json => serde_json::from_str(content)?,
    };
    validate_catalog(&file)?;
    Ok(file)
}

pub fn load_catalog(path: &Path) -> ProjectResult<CatalogFile> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content, FileFormat::from_path(path))
}

pub fn save_catalog(path: &Path, file: &CatalogFile) -> ProjectResult<()> {
    validate_catalog(file)?;
    let content = match FileFormat::from_path(path) {
        FileFormat::Yaml => serde_yaml::to_string(file)?,
        FileFormat::Json => serde_json::to_string_pretty(file)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a")), FileFormat::Yaml);
    }
}
