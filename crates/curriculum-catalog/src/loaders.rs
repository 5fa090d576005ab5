use std::path::{Path, PathBuf};

use tracing::{debug, info};

use curriculum_model::CourseDefinition;

use crate::error::CatalogLoadError;
use crate::hash::CatalogSource;
use crate::index::CatalogIndex;
use crate::paths::resolve_policy_path;
use crate::policy::ValidationPolicy;
use crate::records::CatalogDocument;

/// A catalog index together with the files it was built from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub index: CatalogIndex,
    pub sources: Vec<CatalogSource>,
}

/// Read one catalog file into course definitions.
pub fn load_catalog_file(
    path: &Path,
) -> Result<(Vec<CourseDefinition>, CatalogSource), CatalogLoadError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogLoadError::io(path, e))?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| CatalogLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let document = CatalogDocument::from_value(value).map_err(|(group, message)| {
        CatalogLoadError::InvalidGroup {
            path: path.to_path_buf(),
            group,
            message,
        }
    })?;
    debug!(
        path = %path.display(),
        groups = document.groups.len(),
        records = document.record_count(),
        "catalog file parsed"
    );
    let definitions = document.into_definitions()?;
    let source = CatalogSource::from_bytes(path, &bytes, definitions.len());
    Ok((definitions, source))
}

/// Load one or more catalog files into a single index.
///
/// Codes must be unique across all files.
pub fn load_catalog(paths: &[PathBuf]) -> Result<LoadedCatalog, CatalogLoadError> {
    let mut definitions = Vec::new();
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let (mut file_definitions, source) = load_catalog_file(path)?;
        definitions.append(&mut file_definitions);
        sources.push(source);
    }
    let index = CatalogIndex::build(definitions)?;
    info!(
        files = sources.len(),
        courses = index.len(),
        dangling = index.dangling_references().len(),
        "catalog loaded"
    );
    Ok(LoadedCatalog { index, sources })
}

/// Parse a policy from TOML text.
pub fn parse_policy(text: &str, path: &Path) -> Result<ValidationPolicy, CatalogLoadError> {
    let policy: ValidationPolicy = toml::from_str(text).map_err(|source| CatalogLoadError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    policy
        .check()
        .map_err(|message| CatalogLoadError::InvalidPolicy { message })?;
    Ok(policy)
}

pub fn load_policy(path: &Path) -> Result<ValidationPolicy, CatalogLoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogLoadError::io(path, e))?;
    parse_policy(&text, path)
}

/// Load the policy named by `explicit` or the environment, or the defaults.
pub fn load_policy_or_default(
    explicit: Option<&Path>,
) -> Result<ValidationPolicy, CatalogLoadError> {
    match resolve_policy_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading validation policy");
            load_policy(&path)
        }
        None => Ok(ValidationPolicy::default()),
    }
}
