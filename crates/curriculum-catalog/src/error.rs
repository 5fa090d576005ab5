#![deny(unsafe_code)]

use std::path::PathBuf;

use curriculum_model::{CatalogError, StructureError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML policy {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid course group {group} in {path}: {message}")]
    InvalidGroup {
        path: PathBuf,
        group: String,
        message: String,
    },

    #[error("invalid policy: {message}")]
    InvalidPolicy { message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl CatalogLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
