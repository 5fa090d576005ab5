//! Error types for transcript ingestion.

use std::path::PathBuf;

use thiserror::Error;

use curriculum_model::StructureError;

/// Errors that can occur while reading transcripts.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Transcript path is neither a file nor a directory.
    #[error("transcript file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    #[error("failed to parse transcript {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Transcript content failed structural validation.
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
