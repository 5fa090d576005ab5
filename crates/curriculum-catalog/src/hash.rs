#![deny(unsafe_code)]

use std::path::PathBuf;

use serde::Serialize;
use sha2::Digest;

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Identifies the exact catalog file a report was produced against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSource {
    pub path: PathBuf,
    pub sha256: String,
    pub course_count: usize,
}

impl CatalogSource {
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8], course_count: usize) -> Self {
        Self {
            path: path.into(),
            sha256: sha256_hex(bytes),
            course_count,
        }
    }
}
