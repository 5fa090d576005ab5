//! Policy file path resolution.

use std::path::{Path, PathBuf};

/// Environment variable naming a policy TOML file.
pub const POLICY_ENV_VAR: &str = "CURRICULUM_POLICY";

/// Resolve the policy file to load.
///
/// Resolution order:
/// 1. the explicit path (e.g. from `--policy`)
/// 2. `CURRICULUM_POLICY` environment variable
/// 3. none: built-in defaults apply
pub fn resolve_policy_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(POLICY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
