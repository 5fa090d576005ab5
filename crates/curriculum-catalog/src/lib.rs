#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod index;
pub mod loaders;
pub mod paths;
pub mod policy;
pub mod records;

pub use crate::error::CatalogLoadError;
pub use crate::hash::{CatalogSource, sha256_hex};
pub use crate::index::CatalogIndex;
pub use crate::loaders::{
    LoadedCatalog, load_catalog, load_catalog_file, load_policy, load_policy_or_default,
    parse_policy,
};
pub use crate::paths::{POLICY_ENV_VAR, resolve_policy_path};
pub use crate::policy::{CreditLimits, GradePolicy, ValidationPolicy};
pub use crate::records::{CatalogDocument, CatalogRecord, RawCredits};
