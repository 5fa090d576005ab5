//! Transcript validation against a course catalog.
//!
//! The engine is pure and synchronous: it reads an immutable
//! [`curriculum_catalog::CatalogIndex`] and [`curriculum_catalog::ValidationPolicy`]
//! and returns a [`curriculum_model::Report`] per transcript. Rule violations
//! are findings in the report, never errors.

pub mod completion;
pub mod credit;
pub mod engine;
pub mod report;
pub mod rules;
pub mod tracker;

pub use completion::{UNIDENTIFIED_CATEGORY, summarize_completion};
pub use credit::check_credit_limit;
pub use engine::{Validator, validate_transcript};
pub use report::{ReportAssembler, order_findings};
pub use rules::{evaluate_course, evaluate_semester};
pub use tracker::{CompletionSnapshot, CompletionTracker};
