//! CLI library components for the curriculum checker.

pub mod logging;
pub mod report_json;
