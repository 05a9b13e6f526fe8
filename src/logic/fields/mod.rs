//! Fields Module
//!
//! Data model cho dimensional-anomaly view: monitored columns và
//! automated check results.
//!
//! ## Structure
//! - `types`: FieldRecord, CheckResult, CheckCategory, CheckStatus
//! - `checks`: Worst-status rollup, check filtering, distribution helpers

pub mod checks;
pub mod types;

pub use checks::{distribution_total, filter_checks, is_normalized, worst_status};
pub use types::{CheckCategory, CheckResult, CheckStatus, ComparisonValue, FieldRecord, FieldType};
