//! Anomaly Triage Core
//!
//! Classification & query engine cho anomaly triage dashboard.
//! Nhận records đã được chấm điểm sẵn - KHÔNG chạy detection.
//!
//! ## Pipeline
//! 1. `logic/dataset` - Pre-scored records (from the detection backend / mock provider)
//! 2. `logic/triage` - Severity tier classification (score -> tier)
//! 3. `logic/taxonomy` - Category/status reference tables + lookup
//! 4. `logic/query` - Filter, sort, related-record resolution
//! 5. `logic/fields` - Monitored field/check model for the dimensional view
//!
//! All operations are deterministic, synchronous, and side-effect free.
//! The presentation layer (tables, cards, detail panels) lives elsewhere.

pub mod logic;

// Re-export main types for convenience
pub use logic::triage::{
    classify, count_by_tier, AnomalyKind, AnomalyRecord, AnomalyStatus, SeverityTier, TierCounts,
};

pub use logic::taxonomy::{CategoryInfo, RegistryError, StatusInfo, TaxonomyRegistry};

pub use logic::query::{filter_records, resolve_related, sort_records, AnomalyFilter, SortKey};

pub use logic::fields::{
    worst_status, CheckCategory, CheckResult, CheckStatus, ComparisonValue, FieldRecord, FieldType,
};
