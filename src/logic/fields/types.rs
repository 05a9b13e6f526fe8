//! Field & Check Types
//!
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// CHECK CLASSIFICATION
// ============================================================================

/// What a check inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckCategory {
    Distribution,
    Cardinality,
    Rate,
    Nullity,
    Pattern,
}

impl CheckCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCategory::Distribution => "distribution",
            CheckCategory::Cardinality => "cardinality",
            CheckCategory::Rate => "rate",
            CheckCategory::Nullity => "nullity",
            CheckCategory::Pattern => "pattern",
        }
    }
}

/// Outcome of a single automated check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Critical,
    Warning,
    Info,
    Pass,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Critical => "critical",
            CheckStatus::Warning => "warning",
            CheckStatus::Info => "info",
            CheckStatus::Pass => "pass",
        }
    }

    /// Higher = worse. Used for the worst-status rollup on field rows.
    pub fn severity_level(&self) -> u8 {
        match self {
            CheckStatus::Critical => 3,
            CheckStatus::Warning => 2,
            CheckStatus::Info => 1,
            CheckStatus::Pass => 0,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CheckStatus::Critical => "#ef4444", // Red
            CheckStatus::Warning => "#f59e0b",  // Yellow
            CheckStatus::Info => "#3b82f6",     // Blue
            CheckStatus::Pass => "#10b981",     // Green
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// COMPARISON VALUES
// ============================================================================

/// Baseline/current comparison payload on a check.
/// Pre-computed upstream - opaque to this model, never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    Scalar(f64),
    /// Category value -> percentage
    Distribution(Vec<(String, f64)>),
}

// ============================================================================
// CHECK RESULT
// ============================================================================

/// A single automated test outcome. Belongs to exactly one FieldRecord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: CheckCategory,
    pub status: CheckStatus,
    pub baseline: Option<ComparisonValue>,
    pub current: Option<ComparisonValue>,
}

// ============================================================================
// FIELD RECORD
// ============================================================================

/// Declared type of a monitored column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Timestamp => "timestamp",
        }
    }
}

/// A monitored data column with its value distribution and check results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    pub field_type: FieldType,
    /// Distinct value count as reported upstream
    pub cardinality: u64,
    /// Category value -> percentage; entries keep display order and
    /// should sum to ~100 (see `checks::is_normalized`)
    pub distribution: Vec<(String, f64)>,
    pub checks: Vec<CheckResult>,
}
