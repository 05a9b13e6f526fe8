//! Taxonomy Types
//!
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

/// One entry in the anomaly category taxonomy.
/// Immutable reference data, not per-record state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Stable id referenced by `AnomalyRecord::category_id`,
    /// e.g. "intent-action-mismatch"
    pub id: String,
    /// Display name, e.g. "Intent-Action Mismatch"
    pub name: String,
    /// Hex color token for badges
    pub color: String,
    pub description: String,
}

/// One entry in the triage status table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    /// Stable id, e.g. "investigating"
    pub id: String,
    pub name: String,
    pub color: String,
}
