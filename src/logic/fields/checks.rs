//! Check Rollups & Filters
//!
//! Derivations over a field's check list - worst-status badge,
//! status/category filtering, distribution sanity helpers.

use super::types::{CheckCategory, CheckResult, CheckStatus, FieldRecord};

/// Tolerance for `is_normalized` - upstream percentages are rounded,
/// so a distribution summing to 99.8 still counts as normalized
pub const DISTRIBUTION_TOLERANCE: f64 = 0.5;

/// Most severe check status on the field - drives the row badge.
/// A field with no checks reads as Pass.
pub fn worst_status(field: &FieldRecord) -> CheckStatus {
    field
        .checks
        .iter()
        .map(|c| c.status)
        .max_by_key(|s| s.severity_level())
        .unwrap_or(CheckStatus::Pass)
}

/// Conjunctive filter over a field's checks. `None` = field excluded,
/// same contract as the anomaly filter. Preserves input order.
pub fn filter_checks(
    field: &FieldRecord,
    status: Option<CheckStatus>,
    category: Option<CheckCategory>,
) -> Vec<CheckResult> {
    field
        .checks
        .iter()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .cloned()
        .collect()
}

/// Sum of the field's distribution percentages
pub fn distribution_total(field: &FieldRecord) -> f64 {
    field.distribution.iter().map(|(_, pct)| pct).sum()
}

/// True when the distribution sums to 100 within tolerance
pub fn is_normalized(field: &FieldRecord) -> bool {
    (distribution_total(field) - 100.0).abs() <= DISTRIBUTION_TOLERANCE
}

// ============================================================================
// TESTS
// ============================================================================
