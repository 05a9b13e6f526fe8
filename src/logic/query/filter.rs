//! Filter Engine
//!
//! Conjunctive filter over independent optional fields. `None` is the
//! "all" sentinel - the field is excluded from matching. Active fields
//! are ANDed; there is no OR/NOT.

use serde::{Deserialize, Serialize};

use crate::logic::triage::classifier::classify;
use crate::logic::triage::types::{AnomalyKind, AnomalyRecord, AnomalyStatus, SeverityTier};

/// Dropdown sentinel meaning "no constraint on this field"
pub const ALL: &str = "all";

/// Filter specification for the anomaly table.
/// Every field defaults to `None` = match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnomalyFilter {
    pub tier: Option<SeverityTier>,
    pub category_id: Option<String>,
    pub status: Option<AnomalyStatus>,
    pub kind: Option<AnomalyKind>,
}

impl AnomalyFilter {
    /// Matches every record
    pub fn any() -> Self {
        Self::default()
    }

    /// Build a filter from the dashboard's dropdown selections.
    /// `"all"` (and any unparsable selection) deactivates that field.
    pub fn from_selections(tier: &str, category: &str, status: &str, kind: &str) -> Self {
        Self {
            tier: SeverityTier::parse(tier),
            category_id: if category == ALL {
                None
            } else {
                Some(category.to_string())
            },
            status: AnomalyStatus::parse(status),
            kind: AnomalyKind::parse(kind),
        }
    }

    /// True when no field is active (filtering is a no-op)
    pub fn is_empty(&self) -> bool {
        self.tier.is_none()
            && self.category_id.is_none()
            && self.status.is_none()
            && self.kind.is_none()
    }

    /// Conjunction of all active fields
    pub fn matches(&self, record: &AnomalyRecord) -> bool {
        if let Some(tier) = self.tier {
            if classify(record.score) != tier {
                return false;
            }
        }
        if let Some(category_id) = &self.category_id {
            if record.category_id != *category_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` to `records`, preserving relative input order.
///
/// An empty result is valid output (impossible combinations are not an
/// error). Sorting is a separate explicit step - this never reorders.
pub fn filter_records(records: &[AnomalyRecord], filter: &AnomalyFilter) -> Vec<AnomalyRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}
