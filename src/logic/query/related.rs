//! Related-Record Resolver
//!
//! Tolerant lookup: the relationship graph is allowed to contain stale
//! references (records get suppressed/rotated out of the window), so a
//! dangling id is dropped from the output - no error, no placeholder.

use crate::logic::triage::types::AnomalyRecord;

/// Resolve `record.related_ids` against `all_records`.
///
/// Output order follows `related_ids`, not the order of `all_records`.
/// Length is always <= `related_ids.len()`.
pub fn resolve_related(record: &AnomalyRecord, all_records: &[AnomalyRecord]) -> Vec<AnomalyRecord> {
    let mut related = Vec::with_capacity(record.related_ids.len());
    for id in &record.related_ids {
        match all_records.iter().find(|r| r.id == *id) {
            Some(found) => related.push(found.clone()),
            None => {
                log::warn!("Record {} references missing related id '{}'", record.id, id);
            }
        }
    }
    related
}
