//! Sort Engine
//!
//! Stable sort only. Consumers rely on insertion order (detection time)
//! as the implicit tiebreaker, so stability is a correctness requirement
//! here, not an optimization.

use serde::{Deserialize, Serialize};

use crate::logic::triage::classifier::classify;
use crate::logic::triage::rules::severity_rank;
use crate::logic::triage::types::AnomalyRecord;

/// Supported sort keys for the anomaly table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Derived tier ordinal: critical=0, non-critical=1, informational=2.
    /// Labels the rank table does not recognize sort last (rank 3).
    SeverityRank,
    /// Lexicographic ascending on the record title
    Title,
}

/// Return a sorted copy of `records`. Ties keep their input order.
pub fn sort_records(records: &[AnomalyRecord], key: SortKey) -> Vec<AnomalyRecord> {
    let mut sorted: Vec<AnomalyRecord> = records.to_vec();
    match key {
        // Vec::sort_by_key is stable - equal ranks keep input order
        SortKey::SeverityRank => {
            sorted.sort_by_key(|r| severity_rank(classify(r.score).as_str()));
        }
        SortKey::Title => {
            sorted.sort_by(|a, b| a.title.cmp(&b.title));
        }
    }
    sorted
}
