//! Triage Store
//!
//! Process-wide in-memory collection (load-once, read-many).
//! Records are immutable after load; `load` replaces the whole set.

use parking_lot::Mutex;

use super::records::sample_anomalies;
use crate::logic::query::filter::{filter_records, AnomalyFilter};
use crate::logic::query::sort::{sort_records, SortKey};
use crate::logic::triage::classifier::count_by_tier;
use crate::logic::triage::types::{AnomalyRecord, TierCounts};

// Global store (in-memory only - no persistence in this component)
static STORE: Mutex<Option<TriageStore>> = Mutex::new(None);

struct TriageStore {
    records: Vec<AnomalyRecord>,
}

fn with_store<T>(f: impl FnOnce(&TriageStore) -> T) -> T {
    let mut guard = STORE.lock();
    let store = guard.get_or_insert_with(|| TriageStore { records: vec![] });
    f(store)
}

// Public API

/// Replace the collection with `records`
pub fn load(records: Vec<AnomalyRecord>) {
    log::info!("Triage store loaded: {} records", records.len());
    let mut guard = STORE.lock();
    *guard = Some(TriageStore { records });
}

/// Load the seeded sample collection
pub fn load_samples() {
    load(sample_anomalies());
}

/// Cloned view of the full collection, in insertion order
pub fn snapshot() -> Vec<AnomalyRecord> {
    with_store(|store| store.records.clone())
}

/// Record by exact id
pub fn find(id: &str) -> Option<AnomalyRecord> {
    with_store(|store| store.records.iter().find(|r| r.id == id).cloned())
}

/// Filter then (optionally) sort - filtering never reorders on its own
pub fn query(filter: &AnomalyFilter, sort: Option<SortKey>) -> Vec<AnomalyRecord> {
    let filtered = with_store(|store| filter_records(&store.records, filter));
    match sort {
        Some(key) => sort_records(&filtered, key),
        None => filtered,
    }
}

/// Tier counts over the full collection (summary cards)
pub fn tier_counts() -> TierCounts {
    with_store(|store| count_by_tier(&store.records))
}
