//! Dataset Module
//!
//! Seeded record collections và in-memory store.
//! Đây là chỗ data provider cắm vào - trong production, backend query
//! thay thế các sample collections.
//!
//! ## Structure
//! - `records`: Seeded anomaly records
//! - `fields`: Seeded field/check records (dimensional view)
//! - `store`: Load-once in-memory triage store

pub mod fields;
pub mod records;
pub mod store;

mod tests;

pub use fields::sample_fields;
pub use records::sample_anomalies;
pub use store::{find, load, load_samples, query, snapshot, tier_counts};
