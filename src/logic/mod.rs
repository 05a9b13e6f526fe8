//! Logic Module - Triage Engines
//!
//! Chứa các engines xử lý: Classifier, Taxonomy, Query, Fields, Dataset.
//!
//! ## Structure
//! - `triage/` - Record types + severity tier classifier
//! - `taxonomy/` - Category/status reference tables
//! - `query/` - Filter / sort / related-record engines
//! - `fields/` - Field & check model (dimensional view)
//! - `dataset/` - Seeded collections + in-memory store

pub mod dataset;
pub mod fields;
pub mod query;
pub mod taxonomy;
pub mod triage;
