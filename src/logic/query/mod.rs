//! Query Module
//!
//! Filter / sort / related-record engines cho anomaly table.
//! Tất cả operations đều stable và pure - không mutate input.
//!
//! ## Structure
//! - `filter`: Conjunctive filter spec (AND of independent fields)
//! - `sort`: Stable sort by severity rank or title
//! - `related`: Tolerant related-id resolver

pub mod filter;
pub mod related;
pub mod sort;

mod tests;

pub use filter::{filter_records, AnomalyFilter};
pub use related::resolve_related;
pub use sort::{sort_records, SortKey};
