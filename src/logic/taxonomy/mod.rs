//! Taxonomy Module
//!
//! Reference tables cho categories và statuses.
//! Immutable sau khi load - lookup only, không có mutation.
//!
//! ## Structure
//! - `types`: CategoryInfo, StatusInfo
//! - `registry`: TaxonomyRegistry (builtin table, JSON loading, lookups)

pub mod registry;
pub mod types;

pub use registry::{RegistryError, TaxonomyRegistry};
pub use types::{CategoryInfo, StatusInfo};
