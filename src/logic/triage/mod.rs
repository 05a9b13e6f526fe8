//! Triage Module
//!
//! Phân loại anomaly records theo severity tier dựa trên score.
//! Đây là CORE STEP - nơi quyết định Critical/NonCritical/Informational.
//!
//! ## Structure
//! - `types`: Core types (AnomalyRecord, SeverityTier, TierCounts, etc.)
//! - `rules`: Thresholds and rank constants
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use anomaly_triage_core::logic::triage::{classify, SeverityTier};
//!
//! match classify(0.94) {
//!     SeverityTier::Critical => println!("Page someone"),
//!     SeverityTier::NonCritical => println!("Review today"),
//!     SeverityTier::Informational => println!("FYI only"),
//! }
//! ```

pub mod classifier;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use types::{
    AnomalyKind, AnomalyRecord, AnomalyStatus, PromptResponse, SeverityTier, TierCounts,
    TokenUsage,
};

pub use rules::{
    severity_rank, TierThresholds, CRITICAL_THRESHOLD, NON_CRITICAL_THRESHOLD,
    UNRECOGNIZED_SEVERITY_RANK,
};

pub use classifier::{classify, classify_with_thresholds, count_by_tier};
