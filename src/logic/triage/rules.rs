//! Severity Tier Rules & Thresholds
//!
//! Định nghĩa các threshold cho tier assignment.
//! KHÔNG chứa logic classify - chỉ constants và config.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (Constants - không đổi lúc runtime)
// ============================================================================

/// At or above this score = Critical
pub const CRITICAL_THRESHOLD: f32 = 0.9;

/// At or above this score (and below CRITICAL_THRESHOLD) = NonCritical.
/// Below it = Informational.
pub const NON_CRITICAL_THRESHOLD: f32 = 0.7;

// ============================================================================
// SORT RANKS
// ============================================================================

/// Rank assigned to severity labels the sorter does not recognize
/// (legacy feeds still emit "NORMAL") - sorts after all real tiers.
pub const UNRECOGNIZED_SEVERITY_RANK: u8 = 3;

/// Sort ordinal for a severity label string.
/// critical=0, non-critical=1, informational=2, anything else=3.
pub fn severity_rank(label: &str) -> u8 {
    match label {
        "critical" => 0,
        "non-critical" => 1,
        "informational" => 2,
        _ => UNRECOGNIZED_SEVERITY_RANK,
    }
}

// ============================================================================
// CONFIGURABLE THRESHOLDS (for test substitution)
// ============================================================================

/// Tier boundaries (configurable)
///
/// Invariant: `critical_min > non_critical_min`. Both bounds are closed
/// (`>=`), making the tiers a non-overlapping partition of the score axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierThresholds {
    /// At or above this = Critical
    pub critical_min: f32,
    /// At or above this = NonCritical, below = Informational
    pub non_critical_min: f32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            critical_min: CRITICAL_THRESHOLD,
            non_critical_min: NON_CRITICAL_THRESHOLD,
        }
    }
}

impl TierThresholds {
    /// High sensitivity - lower boundaries, more records surface as actionable
    pub fn high_sensitivity() -> Self {
        Self {
            critical_min: 0.8,
            non_critical_min: 0.5,
        }
    }

    /// Low sensitivity - higher boundaries, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            critical_min: 0.95,
            non_critical_min: 0.8,
        }
    }
}
