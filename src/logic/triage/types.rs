//! Triage Types
//!
//! Core types cho anomaly triage.
//! KHÔNG chứa logic - chỉ data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY TIER
// ============================================================================

/// Severity tier derived from an anomaly score.
///
/// Never stored on a record - always computed from `score` on read,
/// so it cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityTier {
    /// Actionable, page-someone territory (score >= 0.9)
    Critical,
    /// Actionable but not urgent (0.7 <= score < 0.9)
    NonCritical,
    /// Non-actionable, informational only (score < 0.7)
    Informational,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "critical",
            SeverityTier::NonCritical => "non-critical",
            SeverityTier::Informational => "informational",
        }
    }

    /// Long display label shown in the detail panel header
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "Actionable, Critical Anomaly",
            SeverityTier::NonCritical => "Actionable, Non-Critical Anomaly",
            SeverityTier::Informational => "Non-Actionable, Informational Anomaly",
        }
    }

    /// Sort ordinal - lower sorts first
    pub fn rank(&self) -> u8 {
        match self {
            SeverityTier::Critical => 0,
            SeverityTier::NonCritical => 1,
            SeverityTier::Informational => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "#ef4444",      // Red
            SeverityTier::NonCritical => "#f59e0b",   // Yellow
            SeverityTier::Informational => "#3b82f6", // Blue
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self, SeverityTier::Critical | SeverityTier::NonCritical)
    }

    /// Parse a dropdown selection. `"all"` and unknown labels map to `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "critical" => Some(SeverityTier::Critical),
            "non-critical" => Some(SeverityTier::NonCritical),
            "informational" => Some(SeverityTier::Informational),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RECORD STATUS
// ============================================================================

/// Triage status - externally assigned, read-only from this model's
/// point of view. Transition logic lives in the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyStatus {
    New,
    Investigating,
    Suppressed,
    Escalated,
}

impl AnomalyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyStatus::New => "new",
            AnomalyStatus::Investigating => "investigating",
            AnomalyStatus::Suppressed => "suppressed",
            AnomalyStatus::Escalated => "escalated",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AnomalyStatus::New => "#3b82f6",           // Blue
            AnomalyStatus::Investigating => "#f59e0b", // Yellow
            AnomalyStatus::Suppressed => "#6b7280",    // Gray
            AnomalyStatus::Escalated => "#ef4444",     // Red
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "new" => Some(AnomalyStatus::New),
            "investigating" => Some(AnomalyStatus::Investigating),
            "suppressed" => Some(AnomalyStatus::Suppressed),
            "escalated" => Some(AnomalyStatus::Escalated),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnomalyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ANOMALY KIND
// ============================================================================

/// Which detector family produced the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyKind {
    Behavioral,
    Statistical,
    Policy,
    Drift,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::Behavioral => "behavioral",
            AnomalyKind::Statistical => "statistical",
            AnomalyKind::Policy => "policy",
            AnomalyKind::Drift => "drift",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "behavioral" => Some(AnomalyKind::Behavioral),
            "statistical" => Some(AnomalyKind::Statistical),
            "policy" => Some(AnomalyKind::Policy),
            "drift" => Some(AnomalyKind::Drift),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OPTIONAL PAYLOADS
// ============================================================================

/// Captured prompt/response pair - only present on agent-session records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub response: String,
}

/// Token + cost figures - only present when the usage meter was attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_usd: f64,
}

// ============================================================================
// ANOMALY RECORD
// ============================================================================

/// A scored, categorized event under review.
///
/// Immutable once constructed. The severity tier is NOT a field here -
/// derive it via `classifier::classify(record.score)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Opaque unique id, e.g. "anom-001"
    pub id: String,
    /// Short human-readable title for table rows
    pub title: String,
    /// References a `CategoryInfo` in the taxonomy registry
    pub category_id: String,
    pub kind: AnomalyKind,
    /// Anomaly/confidence score in [0, 1] (out-of-range input is tolerated)
    pub score: f32,
    pub status: AnomalyStatus,
    pub detected_at: DateTime<Utc>,
    /// Detector-produced explanation text - opaque payload
    pub explanation: String,
    /// Sessions/agents the anomaly touched
    pub affected_sessions: Vec<String>,
    /// Ids of related records. Symmetry is NOT enforced and entries may
    /// dangle - the resolver tolerates stale references.
    pub related_ids: Vec<String>,
    pub prompt_response: Option<PromptResponse>,
    pub token_usage: Option<TokenUsage>,
}

impl AnomalyRecord {
    pub fn has_prompt_response(&self) -> bool {
        self.prompt_response.is_some()
    }

    pub fn has_token_usage(&self) -> bool {
        self.token_usage.is_some()
    }
}

// ============================================================================
// TIER COUNTS
// ============================================================================

/// Per-tier counts for the summary cards.
/// Invariant: `total()` always equals the size of the counted set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub critical: usize,
    pub non_critical: usize,
    pub informational: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.critical + self.non_critical + self.informational
    }
}
