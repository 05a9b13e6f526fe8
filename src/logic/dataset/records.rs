//! Seeded Anomaly Records
//!
//! The static collection the dashboard renders. Every id/category/score
//! here is a literal - scores are pre-computed upstream, never derived.
//! anom-006 deliberately carries a dangling related id (anom-099) to
//! exercise the tolerant resolver.

use chrono::{DateTime, Utc};

use crate::logic::triage::types::{
    AnomalyKind, AnomalyRecord, AnomalyStatus, PromptResponse, TokenUsage,
};

fn ts(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or(Utc::now())
        .with_timezone(&Utc)
}

/// Minimal record with defaults - seeds and tests build on top of this
pub fn make_record(id: &str, score: f32) -> AnomalyRecord {
    AnomalyRecord {
        id: id.to_string(),
        title: format!("Anomaly {}", id),
        category_id: "intent-action-mismatch".to_string(),
        kind: AnomalyKind::Statistical,
        score,
        status: AnomalyStatus::New,
        detected_at: ts(1_755_590_400_000), // 2025-08-19T08:00:00Z
        explanation: String::new(),
        affected_sessions: vec![],
        related_ids: vec![],
        prompt_response: None,
        token_usage: None,
    }
}

/// The seeded triage collection
pub fn sample_anomalies() -> Vec<AnomalyRecord> {
    vec![
        AnomalyRecord {
            title: "Agent deleted files outside workspace".to_string(),
            category_id: "intent-action-mismatch".to_string(),
            kind: AnomalyKind::Behavioral,
            status: AnomalyStatus::Escalated,
            detected_at: ts(1_755_601_200_000),
            explanation: "Stated intent was a dry-run cleanup; actions included \
                          unlink calls on paths outside the sandbox root."
                .to_string(),
            affected_sessions: vec!["sess-4411".to_string(), "sess-4417".to_string()],
            related_ids: vec!["anom-003".to_string(), "anom-006".to_string()],
            prompt_response: Some(PromptResponse {
                prompt: "Clean up temp files (dry run only)".to_string(),
                response: "Removed 37 files under /home/shared".to_string(),
            }),
            ..make_record("anom-001", 0.94)
        },
        AnomalyRecord {
            title: "Shell tool invoked with network flags".to_string(),
            category_id: "tool-misuse".to_string(),
            kind: AnomalyKind::Policy,
            status: AnomalyStatus::Investigating,
            detected_at: ts(1_755_597_600_000),
            explanation: "curl piped to sh from a tool declared file-local.".to_string(),
            affected_sessions: vec!["sess-4389".to_string()],
            related_ids: vec!["anom-001".to_string()],
            ..make_record("anom-002", 0.82)
        },
        AnomalyRecord {
            title: "Credential-shaped strings in outbound payload".to_string(),
            category_id: "data-exfiltration".to_string(),
            kind: AnomalyKind::Policy,
            status: AnomalyStatus::Escalated,
            detected_at: ts(1_755_594_000_000),
            explanation: "Payload matched AKIA* and ghp_* patterns.".to_string(),
            affected_sessions: vec!["sess-4411".to_string()],
            related_ids: vec!["anom-001".to_string()],
            token_usage: Some(TokenUsage {
                input_tokens: 182_400,
                output_tokens: 96_200,
                cost_usd: 4.87,
            }),
            ..make_record("anom-003", 0.96)
        },
        AnomalyRecord {
            title: "Same plan re-generated 11 times".to_string(),
            category_id: "reasoning-loops".to_string(),
            kind: AnomalyKind::Behavioral,
            status: AnomalyStatus::Investigating,
            detected_at: ts(1_755_590_400_000),
            explanation: "Plan hash repeated across consecutive turns with no \
                          tool calls in between."
                .to_string(),
            affected_sessions: vec!["sess-4402".to_string()],
            related_ids: vec![],
            ..make_record("anom-004", 0.76)
        },
        AnomalyRecord {
            title: "Token burn 3.2x session baseline".to_string(),
            category_id: "excessive-resource-use".to_string(),
            kind: AnomalyKind::Statistical,
            status: AnomalyStatus::Suppressed,
            detected_at: ts(1_755_586_800_000),
            explanation: "Long-context retries inflated usage; known noisy \
                          detector."
                .to_string(),
            affected_sessions: vec!["sess-4375".to_string()],
            related_ids: vec![],
            token_usage: Some(TokenUsage {
                input_tokens: 1_240_000,
                output_tokens: 310_500,
                cost_usd: 18.62,
            }),
            ..make_record("anom-005", 0.65)
        },
        AnomalyRecord {
            title: "Objective shifted from refactor to dependency upgrade".to_string(),
            category_id: "goal-drift".to_string(),
            kind: AnomalyKind::Drift,
            status: AnomalyStatus::New,
            detected_at: ts(1_755_583_200_000),
            explanation: "Task embedding drifted 0.41 cosine from the original \
                          instruction."
                .to_string(),
            affected_sessions: vec!["sess-4361".to_string()],
            // anom-099 was rotated out of the retention window - the
            // resolver is expected to drop it silently
            related_ids: vec!["anom-001".to_string(), "anom-099".to_string()],
            ..make_record("anom-006", 0.71)
        },
        AnomalyRecord {
            title: "Unused tool registered then polled each turn".to_string(),
            category_id: "tool-misuse".to_string(),
            kind: AnomalyKind::Behavioral,
            status: AnomalyStatus::New,
            detected_at: ts(1_755_579_600_000),
            explanation: "Polling a registration endpoint without consuming \
                          results."
                .to_string(),
            affected_sessions: vec!["sess-4350".to_string()],
            related_ids: vec![],
            ..make_record("anom-007", 0.58)
        },
        AnomalyRecord {
            title: "Subtask spawn rate above rolling p99".to_string(),
            category_id: "excessive-resource-use".to_string(),
            kind: AnomalyKind::Statistical,
            status: AnomalyStatus::New,
            detected_at: ts(1_755_576_000_000),
            explanation: "14 subtasks in 90s against a p99 of 5.".to_string(),
            affected_sessions: vec!["sess-4344".to_string(), "sess-4346".to_string()],
            related_ids: vec!["anom-005".to_string()],
            ..make_record("anom-008", 0.91)
        },
    ]
}
