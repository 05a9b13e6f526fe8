//! Seeded Field Records
//!
//! Monitored columns for the dimensional-anomaly view. Baseline/current
//! values are static mock figures from the upstream profiler.

use crate::logic::fields::types::{
    CheckCategory, CheckResult, CheckStatus, ComparisonValue, FieldRecord, FieldType,
};

fn dist(entries: &[(&str, f64)]) -> Vec<(String, f64)> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// The seeded field collection
pub fn sample_fields() -> Vec<FieldRecord> {
    vec![
        FieldRecord {
            name: "country_code".to_string(),
            field_type: FieldType::String,
            cardinality: 42,
            distribution: dist(&[("US", 48.0), ("DE", 21.5), ("JP", 17.5), ("other", 13.0)]),
            checks: vec![
                CheckResult {
                    category: CheckCategory::Distribution,
                    status: CheckStatus::Critical,
                    baseline: Some(ComparisonValue::Distribution(dist(&[
                        ("US", 61.0),
                        ("DE", 22.0),
                        ("JP", 10.0),
                        ("other", 7.0),
                    ]))),
                    current: Some(ComparisonValue::Distribution(dist(&[
                        ("US", 48.0),
                        ("DE", 21.5),
                        ("JP", 17.5),
                        ("other", 13.0),
                    ]))),
                },
                CheckResult {
                    category: CheckCategory::Cardinality,
                    status: CheckStatus::Pass,
                    baseline: Some(ComparisonValue::Scalar(41.0)),
                    current: Some(ComparisonValue::Scalar(42.0)),
                },
            ],
        },
        FieldRecord {
            name: "request_latency_ms".to_string(),
            field_type: FieldType::Float,
            cardinality: 18_240,
            distribution: dist(&[("<100", 62.0), ("100-500", 29.5), (">500", 8.5)]),
            checks: vec![
                CheckResult {
                    category: CheckCategory::Rate,
                    status: CheckStatus::Warning,
                    baseline: Some(ComparisonValue::Scalar(1_150.0)),
                    current: Some(ComparisonValue::Scalar(1_890.0)),
                },
                CheckResult {
                    category: CheckCategory::Nullity,
                    status: CheckStatus::Pass,
                    baseline: Some(ComparisonValue::Scalar(0.001)),
                    current: Some(ComparisonValue::Scalar(0.001)),
                },
            ],
        },
        FieldRecord {
            name: "session_id".to_string(),
            field_type: FieldType::String,
            cardinality: 87_113,
            distribution: dist(&[("unique", 100.0)]),
            checks: vec![CheckResult {
                category: CheckCategory::Pattern,
                status: CheckStatus::Info,
                baseline: None,
                current: Some(ComparisonValue::Scalar(0.004)),
            }],
        },
        FieldRecord {
            name: "is_retry".to_string(),
            field_type: FieldType::Boolean,
            cardinality: 2,
            distribution: dist(&[("false", 91.0), ("true", 9.0)]),
            checks: vec![CheckResult {
                category: CheckCategory::Distribution,
                status: CheckStatus::Warning,
                baseline: Some(ComparisonValue::Distribution(dist(&[
                    ("false", 96.5),
                    ("true", 3.5),
                ]))),
                current: Some(ComparisonValue::Distribution(dist(&[
                    ("false", 91.0),
                    ("true", 9.0),
                ]))),
            }],
        },
    ]
}
