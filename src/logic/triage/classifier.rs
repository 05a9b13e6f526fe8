//! Severity Classifier
//!
//! CHỈ chứa logic classify - không có types, không có policy.
//! Input: anomaly score (f32)
//! Output: SeverityTier

use super::rules::TierThresholds;
use super::types::{AnomalyRecord, SeverityTier, TierCounts};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Map a score to its severity tier.
///
/// CORE LOGIC - Deterministic, pure, total over all f32 inputs:
/// - score >= 0.9 -> Critical
/// - 0.7 <= score < 0.9 -> NonCritical
/// - score < 0.7 -> Informational
///
/// Out-of-range scores clamp into the boundary tier (1.3 is still Critical,
/// -0.2 is still Informational) - this is display categorization, not
/// validation, so no error is raised. NaN fails every comparison and lands
/// in Informational.
pub fn classify(score: f32) -> SeverityTier {
    classify_with_thresholds(score, &TierThresholds::default())
}

/// Classification with custom tier boundaries
pub fn classify_with_thresholds(score: f32, thresholds: &TierThresholds) -> SeverityTier {
    if score >= thresholds.critical_min {
        SeverityTier::Critical
    } else if score >= thresholds.non_critical_min {
        SeverityTier::NonCritical
    } else {
        SeverityTier::Informational
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Partition a record set by tier and count each bucket.
///
/// Invariant: the three counts always sum to `records.len()` - every record
/// gets exactly one tier.
pub fn count_by_tier(records: &[AnomalyRecord]) -> TierCounts {
    let mut counts = TierCounts::default();
    for record in records {
        match classify(record.score) {
            SeverityTier::Critical => counts.critical += 1,
            SeverityTier::NonCritical => counts.non_critical += 1,
            SeverityTier::Informational => counts.informational += 1,
        }
    }
    counts
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset::records::make_record;

    #[test]
    fn test_boundary_exactness() {
        assert_eq!(classify(0.9), SeverityTier::Critical);
        assert_eq!(classify(0.8999), SeverityTier::NonCritical);
        assert_eq!(classify(0.7), SeverityTier::NonCritical);
        assert_eq!(classify(0.6999), SeverityTier::Informational);
    }

    #[test]
    fn test_tier_partition_is_total() {
        // Sweep [0, 1] - every score must land in exactly one tier
        for i in 0..=1000 {
            let score = i as f32 / 1000.0;
            let tier = classify(score);
            let in_critical = score >= 0.9;
            let in_non_critical = (0.7..0.9).contains(&score);
            let in_informational = score < 0.7;
            assert_eq!(tier == SeverityTier::Critical, in_critical, "score {}", score);
            assert_eq!(
                tier == SeverityTier::NonCritical,
                in_non_critical,
                "score {}",
                score
            );
            assert_eq!(
                tier == SeverityTier::Informational,
                in_informational,
                "score {}",
                score
            );
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(classify(1.3), SeverityTier::Critical);
        assert_eq!(classify(-0.2), SeverityTier::Informational);
        assert_eq!(classify(f32::NAN), SeverityTier::Informational);
    }

    #[test]
    fn test_custom_thresholds() {
        let high = TierThresholds::high_sensitivity();
        assert_eq!(classify_with_thresholds(0.85, &high), SeverityTier::Critical);
        assert_eq!(classify(0.85), SeverityTier::NonCritical);

        let low = TierThresholds::low_sensitivity();
        assert_eq!(classify_with_thresholds(0.92, &low), SeverityTier::NonCritical);
    }

    #[test]
    fn test_count_invariant() {
        let records: Vec<AnomalyRecord> = [0.1, 0.55, 0.7, 0.89, 0.9, 0.99]
            .iter()
            .enumerate()
            .map(|(i, s)| make_record(&format!("anom-{:03}", i), *s))
            .collect();

        let counts = count_by_tier(&records);
        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.non_critical, 2);
        assert_eq!(counts.informational, 2);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // 5 records: >=0.9 -> 0.94, 0.96; 0.7-0.89 -> 0.82, 0.76; <0.7 -> 0.65
        let records: Vec<AnomalyRecord> = [0.94, 0.82, 0.96, 0.76, 0.65]
            .iter()
            .enumerate()
            .map(|(i, s)| make_record(&format!("anom-{:03}", i), *s))
            .collect();

        let counts = count_by_tier(&records);
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.non_critical, 2);
        assert_eq!(counts.informational, 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_labels_and_ranks() {
        assert_eq!(SeverityTier::Critical.label(), "Actionable, Critical Anomaly");
        assert_eq!(SeverityTier::Critical.rank(), 0);
        assert_eq!(SeverityTier::NonCritical.rank(), 1);
        assert_eq!(SeverityTier::Informational.rank(), 2);
        assert!(SeverityTier::NonCritical.is_actionable());
        assert!(!SeverityTier::Informational.is_actionable());
    }
}
