//! Integration Tests for the Dataset Module
//!
//! Tests seeded collections và store hoạt động đúng với các engines.

#[cfg(test)]
mod integration_tests {
    use crate::logic::dataset::{fields::sample_fields, records::sample_anomalies, store};
    use crate::logic::fields::checks::{is_normalized, worst_status};
    use crate::logic::fields::types::CheckStatus;
    use crate::logic::query::filter::AnomalyFilter;
    use crate::logic::query::related::resolve_related;
    use crate::logic::query::sort::SortKey;
    use crate::logic::taxonomy::TaxonomyRegistry;
    use crate::logic::triage::classifier::{classify, count_by_tier};
    use crate::logic::triage::types::SeverityTier;

    #[test]
    fn test_seeded_records_resolve_against_builtin_taxonomy() {
        let registry = TaxonomyRegistry::global();
        for record in sample_anomalies() {
            let category = registry.find_category(&record.category_id);
            assert!(
                category.is_some(),
                "record {} references unknown category {}",
                record.id,
                record.category_id
            );
        }
    }

    #[test]
    fn test_seeded_records_cover_all_tiers() {
        let records = sample_anomalies();
        let counts = count_by_tier(&records);
        assert_eq!(counts.total(), records.len());
        assert!(counts.critical > 0);
        assert!(counts.non_critical > 0);
        assert!(counts.informational > 0);
    }

    #[test]
    fn test_seeded_dangling_reference_is_tolerated() {
        let records = sample_anomalies();
        let drifted = records
            .iter()
            .find(|r| r.id == "anom-006")
            .expect("anom-006 seeded");
        assert!(drifted.related_ids.contains(&"anom-099".to_string()));

        let related = resolve_related(drifted, &records);
        // anom-099 dropped, anom-001 resolved
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "anom-001");
    }

    #[test]
    fn test_seeded_fields_are_normalized_with_checks() {
        let fields = sample_fields();
        assert!(!fields.is_empty());
        for field in &fields {
            assert!(is_normalized(field), "field {} distribution off", field.name);
            assert!(!field.checks.is_empty());
        }
        let country = &fields[0];
        assert_eq!(worst_status(country), CheckStatus::Critical);
    }

    #[test]
    fn test_store_load_snapshot_round_trip() {
        store::load_samples();
        let all = store::snapshot();
        assert_eq!(all.len(), sample_anomalies().len());

        let found = store::find("anom-003").expect("anom-003 seeded");
        assert_eq!(classify(found.score), SeverityTier::Critical);
        assert!(store::find("anom-999").is_none());

        let counts = store::tier_counts();
        assert_eq!(counts.total(), all.len());

        let critical = store::query(
            &AnomalyFilter {
                tier: Some(SeverityTier::Critical),
                ..AnomalyFilter::any()
            },
            Some(SortKey::SeverityRank),
        );
        assert_eq!(critical.len(), counts.critical);
    }
}
