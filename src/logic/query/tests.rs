//! Integration Tests for the Query Engines
//!
//! Tests filter/sort/related hoạt động đúng khi kết hợp với nhau.

#[cfg(test)]
mod integration_tests {
    use crate::logic::dataset::records::make_record;
    use crate::logic::query::{
        filter::{filter_records, AnomalyFilter},
        related::resolve_related,
        sort::{sort_records, SortKey},
    };
    use crate::logic::triage::rules::severity_rank;
    use crate::logic::triage::types::{AnomalyKind, AnomalyRecord, AnomalyStatus, SeverityTier};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_set() -> Vec<AnomalyRecord> {
        // Ids encode input position so order assertions stay readable
        let mut records = vec![
            make_record("anom-001", 0.94),
            make_record("anom-002", 0.82),
            make_record("anom-003", 0.96),
            make_record("anom-004", 0.76),
            make_record("anom-005", 0.65),
        ];
        records[0].status = AnomalyStatus::Escalated;
        records[0].kind = AnomalyKind::Behavioral;
        records[1].category_id = "tool-misuse".to_string();
        records[1].kind = AnomalyKind::Policy;
        records[2].status = AnomalyStatus::New;
        records[3].category_id = "tool-misuse".to_string();
        records[3].status = AnomalyStatus::Suppressed;
        records
    }

    #[test]
    fn test_filter_by_tier() {
        init_logging();
        let records = sample_set();
        let filter = AnomalyFilter {
            tier: Some(SeverityTier::Critical),
            ..AnomalyFilter::any()
        };
        let out = filter_records(&records, &filter);
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["anom-001", "anom-003"]);
    }

    #[test]
    fn test_filter_conjunction() {
        let records = sample_set();
        // anom-002 and anom-004 are both NonCritical + tool-misuse;
        // the status field narrows to anom-004
        let filter = AnomalyFilter {
            tier: Some(SeverityTier::NonCritical),
            category_id: Some("tool-misuse".to_string()),
            status: Some(AnomalyStatus::Suppressed),
            ..AnomalyFilter::any()
        };
        let out = filter_records(&records, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "anom-004");
    }

    #[test]
    fn test_filter_all_sentinel_matches_everything() {
        let records = sample_set();
        let filter = AnomalyFilter::from_selections("all", "all", "all", "all");
        assert!(filter.is_empty());
        assert_eq!(filter_records(&records, &filter).len(), records.len());
    }

    #[test]
    fn test_filter_from_selections_parses_fields() {
        let filter = AnomalyFilter::from_selections("critical", "tool-misuse", "new", "policy");
        assert_eq!(filter.tier, Some(SeverityTier::Critical));
        assert_eq!(filter.category_id.as_deref(), Some("tool-misuse"));
        assert_eq!(filter.status, Some(AnomalyStatus::New));
        assert_eq!(filter.kind, Some(AnomalyKind::Policy));
    }

    #[test]
    fn test_filter_impossible_combination_is_empty_not_error() {
        let records = sample_set();
        let filter = AnomalyFilter {
            tier: Some(SeverityTier::Critical),
            status: Some(AnomalyStatus::Suppressed),
            ..AnomalyFilter::any()
        };
        assert!(filter_records(&records, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_set();
        let filter = AnomalyFilter {
            category_id: Some("tool-misuse".to_string()),
            ..AnomalyFilter::any()
        };
        let once = filter_records(&records, &filter);
        let twice = filter_records(&once, &filter);
        let once_ids: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = sample_set();
        let filter = AnomalyFilter {
            tier: Some(SeverityTier::NonCritical),
            ..AnomalyFilter::any()
        };
        let ids: Vec<String> = filter_records(&records, &filter)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["anom-002", "anom-004"]);
    }

    #[test]
    fn test_sort_by_severity_rank_is_stable() {
        let records = sample_set();
        let sorted = sort_records(&records, SortKey::SeverityRank);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        // Critical (001 before 003, input order kept), then NonCritical
        // (002 before 004), then Informational
        assert_eq!(
            ids,
            vec!["anom-001", "anom-003", "anom-002", "anom-004", "anom-005"]
        );
    }

    #[test]
    fn test_sort_by_title() {
        let mut records = sample_set();
        records[0].title = "Zeta loop".to_string();
        records[1].title = "Alpha drift".to_string();
        let sorted = sort_records(&records, SortKey::Title);
        assert_eq!(sorted[0].title, "Alpha drift");
        assert_eq!(sorted.last().map(|r| r.title.as_str()), Some("Zeta loop"));
    }

    #[test]
    fn test_unrecognized_severity_label_ranks_last() {
        assert_eq!(severity_rank("critical"), 0);
        assert_eq!(severity_rank("non-critical"), 1);
        assert_eq!(severity_rank("informational"), 2);
        assert_eq!(severity_rank("NORMAL"), 3);
        assert_eq!(severity_rank(""), 3);
    }

    #[test]
    fn test_resolve_related_follows_id_order() {
        let records = sample_set();
        let mut record = make_record("anom-010", 0.5);
        record.related_ids = vec!["anom-004".to_string(), "anom-001".to_string()];
        let related = resolve_related(&record, &records);
        let ids: Vec<&str> = related.iter().map(|r| r.id.as_str()).collect();
        // Output order follows related_ids, not collection order
        assert_eq!(ids, vec!["anom-004", "anom-001"]);
    }

    #[test]
    fn test_resolve_related_drops_dangling_ids() {
        init_logging();
        let records = sample_set();
        let mut record = make_record("anom-010", 0.5);
        record.related_ids = vec![
            "anom-002".to_string(),
            "anom-099".to_string(), // not in the collection
            "anom-005".to_string(),
        ];
        let related = resolve_related(&record, &records);
        let ids: Vec<&str> = related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["anom-002", "anom-005"]);
        assert!(related.len() <= record.related_ids.len());
    }
}
