use crate::models::Visitor;

/// Trim and case-fold a raw search box value.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a visitor's first name, last name or plate contains `query`.
/// `query` must already be normalised.
pub fn matches(visitor: &Visitor, query: &str) -> bool {
    visitor.first_name.to_lowercase().contains(query)
        || visitor.last_name.to_lowercase().contains(query)
        || visitor
            .plate
            .as_deref()
            .is_some_and(|plate| plate.to_lowercase().contains(query))
}

/// Records to show for a search box value. An empty query shows everything.
pub fn filter_visitors(visitors: &[Visitor], raw_query: &str) -> Vec<Visitor> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return visitors.to_vec();
    }
    visitors
        .iter()
        .filter(|v| matches(v, &query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitorType;

    fn visitor(id: u64, first: &str, last: &str, plate: Option<&str>) -> Visitor {
        Visitor {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            company: None,
            plate: plate.map(str::to_string),
            visitor_type: VisitorType::Guest,
            entry_datetime: "2024-01-01 09:00".to_string(),
            exit_datetime: None,
            creator_id: Some(1),
            creator_name: "ERHAN YAMAN".to_string(),
            visit_date: None,
            created_at: None,
            entry_date: None,
            entry_time: None,
            exit_time: None,
        }
    }

    fn sample() -> Vec<Visitor> {
        vec![
            visitor(1, "Ayşe", "Kaya", None),
            visitor(2, "MEHMET", "DEMIR", Some("34 ABC 12")),
            visitor(3, "Can", "Aydın", Some("06 XY 99")),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = sample();
        assert_eq!(filter_visitors(&records, ""), records);
        assert_eq!(filter_visitors(&records, "   "), records);
    }

    #[test]
    fn test_case_insensitive_unicode() {
        let records = vec![visitor(1, "Ayşe", "Kaya", None)];
        let hits = filter_visitors(&records, "AYŞ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_matches_last_name_and_plate() {
        let records = sample();

        let hits: Vec<u64> = filter_visitors(&records, "demir").iter().map(|v| v.id).collect();
        assert_eq!(hits, vec![2]);

        let hits: Vec<u64> = filter_visitors(&records, " abc ").iter().map(|v| v.id).collect();
        assert_eq!(hits, vec![2]);

        assert!(filter_visitors(&records, "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let once = filter_visitors(&records, "ay");
        let twice = filter_visitors(&once, "ay");
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }
}
