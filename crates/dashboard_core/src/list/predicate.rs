//! Filter predicate: search text, per-field filters, date period

use contracts::shared::list_query::{DateRange, ExactFilter, FieldAccess, FieldValue, FilterCriteria};

/// Compiled form of `FilterCriteria`: search text is case-folded once,
/// "all" filters are dropped, text filter values are lower-cased.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    search: Option<(String, Vec<String>)>,
    exact: Vec<(String, FieldValue)>,
    date: Option<(String, DateRange)>,
}

impl RecordFilter {
    pub fn new(criteria: &FilterCriteria, searchable_fields: &[String], date_field: Option<&str>) -> Self {
        let search = criteria
            .search_term()
            .map(|term| (term.to_lowercase(), searchable_fields.to_vec()));

        let exact = criteria
            .exact_filters
            .iter()
            .filter_map(|(field, filter)| match filter {
                ExactFilter::All => None,
                ExactFilter::Equals(value) => Some((field.clone(), normalize(value))),
            })
            .collect();

        let date = match date_field {
            Some(field) if !criteria.date_range.is_open() => {
                Some((field.to_string(), criteria.date_range))
            }
            _ => None,
        };

        Self { search, exact, date }
    }

    /// True when every constraint is inactive
    pub fn accepts_all(&self) -> bool {
        self.search.is_none() && self.exact.is_empty() && self.date.is_none()
    }

    pub fn matches<R: FieldAccess + ?Sized>(&self, record: &R) -> bool {
        if let Some((term, fields)) = &self.search {
            let hit = fields.iter().any(|field| {
                record
                    .field_value(field)
                    .and_then(|v| v.as_text().map(|s| s.to_lowercase().contains(term.as_str())))
                    .unwrap_or(false)
            });
            if !hit {
                return false;
            }
        }

        for (field, expected) in &self.exact {
            match record.field_value(field) {
                Some(actual) if normalize(&actual) == *expected => {}
                _ => return false,
            }
        }

        if let Some((field, range)) = &self.date {
            let instant = record.field_value(field).and_then(|v| v.as_datetime());
            match instant {
                Some(instant) if range.contains(instant) => {}
                _ => return false,
            }
        }

        true
    }
}

fn normalize(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) => FieldValue::Text(s.to_lowercase()),
        other => other.clone(),
    }
}

/// Build a record predicate from filter criteria.
///
/// Active constraints are combined with AND; with none active every record
/// is accepted. A missing field never satisfies an active constraint.
///
/// With `date_field = None` the date range is not applied at all. Callers that
/// must reject that combination go through `query`, which returns
/// `InvalidArgument("date_range")`.
pub fn build_predicate<R: FieldAccess + ?Sized>(
    criteria: &FilterCriteria,
    searchable_fields: &[String],
    date_field: Option<&str>,
) -> impl Fn(&R) -> bool {
    let filter = RecordFilter::new(criteria, searchable_fields, date_field);
    move |record: &R| filter.matches(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::list_query::{record, Record};

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn vendor(name: &str, email: &str, status: &str, joined: &str) -> Record {
        record([
            ("name", name),
            ("email", email),
            ("status", status),
            ("joined", joined),
        ])
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let criteria = FilterCriteria::default().with_search("JOHN");
        let pred = build_predicate::<Record>(&criteria, &fields(&["name", "email"]), None);
        assert!(pred(&vendor("John Doe", "x@y.com", "active", "2024-01-01")));
        assert!(pred(&vendor("Jane", "johnny@y.com", "active", "2024-01-01")));
        assert!(!pred(&vendor("Jane", "x@y.com", "active", "2024-01-01")));
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let email = record([("email", "johnny@bookcorner.com")]);
        let trailing = FilterCriteria::default().with_search("john ");
        assert!(!build_predicate::<Record>(&trailing, &fields(&["email"]), None)(&email));

        let spaces = FilterCriteria::default().with_search("  ");
        let pred = build_predicate::<Record>(&spaces, &fields(&["name"]), None);
        assert!(!pred(&record([("name", "nospace")])));
        assert!(pred(&record([("name", "two  spaces")])));
    }

    #[test]
    fn test_search_skips_non_text_values() {
        let criteria = FilterCriteria::default().with_search("42");
        let pred = build_predicate::<Record>(&criteria, &fields(&["code"]), None);
        let numeric: Record = record([("code", FieldValue::Number(42.0))]);
        let text: Record = record([("code", "A-42")]);
        assert!(!pred(&numeric));
        assert!(pred(&text));
    }

    #[test]
    fn test_exact_filter_normalizes_case_and_ignores_all() {
        let criteria = FilterCriteria::default()
            .with_filter("status", ExactFilter::equals("Active"))
            .with_filter("name", ExactFilter::All);
        let pred = build_predicate::<Record>(&criteria, &[], None);
        assert!(pred(&vendor("A", "a@a", "active", "2024-01-01")));
        assert!(!pred(&vendor("B", "b@b", "suspended", "2024-01-01")));
    }

    #[test]
    fn test_exact_filter_requires_same_type() {
        let criteria = FilterCriteria::default().with_filter("rating", ExactFilter::equals(5.0));
        let pred = build_predicate::<Record>(&criteria, &[], None);
        assert!(pred(&record([("rating", 5.0)])));
        assert!(!pred(&record([("rating", "5")])));
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let criteria = FilterCriteria::default().with_filter("region", ExactFilter::equals("EU"));
        let pred = build_predicate::<Record>(&criteria, &[], None);
        assert!(!pred(&vendor("A", "a@a", "active", "2024-01-01")));
    }

    #[test]
    fn test_date_range_bounds_are_independent() {
        let both = FilterCriteria::default().with_date_range(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        let from = FilterCriteria::default().with_date_range(Some(date(2024, 1, 10)), None);
        let to = FilterCriteria::default().with_date_range(None, Some(date(2024, 1, 20)));

        let early = vendor("A", "", "", "2024-01-05");
        let inside = vendor("B", "", "", "2024-01-20T18:30:00");
        let late = vendor("C", "", "", "2024-02-01");

        let p = build_predicate::<Record>(&both, &[], Some("joined"));
        assert!(!p(&early) && p(&inside) && !p(&late));

        let p = build_predicate::<Record>(&from, &[], Some("joined"));
        assert!(!p(&early) && p(&inside) && p(&late));

        let p = build_predicate::<Record>(&to, &[], Some("joined"));
        assert!(p(&early) && p(&inside) && !p(&late));
    }

    #[test]
    fn test_date_range_ignored_without_date_field() {
        let criteria = FilterCriteria::default().with_date_range(Some(date(2024, 1, 10)), None);
        let filter = RecordFilter::new(&criteria, &[], None);
        assert!(filter.accepts_all());
        assert!(filter.matches(&vendor("A", "", "", "2023-01-01")));
    }

    #[test]
    fn test_unparseable_date_fails_active_range() {
        let criteria = FilterCriteria::default().with_date_range(Some(date(2024, 1, 1)), None);
        let pred = build_predicate::<Record>(&criteria, &[], Some("joined"));
        assert!(!pred(&vendor("A", "", "", "soon")));
    }

    #[test]
    fn test_no_constraints_accepts_everything() {
        let filter = RecordFilter::new(&FilterCriteria::default(), &fields(&["name"]), Some("joined"));
        assert!(filter.accepts_all());
        assert!(filter.matches(&Record::new()));
    }
}
