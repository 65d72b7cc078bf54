use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::value::FieldValue;

/// Filter value for one field ("all" = no constraint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExactFilter {
    #[default]
    All,
    Equals(FieldValue),
}

impl ExactFilter {
    pub fn equals(value: impl Into<FieldValue>) -> Self {
        ExactFilter::Equals(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ExactFilter::All)
    }
}

/// Inclusive calendar date range; a missing bound imposes no constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// First instant of the start day
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        self.start.and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Last instant of the end day
    pub fn end_instant(&self) -> Option<NaiveDateTime> {
        self.end.and_then(|d| {
            NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).map(|t| d.and_time(t))
        })
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        if let Some(start) = self.start_instant() {
            if instant < start {
                return false;
            }
        }
        if let Some(end) = self.end_instant() {
            if instant > end {
                return false;
            }
        }
        true
    }
}

/// Filter parameters collected from the list toolbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub exact_filters: BTreeMap<String, ExactFilter>,
    #[serde(default)]
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, filter: ExactFilter) -> Self {
        self.exact_filters.insert(field.into(), filter);
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date_range = DateRange::new(start, end);
        self
    }

    /// Search text as typed, `None` when empty. Whitespace is part of the term.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search_text.as_str();
        (!term.is_empty()).then_some(term)
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.exact_filters.values().all(ExactFilter::is_all)
            && self.date_range.is_open()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Single-key sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Header click behaviour: same field flips direction, another field starts ascending
    pub fn toggle(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field: spec.field.clone(),
                direction: spec.direction.toggled(),
            },
            _ => SortSpec::asc(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_is_end_of_day() {
        let range = DateRange::new(None, Some(date(2024, 3, 15)));
        let late = date(2024, 3, 15).and_hms_opt(23, 59, 59).unwrap();
        let next = date(2024, 3, 16).and_hms_opt(0, 0, 0).unwrap();
        assert!(range.contains(late));
        assert!(!range.contains(next));
    }

    #[test]
    fn test_start_is_inclusive() {
        let range = DateRange::new(Some(date(2024, 3, 15)), None);
        assert!(range.contains(date(2024, 3, 15).and_hms_opt(0, 0, 0).unwrap()));
        assert!(!range.contains(date(2024, 3, 14).and_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn test_only_empty_search_is_inactive() {
        let criteria = FilterCriteria::default().with_filter("status", ExactFilter::All);
        assert!(criteria.search_term().is_none());
        assert!(criteria.is_empty());

        let spaces = criteria.clone().with_search("  ");
        assert_eq!(spaces.search_term(), Some("  "));
        assert!(!spaces.is_empty());

        assert_eq!(criteria.with_search("john ").search_term(), Some("john "));
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortSpec::toggle(None, "name");
        assert_eq!(first, SortSpec::asc("name"));
        let second = SortSpec::toggle(Some(&first), "name");
        assert_eq!(second, SortSpec::desc("name"));
        let other = SortSpec::toggle(Some(&second), "email");
        assert_eq!(other, SortSpec::asc("email"));
    }

    #[test]
    fn test_criteria_deserialize() {
        let json = r#"{
            "search_text": "john",
            "exact_filters": {"status": "all", "tier": {"equals": "gold"}},
            "date_range": {"start": "2024-01-01", "end": null}
        }"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.exact_filters["status"], ExactFilter::All);
        assert_eq!(criteria.exact_filters["tier"], ExactFilter::equals("gold"));
        assert_eq!(criteria.date_range.start, Some(date(2024, 1, 1)));
        assert_eq!(criteria.date_range.end, None);
    }
}
