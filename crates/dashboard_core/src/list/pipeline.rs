//! Single list pass: filter -> sort -> page
//!
//! Replaces the per-screen copies of search/sort/paginate code. Every call
//! recomputes from the full collection; the input slice is never modified.

use contracts::shared::list_query::{FieldAccess, FilterCriteria, PageRequest, PageResult, SortSpec};
use serde::Deserialize;

use super::comparator::sort_records;
use super::paginator::paginate;
use super::predicate::RecordFilter;
use super::schema::ListSchema;
use crate::error::QueryError;

/// Filter, sort and slice `records` for one screen.
///
/// `sort = None` keeps the input order of the matching records.
pub fn query<R>(
    records: &[R],
    criteria: &FilterCriteria,
    sort: Option<&SortSpec>,
    page: PageRequest,
    schema: &ListSchema,
) -> Result<PageResult<R>, QueryError>
where
    R: FieldAccess + Clone,
{
    if page.page_number < 1 {
        return Err(QueryError::invalid("page_number", "must be at least 1"));
    }
    if let Some(sort) = sort {
        schema.check_sort(sort)?;
    }
    if !criteria.date_range.is_open() && schema.date_field.is_none() {
        return Err(QueryError::invalid(
            "date_range",
            format!("screen `{}` has no date field", schema.id),
        ));
    }

    let filter = RecordFilter::new(criteria, &schema.searchable_fields, schema.date_field.as_deref());
    let matched: Vec<R> = if filter.accepts_all() {
        records.to_vec()
    } else {
        records.iter().filter(|r| filter.matches(*r)).cloned().collect()
    };

    let ordered = match sort {
        Some(sort) => sort_records(matched, sort, schema.kind_of(&sort.field)),
        None => matched,
    };

    let result = paginate(ordered, page)?;

    tracing::debug!(
        screen = %schema.id,
        input = records.len(),
        matched = result.total_matching,
        page = result.page_number,
        total_pages = result.total_pages,
        returned = result.items.len(),
        "list query"
    );

    Ok(result)
}

/// List request parameters as sent by a screen
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default = "first_page")]
    pub page_number: usize,
    #[serde(default)]
    pub page_size: Option<usize>,
}

fn first_page() -> usize {
    1
}

impl ListQuery {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            sort: None,
            page_number: 1,
            page_size: None,
        }
    }

    /// Run against `records`, falling back to the screen's default sort and page size
    pub fn run<R>(&self, records: &[R], schema: &ListSchema) -> Result<PageResult<R>, QueryError>
    where
        R: FieldAccess + Clone,
    {
        let sort = self.sort.as_ref().or(schema.default_sort.as_ref());
        let page = PageRequest::new(
            self.page_number,
            self.page_size.unwrap_or_else(|| schema.page_size()),
        );
        query(records, &self.criteria, sort, page, schema)
    }
}
