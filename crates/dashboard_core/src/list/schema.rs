//! Per-screen list configuration
//!
//! Describes which fields a screen searches, filters by date and allows
//! sorting on, together with the declared type of each field.

use std::collections::BTreeMap;

use contracts::shared::list_query::{FieldKind, PageRequest, SortSpec};
use serde::Deserialize;

use crate::error::QueryError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ListSchema {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub searchable_fields: Vec<String>,
    #[serde(default)]
    pub date_field: Option<String>,
    /// Empty = any field may be sorted on
    #[serde(default)]
    pub sortable_fields: Vec<String>,
    #[serde(default, rename = "fields")]
    pub field_kinds: BTreeMap<String, FieldKind>,
    #[serde(default)]
    pub default_sort: Option<SortSpec>,
    #[serde(default)]
    pub default_page_size: Option<usize>,
}

impl ListSchema {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn sortable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sortable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn date_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.field_kinds.insert(field.clone(), FieldKind::Date);
        self.date_field = Some(field);
        self
    }

    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.field_kinds.insert(name.into(), kind);
        self
    }

    /// Declared kind of a field; undeclared fields are text
    pub fn kind_of(&self, field: &str) -> FieldKind {
        if self.date_field.as_deref() == Some(field) {
            return FieldKind::Date;
        }
        self.field_kinds.get(field).copied().unwrap_or_default()
    }

    pub fn page_size(&self) -> usize {
        self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn page_request(&self, page_number: usize) -> PageRequest {
        PageRequest::new(page_number, self.page_size())
    }

    /// Reject sorting on a field outside the screen's sortable set
    pub fn check_sort(&self, sort: &SortSpec) -> Result<(), QueryError> {
        if self.sortable_fields.is_empty() || self.sortable_fields.iter().any(|f| *f == sort.field) {
            return Ok(());
        }
        Err(QueryError::invalid(
            "sort.field",
            format!("`{}` is not sortable on screen `{}`", sort.field, self.id),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of() {
        let schema = ListSchema::new("orders")
            .date_field("created_at")
            .field("total", FieldKind::Number);
        assert_eq!(schema.kind_of("created_at"), FieldKind::Date);
        assert_eq!(schema.kind_of("total"), FieldKind::Number);
        assert_eq!(schema.kind_of("customer"), FieldKind::Text);
    }

    #[test]
    fn test_check_sort() {
        let open = ListSchema::new("any");
        assert!(open.check_sort(&SortSpec::asc("whatever")).is_ok());

        let schema = ListSchema::new("vendors").sortable(["name", "revenue"]);
        assert!(schema.check_sort(&SortSpec::desc("revenue")).is_ok());
        let err = schema.check_sort(&SortSpec::asc("password")).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument { field: "sort.field", .. }));
    }

    #[test]
    fn test_page_request_uses_default_size() {
        let mut schema = ListSchema::new("products");
        assert_eq!(schema.page_request(2), PageRequest::new(2, DEFAULT_PAGE_SIZE));
        schema.default_page_size = Some(25);
        assert_eq!(schema.page_request(1).page_size, 25);
    }
}
