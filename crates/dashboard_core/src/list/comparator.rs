//! Record comparison on a single sort field

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use contracts::shared::list_query::{FieldAccess, FieldKind, FieldValue, SortDirection, SortSpec};

/// Comparable projection of a field value
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl SortKey {
    /// Project a field value according to its declared kind.
    /// Null, NaN and unparseable dates all become `Missing`.
    pub fn from_value(value: Option<FieldValue>, kind: FieldKind) -> Self {
        let Some(value) = value else {
            return SortKey::Missing;
        };
        if kind == FieldKind::Date {
            return value.as_datetime().map(SortKey::Date).unwrap_or(SortKey::Missing);
        }
        match value {
            FieldValue::Null => SortKey::Missing,
            FieldValue::Bool(b) => SortKey::Bool(b),
            FieldValue::Number(n) if n.is_nan() => SortKey::Missing,
            FieldValue::Number(n) => SortKey::Number(n),
            FieldValue::Text(s) => SortKey::Text(s),
            FieldValue::Date(dt) => SortKey::Date(dt),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Date(_) => 3,
            SortKey::Missing => 4,
        }
    }
}

/// Compare two keys; missing values go last in either direction
pub fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        _ => {
            let ord = compare_present(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

fn compare_present(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortKey::Text(x), SortKey::Text(y)) => compare_text(x, y),
        (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
        // mixed kinds under one field: keep the order total
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Case-insensitive first; on a tie lowercase sorts before uppercase.
///
/// Not locale-aware: after lowercasing, text compares by code point, so
/// accented letters ("Émile") sort after the ASCII alphabet ("Zoe").
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Build a comparator over records for a single sort key
pub fn build_comparator<R: FieldAccess + ?Sized>(
    sort: &SortSpec,
    kind: FieldKind,
) -> impl Fn(&R, &R) -> Ordering {
    let field = sort.field.clone();
    let direction = sort.direction;
    move |a: &R, b: &R| {
        let ka = SortKey::from_value(a.field_value(&field), kind);
        let kb = SortKey::from_value(b.field_value(&field), kind);
        compare_keys(&ka, &kb, direction)
    }
}

/// Stable sort that extracts each record's key once
pub fn sort_records<R: FieldAccess>(records: Vec<R>, sort: &SortSpec, kind: FieldKind) -> Vec<R> {
    let mut keyed: Vec<(SortKey, R)> = records
        .into_iter()
        .map(|r| (SortKey::from_value(r.field_value(&sort.field), kind), r))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, sort.direction));
    keyed.into_iter().map(|(_, r)| r).collect()
}
