use std::cmp::Ordering;

use crate::models::{Dataset, FieldValue, Record, SortField};

use super::state::{QueryState, SortOrder};

/// Compute the filtered view for `query` as indices into `dataset`.
///
/// Records are kept when every active predicate passes. With no active
/// predicate and no sort field the result is `0..len` in dataset order.
/// Sorting is stable, so ties and missing values keep their dataset order.
pub fn apply(dataset: &Dataset, query: &QueryState) -> Vec<usize> {
    let needle = query.search_needle();
    let tier = query.active_tier();

    let mut view: Vec<usize> = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, needle.as_deref(), tier))
        .map(|(idx, _)| idx)
        .collect();

    if let Some(field) = query.sort_field {
        let records = dataset.records();
        view.sort_by(|&a, &b| compare_records(&records[a], &records[b], field, query.sort_order));
    }

    view
}

/// Whether a record passes the search and tier predicates.
///
/// `needle` must already be trimmed and lowercased.
pub fn matches(record: &Record, needle: Option<&str>, tier: Option<&str>) -> bool {
    if let Some(tier) = tier {
        if record.follower_tier.as_deref() != Some(tier) {
            return false;
        }
    }

    match needle {
        Some(needle) => record
            .searchable_text()
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(needle)),
        None => true,
    }
}

/// Order two records by `field`.
///
/// A record missing the field always sorts after one that has it, in either
/// direction. Two missing values compare equal.
pub fn compare_records(a: &Record, b: &Record, field: SortField, order: SortOrder) -> Ordering {
    match (a.field_value(field), b.field_value(field)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = compare_values(x, y);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
    }
}

fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
    }
}
