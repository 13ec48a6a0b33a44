use std::cmp::Ordering;

use crate::domain::entities::query::{
    OrderBy, PageParams, PagedData, QueryError, SortDirection, DEFAULT_PAGE_SIZE,
};
use crate::domain::entities::record::Record;

/// Filters, sorts and slices `records` for one page. The input is never reordered.
pub fn run_query(records: &[Record], params: &PageParams) -> Result<PagedData, QueryError> {
    let page_size = match params.page_size {
        Some(size) => usize::try_from(size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(QueryError::InvalidPageSize(size))?,
        None => DEFAULT_PAGE_SIZE,
    };
    let page = params.page.filter(|page| *page >= 1).unwrap_or(1);
    let order = match params.order_by.as_deref() {
        Some(clause) if !clause.trim().is_empty() => OrderBy::parse(clause)?,
        _ => OrderBy::default(),
    };

    let needle = params
        .search
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut matched: Vec<&Record> = if needle.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| matches_search(record, &needle))
            .collect()
    };

    if matched.is_empty() {
        return Ok(PagedData::default());
    }

    sort_records(&mut matched, &order);

    let total_count = matched.len();
    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size);

    let data = if start >= total_count {
        Vec::new()
    } else {
        matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    };

    Ok(PagedData { total_count, data })
}

/// `needle` must already be lowercased.
fn matches_search(record: &Record, needle: &str) -> bool {
    record
        .iter()
        .any(|(_, value)| value.to_string().to_lowercase().contains(needle))
}

/// Stable sort; records missing the field sort first.
fn sort_records(records: &mut [&Record], order: &OrderBy) {
    records.sort_by(|a, b| {
        let ordering = match (a.get(&order.field), b.get(&order.field)) {
            (Some(left), Some(right)) => left.natural_cmp(right),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match order.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
