//! Pagination utilities for repository list calls.
//!
//! Lists are page-based:
//! - `limit`: items per page (clamped to 1..=100, default 10)
//! - `page`: 1-indexed page number (default 1, clamped to at least 1)
//!
//! Filtering happens over the whole collection first, then the matching rows
//! are sliced into `[(page-1)*limit, (page-1)*limit + limit)`. A page past the
//! end yields an empty `data` array rather than an error.
//!
//! # Example
//!
//! ```ignore
//! use boarding_core::pagination::{ListQuery, paginate};
//!
//! let query = ListQuery::<()>::default().page(2).limit(5);
//! let rows: Vec<u32> = (0..12).collect();
//! let page = paginate(rows, query.pagination.page(), query.pagination.limit());
//!
//! assert_eq!(page.data, vec![5, 6, 7, 8, 9]);
//! assert_eq!(page.total_pages, 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_i64;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Page/limit parameters of a list call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Returns the page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    /// Returns the effective limit, clamped to [1, 100]. Defaults to 10.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit_within(DEFAULT_LIMIT, MAX_LIMIT)
    }

    /// Like [`limit`](Self::limit) but with caller-supplied default and ceiling.
    #[must_use]
    pub fn limit_within(&self, default: i64, max: i64) -> i64 {
        let max = max.max(1);
        self.limit.unwrap_or(default).clamp(1, max)
    }

    /// Number of matching rows to skip for the current page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

/// Arguments of a repository `list` call: pagination plus entity filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListQuery<F> {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    #[serde(default)]
    pub filters: F,
}

impl<F> ListQuery<F> {
    pub fn new(pagination: PaginationParams, filters: F) -> Self {
        Self {
            pagination,
            filters,
        }
    }

    #[must_use]
    pub fn page(mut self, page: i64) -> Self {
        self.pagination.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self
    }
}

/// One page of a filtered collection.
///
/// # Example JSON
///
/// ```json
/// { "data": [...], "total": 23, "page": 2, "limit": 10, "totalPages": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// Number of rows matching the filters, across all pages
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    /// Whether rows exist after this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Transforms every row, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Slices already-filtered rows into one page.
///
/// `page` and `limit` are expected to be normalized (both at least 1).
pub fn paginate<T>(rows: Vec<T>, page: i64, limit: i64) -> Paginated<T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = rows.len() as i64;
    let total_pages = if total == 0 { 0 } else { (total - 1) / limit + 1 };
    let offset = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);

    let data = rows.into_iter().skip(offset).take(take).collect();

    Paginated {
        data,
        total,
        page,
        limit,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_limit_boundaries() {
        assert_eq!(PaginationParams::new(1, 0).limit(), 1);
        assert_eq!(PaginationParams::new(1, -5).limit(), 1);
        assert_eq!(PaginationParams::new(1, 100).limit(), 100);
        assert_eq!(PaginationParams::new(1, 101).limit(), 100);
    }

    #[test]
    fn test_pagination_params_page_minimum() {
        assert_eq!(PaginationParams::new(0, 10).page(), 1);
        assert_eq!(PaginationParams::new(-3, 10).page(), 1);
    }

    #[test]
    fn test_pagination_params_offset_from_page() {
        assert_eq!(PaginationParams::new(3, 20).offset(), 40);
        assert_eq!(PaginationParams::new(i64::MAX, 100).offset(), i64::MAX);
    }

    #[test]
    fn test_limit_within_custom_ceiling() {
        let params = PaginationParams::default();
        assert_eq!(params.limit_within(25, 50), 25);
        let params = PaginationParams::new(1, 80);
        assert_eq!(params.limit_within(25, 50), 50);
    }

    #[test]
    fn test_paginate_middle_page() {
        let rows: Vec<i32> = (1..=23).collect();
        let page = paginate(rows, 2, 10);
        assert_eq!(page.data, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_more());
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let rows: Vec<i32> = (1..=23).collect();
        let page = paginate(rows, 3, 10);
        assert_eq!(page.data, vec![21, 22, 23]);
        assert!(!page.has_more());
    }

    #[test]
    fn test_paginate_out_of_range_page_is_empty() {
        let rows: Vec<i32> = (1..=5).collect();
        let page = paginate(rows, 4, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let page = paginate(Vec::<i32>::new(), 1, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for (total, limit, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (8, 3, 3)] {
            let rows: Vec<i64> = (0..total).collect();
            assert_eq!(paginate(rows, 1, limit).total_pages, expected);
        }
    }

    #[test]
    fn test_paginate_huge_limit_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], 1, i64::MAX);
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);

        let page = paginate(vec![1, 2, 3], i64::MAX, i64::MAX);
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginated_serializes_camel_case() {
        let page = paginate(vec!["a"], 1, 10);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["data"][0], "a");
    }

    #[test]
    fn test_list_query_deserializes_flat_pagination() {
        #[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
        struct Filters {
            search: Option<String>,
        }

        let query: ListQuery<Filters> =
            serde_json::from_str(r#"{"page": "2", "limit": 5, "filters": {"search": "ab"}}"#)
                .unwrap();
        assert_eq!(query.pagination, PaginationParams::new(2, 5));
        assert_eq!(query.filters.search.as_deref(), Some("ab"));

        let query: ListQuery<Filters> = serde_json::from_str("{}").unwrap();
        assert_eq!(query.filters, Filters::default());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = paginate(vec![1, 2, 3], 1, 2).map(|n| n * 10);
        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }
}
