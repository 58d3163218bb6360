//! Pagination and sorting primitives.
//!
//! Page numbers are 0-indexed on the wire, matching the `page`/`size`/`sort`
//! query parameter convention the API exposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page index (0-indexed)
const DEFAULT_PAGE: u32 = 0;

/// Default items per page
const DEFAULT_SIZE: u32 = 20;

/// Maximum items per page
const MAX_SIZE: u32 = 100;

/// A pagination request: page index, page size and an optional sort order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index (0-indexed)
    pub page: u32,

    /// Items per page
    pub size: u32,

    /// Optional sort order
    pub sort: Option<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    /// Create a new page request, clamping the size to the allowed range.
    pub fn new(page: u32, size: u32) -> Self {
        let size = if size == 0 {
            DEFAULT_SIZE
        } else {
            size.min(MAX_SIZE)
        };

        Self {
            page,
            size,
            sort: None,
        }
    }

    /// Attach a sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Offset of the first item of this page (0-indexed).
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Limit for repository queries.
    pub fn limit(&self) -> u32 {
        self.size
    }
}

/// Sort direction for query results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl From<&str> for SortDirection {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// A sort order: field name plus direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortOrder {
    /// Field to sort by
    pub field: String,

    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortOrder {
    /// Create a new sort order.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse the `field` or `field,direction` wire form.
    ///
    /// Returns `None` for an empty field.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(2, ',');
        let field = parts.next().unwrap_or("").trim();
        if field.is_empty() {
            return None;
        }

        let direction = parts
            .next()
            .map(|d| SortDirection::from(d.trim()))
            .unwrap_or_default();

        Some(Self::new(field, direction))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// One page of results plus the metadata needed for navigation headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items for the current page
    pub items: Vec<T>,

    /// Page index (0-indexed)
    pub page: u32,

    /// Items per page
    pub size: u32,

    /// Total number of items across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Create a new page.
    pub fn new(items: Vec<T>, page: u32, size: u32, total: u64) -> Self {
        Self {
            items,
            page,
            size,
            total,
        }
    }

    /// Create from the request that produced these items.
    pub fn from_request(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self::new(items, request.page, request.size, total)
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        ((self.total as f64) / (f64::from(self.size))).ceil() as u32
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Whether a page precedes this one.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Map the items to a different type.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_default() {
        let request = PageRequest::default();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 20);
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 20);
        assert!(request.sort.is_none());
    }

    #[test]
    fn test_page_request_offset() {
        let request = PageRequest::new(2, 50);
        assert_eq!(request.page, 2);
        assert_eq!(request.size, 50);
        assert_eq!(request.offset(), 100);
    }

    #[test]
    fn test_page_request_zero_size_falls_back_to_default() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.size, 20);
    }

    #[test]
    fn test_page_request_size_is_capped() {
        let request = PageRequest::new(0, 5000);
        assert_eq!(request.size, 100);
    }

    #[test]
    fn test_sort_direction_from_str() {
        assert_eq!(SortDirection::from("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from("descending"), SortDirection::Desc);
        assert_eq!(SortDirection::from("anything"), SortDirection::Asc);
    }

    #[test]
    fn test_sort_order_parse() {
        let sort = SortOrder::parse("nome,desc").unwrap();
        assert_eq!(sort.field, "nome");
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort = SortOrder::parse("id").unwrap();
        assert_eq!(sort.field, "id");
        assert_eq!(sort.direction, SortDirection::Asc);

        assert!(SortOrder::parse("").is_none());
        assert!(SortOrder::parse(",desc").is_none());
    }

    #[test]
    fn test_sort_order_display_round_trip() {
        let sort = SortOrder::desc("nome");
        assert_eq!(sort.to_string(), "nome,desc");
        assert_eq!(SortOrder::parse(&sort.to_string()), Some(sort));
    }

    #[test]
    fn test_page_navigation() {
        let page = Page::new(vec![1, 2, 3, 4, 5], 1, 5, 25);
        assert_eq!(page.total_pages(), 5);
        assert!(page.has_next());
        assert!(page.has_prev());

        let first = Page::new(vec![1], 0, 5, 3);
        assert_eq!(first.total_pages(), 1);
        assert!(!first.has_next());
        assert!(!first.has_prev());
    }

    #[test]
    fn test_page_map() {
        let page = Page::new(vec![1, 2, 3], 0, 3, 10);
        let mapped = page.map(|x| x * 2);

        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.total, 10);
        assert_eq!(mapped.size, 3);
    }
}
