//! Offset pagination for the album list

use serde::Deserialize;

/// Page used when `page` is missing or unusable
pub const DEFAULT_PAGE: u32 = 1;

/// Items per page used when `pageSize` is missing or unusable
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Pagination {
    /// Create pagination, replacing zero values with the defaults.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Maximum number of rows in this page.
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Slice the page out of an already ordered full result set.
    ///
    /// Returns an empty slice when the offset is at or past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let total = items.len() as u64;
        let start = self.offset();
        if start >= total {
            return &[];
        }
        let end = start.saturating_add(u64::from(self.page_size)).min(total);
        &items[start as usize..end as usize]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Raw `?page=&pageSize=` query parameters.
///
/// Kept as strings so that garbage input falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Parse a positive integer, `None` for anything else.
fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw?.parse::<i64>()
        .ok()
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            parse_positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(params.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, page_size: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: page.map(str::to_owned),
            page_size: page_size.map(str::to_owned),
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn offset_does_not_overflow() {
        let p = Pagination::new(u32::MAX, u32::MAX);
        assert_eq!(p.offset(), u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }

    #[test]
    fn zero_values_use_defaults() {
        let p = Pagination::new(0, 0);
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn missing_params_use_defaults() {
        let p = Pagination::from(params(None, None));
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 10);
    }

    #[test]
    fn non_positive_or_garbage_params_use_defaults() {
        for (page, size) in [("0", "0"), ("-3", "-1"), ("abc", "1.5"), ("", " 2")] {
            let p = Pagination::from(params(Some(page), Some(size)));
            assert_eq!(p, Pagination::default(), "page={page:?} pageSize={size:?}");
        }
    }

    #[test]
    fn valid_params_are_kept() {
        let p = Pagination::from(params(Some("3"), Some("2")));
        assert_eq!(p.page, 3);
        assert_eq!(p.page_size, 2);
    }

    #[test]
    fn oversized_params_use_defaults() {
        let p = Pagination::from(params(Some("99999999999"), Some("5")));
        assert_eq!(p.page, DEFAULT_PAGE);
        assert_eq!(p.page_size, 5);
    }

    #[test]
    fn page_size_is_not_clamped() {
        let p = Pagination::from(params(None, Some("500")));
        assert_eq!(p.limit(), 500);
    }

    #[test]
    fn slice_returns_requested_window() {
        let items: Vec<u32> = (0..7).collect();
        assert_eq!(Pagination::new(1, 3).slice(&items), &[0, 1, 2]);
        assert_eq!(Pagination::new(2, 3).slice(&items), &[3, 4, 5]);
        assert_eq!(Pagination::new(3, 3).slice(&items), &[6]);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let items: Vec<u32> = (0..7).collect();
        assert!(Pagination::new(4, 3).slice(&items).is_empty());
        assert!(Pagination::new(u32::MAX, u32::MAX).slice(&items).is_empty());
        assert!(Pagination::default().slice::<u32>(&[]).is_empty());
    }

    #[test]
    fn slice_length_matches_formula() {
        let items: Vec<u32> = (0..23).collect();
        let total = items.len() as i64;
        for page in 1..=6u32 {
            for size in 1..=12u32 {
                let p = Pagination::new(page, size);
                let expected = (total - i64::from(page - 1) * i64::from(size))
                    .max(0)
                    .min(i64::from(size));
                let got = p.slice(&items);
                assert_eq!(got.len() as i64, expected, "page={page} size={size}");
                if let Some(first) = got.first() {
                    assert_eq!(u64::from(*first), p.offset());
                }
            }
        }
    }
}
