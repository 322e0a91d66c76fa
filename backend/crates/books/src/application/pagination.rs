//! Listing Pagination
//!
//! `page` と `limit` はクエリ文字列から緩く解釈される。
//! 欠落・非数値・0 以下はデフォルトに落ち、`limit` には上限を設ける
//! （無制限の取得要求を許さないため）。

/// Default page when absent or unparsable
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when absent or unparsable
pub const DEFAULT_LIMIT: i64 = 5;

/// Hard cap on the page size
pub const MAX_LIMIT: i64 = 100;

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    /// Parse from raw query text
    ///
    /// Absent, non-numeric, and non-positive values fall back to the
    /// defaults; `limit` is capped at [`MAX_LIMIT`].
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        Self { page, limit }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of records skipped before this page's window
    #[inline]
    pub fn skip(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Number of pages needed for `total` records (ceiling division)
    #[inline]
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|v| *v >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let p = Pagination::from_query(None, None);
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 5);
        assert_eq!(p.skip(), 0);
    }

    #[test]
    fn test_defaults_when_non_numeric() {
        let p = Pagination::from_query(Some("abc"), Some("1.5"));
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 5);
    }

    #[test]
    fn test_defaults_when_non_positive() {
        let p = Pagination::from_query(Some("0"), Some("-3"));
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 5);
    }

    #[test]
    fn test_explicit_values() {
        let p = Pagination::from_query(Some("2"), Some("5"));
        assert_eq!(p.page(), 2);
        assert_eq!(p.limit(), 5);
        assert_eq!(p.skip(), 5);
    }

    #[test]
    fn test_limit_is_capped() {
        let p = Pagination::from_query(None, Some("100000"));
        assert_eq!(p.limit(), MAX_LIMIT);
    }

    #[test]
    fn test_trims_whitespace() {
        let p = Pagination::from_query(Some(" 3 "), Some(" 10 "));
        assert_eq!(p.page(), 3);
        assert_eq!(p.limit(), 10);
    }

    #[test]
    fn test_total_pages_ceiling() {
        let p = Pagination::from_query(Some("2"), Some("5"));
        assert_eq!(p.total_pages(12), 3);
        assert_eq!(p.total_pages(10), 2);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(0), 0);
    }
}
