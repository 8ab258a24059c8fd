//! Paging parameters for list endpoints.

use url::Url;

/// `limit` and `page` for a list request.
///
/// Unset or zero values are left out of the query string, so the server
/// falls back to its defaults (50 items, first page).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Items per page.
    pub limit: Option<i64>,
    /// Page number (1-indexed).
    pub page: Option<i64>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Appends the non-zero parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(page) = self.page.filter(|p| *p != 0) {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        };
        url
    }
}
