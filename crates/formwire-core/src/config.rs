//! Console configuration
//!
//! Query-key layout shared by every list page of the console.

use formwire_query::{PaginationConfig, ServerSort, DEFAULT_SORT_PREFIX};
use serde::{Deserialize, Serialize};

/// Query-key layout for list pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prefix of server sort keys
    pub sort_prefix: String,

    /// Pagination keys and defaults
    pub pagination: PaginationConfig,
}

impl ConsoleConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With sort prefix
    #[inline]
    #[must_use]
    pub fn with_sort_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sort_prefix = prefix.into();
        self
    }

    /// With pagination layout
    #[inline]
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Server sort binding for `column` under the configured prefix
    #[inline]
    #[must_use]
    pub fn server_sort(&self, column: impl Into<String>) -> ServerSort {
        ServerSort::with_prefix(column, &self.sort_prefix)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            sort_prefix: DEFAULT_SORT_PREFIX.to_string(),
            pagination: PaginationConfig::page_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConsoleConfig::new();
        assert_eq!(config.sort_prefix, "ob.");
        assert_eq!(config.pagination.index_key, "pageIndex");
        assert_eq!(config.server_sort("name").key(), "ob.name");
    }

    #[test]
    fn builder() {
        let config = ConsoleConfig::new()
            .with_sort_prefix("sort.")
            .with_pagination(PaginationConfig::prefixed());
        assert_eq!(config.server_sort("total").key(), "sort.total");
        assert_eq!(config.pagination.size_key, "p.pageSize");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"pagination":{"index_key":"p.page"}}"#).unwrap();
        assert_eq!(config.sort_prefix, "ob.");
        assert_eq!(config.pagination.index_key, "p.page");
        assert_eq!(config.pagination.size_key, "pageSize");
    }
}
