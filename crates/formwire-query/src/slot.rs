//! Query slots and pagination keys

use serde::{Deserialize, Serialize};

/// What a slot holds; decides whether a write resets pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    /// Filter value; changing it resets the page index
    Filter,

    /// Sort direction of one column
    Sort,

    /// Pagination cursor or page size
    Page,

    /// Anything else
    #[default]
    Other,
}

/// One named, string-valued piece of URL state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySlot {
    /// Query-string key
    pub key: String,

    /// Value reported while the key is absent from the URL
    #[serde(default)]
    pub default_value: String,

    /// Slot role
    #[serde(default)]
    pub role: SlotRole,
}

impl QuerySlot {
    /// Create slot
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, default_value: impl Into<String>, role: SlotRole) -> Self {
        Self {
            key: key.into(),
            default_value: default_value.into(),
            role,
        }
    }

    /// Filter slot defaulting to the empty string
    #[inline]
    #[must_use]
    pub fn filter(key: impl Into<String>) -> Self {
        Self::new(key, "", SlotRole::Filter)
    }

    /// Sort slot defaulting to the empty string (no sort)
    #[inline]
    #[must_use]
    pub fn sort(key: impl Into<String>) -> Self {
        Self::new(key, "", SlotRole::Sort)
    }
}

/// Keys and defaults of the pagination slots
///
/// Key names are call-site configuration; two layouts are in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Key of the page cursor
    pub index_key: String,

    /// Key of the page size
    pub size_key: String,

    /// Cursor value of the first page
    pub first_page: String,

    /// Page size while the size key is absent
    pub default_size: String,
}

impl PaginationConfig {
    /// `pageIndex` / `pageSize` layout
    #[must_use]
    pub fn page_index() -> Self {
        Self {
            index_key: "pageIndex".to_string(),
            size_key: "pageSize".to_string(),
            first_page: "1".to_string(),
            default_size: "10".to_string(),
        }
    }

    /// `p.page` / `p.pageSize` layout
    #[must_use]
    pub fn prefixed() -> Self {
        Self {
            index_key: "p.page".to_string(),
            size_key: "p.pageSize".to_string(),
            ..Self::page_index()
        }
    }

    /// Set first page value
    #[inline]
    #[must_use]
    pub fn with_first_page(mut self, first_page: impl Into<String>) -> Self {
        self.first_page = first_page.into();
        self
    }

    /// Slots for the cursor and the page size
    #[must_use]
    pub fn slots(&self) -> [QuerySlot; 2] {
        [
            QuerySlot::new(&self.index_key, &self.first_page, SlotRole::Page),
            QuerySlot::new(&self.size_key, &self.default_size, SlotRole::Page),
        ]
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::page_index()
    }
}
