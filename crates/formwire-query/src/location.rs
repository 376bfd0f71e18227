//! Browser-like locations with a navigable history
//!
//! [`Location`] is the seam between the store and wherever the query string
//! actually lives. [`MemoryLocation`] keeps raw pairs for tests;
//! [`UrlLocation`] keeps full [`Url`]s and encodes them exactly as a browser
//! address bar would.

use crate::error::LocationError;
use url::form_urlencoded;
use url::Url;

/// Decoded query string, in order of appearance
pub type QueryPairs = Vec<(String, String)>;

/// Current URL plus session history
pub trait Location: std::fmt::Debug {
    /// Decoded pairs of the current entry
    fn query_pairs(&self) -> QueryPairs;

    /// Navigate to a new entry carrying `pairs`, dropping forward history
    fn push(&mut self, pairs: QueryPairs);

    /// Rewrite the current entry in place
    fn replace(&mut self, pairs: QueryPairs);

    /// Step back; `false` at the oldest entry
    fn back(&mut self) -> bool;

    /// Step forward; `false` at the newest entry
    fn forward(&mut self) -> bool;

    /// Number of history entries
    fn history_len(&self) -> usize;

    /// Current address (or `?query` for locations without a base)
    fn href(&self) -> String;
}

/// Encode pairs as `application/x-www-form-urlencoded`
#[must_use]
pub fn encode_query(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Decode an `application/x-www-form-urlencoded` string, with or without leading `?`
#[must_use]
pub fn decode_query(query: &str) -> QueryPairs {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Linear history with a cursor
#[derive(Debug, Clone)]
struct History<E> {
    entries: Vec<E>,
    cursor: usize,
}

impl<E> History<E> {
    fn new(initial: E) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    fn current(&self) -> &E {
        &self.entries[self.cursor]
    }

    fn current_mut(&mut self) -> &mut E {
        &mut self.entries[self.cursor]
    }

    fn push(&mut self, entry: E) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// In-memory location for tests and headless use
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    history: History<QueryPairs>,
}

impl MemoryLocation {
    /// Location with an empty query string
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_pairs(Vec::new())
    }

    /// Location starting at the given pairs
    #[inline]
    #[must_use]
    pub fn with_pairs(pairs: QueryPairs) -> Self {
        Self {
            history: History::new(pairs),
        }
    }

    /// Location starting at an encoded query string
    #[inline]
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self::with_pairs(decode_query(query))
    }

    /// Encoded query string of the current entry, without `?`
    #[inline]
    #[must_use]
    pub fn query(&self) -> String {
        encode_query(self.history.current())
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl Location for MemoryLocation {
    fn query_pairs(&self) -> QueryPairs {
        self.history.current().clone()
    }

    fn push(&mut self, pairs: QueryPairs) {
        self.history.push(pairs);
    }

    fn replace(&mut self, pairs: QueryPairs) {
        *self.history.current_mut() = pairs;
    }

    fn back(&mut self) -> bool {
        self.history.back()
    }

    fn forward(&mut self) -> bool {
        self.history.forward()
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }

    fn href(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            String::new()
        } else {
            format!("?{query}")
        }
    }
}

/// Location backed by real URLs
#[derive(Debug, Clone)]
pub struct UrlLocation {
    history: History<Url>,
}

impl UrlLocation {
    /// Start at `url`
    #[inline]
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            history: History::new(url),
        }
    }

    /// Parse and start at `input`
    ///
    /// # Errors
    /// Returns [`LocationError::InvalidUrl`] if `input` is not an absolute URL.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        Ok(Self::new(Url::parse(input)?))
    }

    /// Current URL
    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        self.history.current()
    }

    fn with_query(&self, pairs: &QueryPairs) -> Url {
        let mut url = self.history.current().clone();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        url
    }
}

impl Location for UrlLocation {
    fn query_pairs(&self) -> QueryPairs {
        self.history.current().query_pairs().into_owned().collect()
    }

    fn push(&mut self, pairs: QueryPairs) {
        let url = self.with_query(&pairs);
        self.history.push(url);
    }

    fn replace(&mut self, pairs: QueryPairs) {
        let url = self.with_query(&pairs);
        *self.history.current_mut() = url;
    }

    fn back(&mut self) -> bool {
        self.history.back()
    }

    fn forward(&mut self) -> bool {
        self.history.forward()
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }

    fn href(&self) -> String {
        self.history.current().as_str().to_string()
    }
}
