//! Column sort state machines
//!
//! Two flavours are bound per column:
//! - [`ServerSort`]: three states (`none → asc → desc → none`) persisted in
//!   the URL as `ob.<column>`, read by the backend query.
//! - [`ClientSort`]: local ascending/descending flag with no `none` state,
//!   for tables sorted in memory.
//!
//! Columns never affect each other; several server sorts may be active at
//! once and their relative precedence is left to the consuming query.

use crate::location::Location;
use crate::slot::QuerySlot;
use crate::store::QueryStore;
use serde::{Deserialize, Serialize};

/// Default key prefix of server sort slots
pub const DEFAULT_SORT_PREFIX: &str = "ob.";

/// Sort direction of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Unsorted
    #[default]
    None,

    /// Ascending
    Asc,

    /// Descending
    Desc,
}

impl SortDirection {
    /// Direction after one header click
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::None,
        }
    }

    /// Read a slot value; anything but `asc`/`desc` is unsorted
    #[must_use]
    pub fn from_slot(value: &str) -> Self {
        match value {
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => Self::None,
        }
    }

    /// Slot value, `""` when unsorted
    #[inline]
    #[must_use]
    pub fn as_slot_value(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Check if the column is sorted
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            other => f.write_str(other.as_slot_value()),
        }
    }
}

/// Three-state sort persisted in the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSort {
    column: String,
    key: String,
}

impl ServerSort {
    /// Bind `column` under the default `ob.` prefix
    #[inline]
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self::with_prefix(column, DEFAULT_SORT_PREFIX)
    }

    /// Bind `column` under a custom prefix
    #[must_use]
    pub fn with_prefix(column: impl Into<String>, prefix: &str) -> Self {
        let column = column.into();
        let key = format!("{prefix}{column}");
        Self { column, key }
    }

    /// Column name
    #[inline]
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Query-string key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Slot to register with the store
    #[inline]
    #[must_use]
    pub fn slot(&self) -> QuerySlot {
        QuerySlot::sort(&self.key)
    }

    /// Current direction read from the URL
    #[must_use]
    pub fn current<L: Location>(&self, store: &QueryStore<L>) -> SortDirection {
        store
            .get(&self.key)
            .map_or(SortDirection::None, |v| SortDirection::from_slot(&v))
    }

    /// Advance the column and write it back; unsorted removes the key
    pub fn click<L: Location>(&self, store: &mut QueryStore<L>) -> SortDirection {
        let next = self.current(store).next();
        let value = next.is_active().then(|| next.as_slot_value().to_string());
        store.set_many([(self.key.clone(), value)]);
        tracing::debug!(column = %self.column, direction = %next, "server sort advanced");
        next
    }
}

/// Two-state in-memory sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientSort {
    descending: bool,
}

impl ClientSort {
    /// Ascending sort
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current direction, never [`SortDirection::None`]
    #[inline]
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        if self.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    /// Flip direction
    #[inline]
    pub fn toggle(&mut self) -> SortDirection {
        self.descending = !self.descending;
        self.direction()
    }
}

/// Sort flavour chosen for one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortBinding {
    /// Local two-state sort
    Client(ClientSort),

    /// URL-persisted three-state sort
    Server(ServerSort),
}

impl SortBinding {
    /// Current direction
    #[must_use]
    pub fn direction<L: Location>(&self, store: &QueryStore<L>) -> SortDirection {
        match self {
            Self::Client(sort) => sort.direction(),
            Self::Server(sort) => sort.current(store),
        }
    }

    /// Handle a header click
    pub fn click<L: Location>(&mut self, store: &mut QueryStore<L>) -> SortDirection {
        match self {
            Self::Client(sort) => sort.toggle(),
            Self::Server(sort) => sort.click(store),
        }
    }
}

/// Active server sorts in `columns` order
#[must_use]
pub fn active_sorts<L: Location>(
    store: &QueryStore<L>,
    columns: &[ServerSort],
) -> Vec<(String, SortDirection)> {
    columns
        .iter()
        .map(|sort| (sort.column.clone(), sort.current(store)))
        .filter(|(_, direction)| direction.is_active())
        .collect()
}
