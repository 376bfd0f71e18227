//! Query-parameter state store
//!
//! The URL is the only source of truth: every read is derived from the
//! current [`Location`] entry, and every write lands as exactly one history
//! entry. Filter writes carry the page reset in that same entry, so stepping
//! back never shows filtered results on a stale page.

use crate::location::{Location, QueryPairs};
use crate::slot::{PaginationConfig, QuerySlot, SlotRole};
use indexmap::IndexMap;

/// Slot store bound to a location
#[derive(Debug, Clone)]
pub struct QueryStore<L: Location> {
    location: L,
    slots: IndexMap<String, QuerySlot>,
    pagination: Option<PaginationConfig>,
}

impl<L: Location> QueryStore<L> {
    /// Create store over `location` with the given slots, in order
    #[must_use]
    pub fn new(location: L, slots: impl IntoIterator<Item = QuerySlot>) -> Self {
        let mut store = Self {
            location,
            slots: IndexMap::new(),
            pagination: None,
        };
        for slot in slots {
            store.register(slot);
        }
        store
    }

    /// Couple pagination: registers the page slots and enables page resets
    #[must_use]
    pub fn with_pagination(mut self, config: PaginationConfig) -> Self {
        for slot in config.slots() {
            self.register(slot);
        }
        self.pagination = Some(config);
        self
    }

    /// Register a slot; re-registering a key replaces its default and role
    pub fn register(&mut self, slot: QuerySlot) {
        self.slots.insert(slot.key.clone(), slot);
    }

    /// Registered slot by key
    #[inline]
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&QuerySlot> {
        self.slots.get(key)
    }

    /// Registered slots in registration order
    pub fn slots(&self) -> impl Iterator<Item = &QuerySlot> {
        self.slots.values()
    }

    /// Pagination layout, if coupled
    #[inline]
    #[must_use]
    pub fn pagination(&self) -> Option<&PaginationConfig> {
        self.pagination.as_ref()
    }

    /// Underlying location
    #[inline]
    #[must_use]
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Underlying location, for history navigation
    #[inline]
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Consume the store, returning its location
    #[inline]
    #[must_use]
    pub fn into_location(self) -> L {
        self.location
    }

    /// Current value of every registered slot, in registration order
    #[must_use]
    pub fn values(&self) -> IndexMap<String, String> {
        let pairs = self.location.query_pairs();
        self.slots
            .values()
            .map(|slot| {
                let value = lookup(&pairs, &slot.key).unwrap_or(&slot.default_value);
                (slot.key.clone(), value.clone())
            })
            .collect()
    }

    /// Current value of `key`: the URL value, else the slot default
    ///
    /// Unregistered keys have no default and read `None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
            .or_else(|| self.slots.get(key).map(|s| s.default_value.clone()))
    }

    /// Value of `key` exactly as present in the URL
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        lookup(&self.location.query_pairs(), key).cloned()
    }

    /// Check if `key` currently reads its default
    #[must_use]
    pub fn is_default(&self, key: &str) -> bool {
        match (self.raw(key), self.slots.get(key)) {
            (None, _) => true,
            (Some(value), Some(slot)) => value == slot.default_value,
            (Some(_), None) => false,
        }
    }

    /// Check if any filter slot holds a non-default value
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.slots
            .values()
            .filter(|slot| slot.role == SlotRole::Filter)
            .any(|slot| !self.is_default(&slot.key))
    }

    /// Write several slots as one history entry
    ///
    /// `Some(value)` sets the key (an empty string stays present as `key=`);
    /// `None` removes the key from the URL. If a filter slot changes, the page
    /// index is reset to the first page in the same entry. Returns `false`
    /// when the URL is unchanged, in which case no entry is pushed.
    pub fn set_many<I, K>(&mut self, partial: I) -> bool
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        self.write(partial, false)
    }

    /// Remove `keys` from the URL as one history entry
    ///
    /// Clearing any filter slot returns to the first page, even when the key
    /// was already absent.
    pub fn clear<I, K>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let touches_filter = keys.iter().any(|key| {
            self.slots
                .get(key)
                .is_some_and(|slot| slot.role == SlotRole::Filter)
        });
        self.write(keys.into_iter().map(|k| (k, None)), touches_filter)
    }

    /// Remove every filter slot and return to the first page
    pub fn clear_filters(&mut self) -> bool {
        let keys: Vec<String> = self
            .slots
            .values()
            .filter(|slot| slot.role == SlotRole::Filter)
            .map(|slot| slot.key.clone())
            .collect();
        self.write(keys.into_iter().map(|k| (k, None)), true)
    }

    /// Move to page `index`, rewriting the current history entry
    ///
    /// Back navigation skips page moves and lands on the previous filter state.
    pub fn set_page(&mut self, index: impl Into<String>) -> bool {
        let Some(key) = self.pagination.as_ref().map(|p| p.index_key.clone()) else {
            return false;
        };
        self.commit([(key, Some(index.into()))], false, Navigation::Replace)
    }

    /// Change page size and return to the first page
    pub fn set_page_size(&mut self, size: impl Into<String>) -> bool {
        let Some(key) = self.pagination.as_ref().map(|p| p.size_key.clone()) else {
            return false;
        };
        self.write([(key, Some(size.into()))], true)
    }

    fn write<I, K>(&mut self, partial: I, force_page_reset: bool) -> bool
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        self.commit(partial, force_page_reset, Navigation::Push)
    }

    fn commit<I, K>(&mut self, partial: I, force_page_reset: bool, navigation: Navigation) -> bool
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        let before = self.location.query_pairs();
        let mut pairs = before.clone();
        let mut filter_changed = false;

        for (key, value) in partial {
            let key = key.into();
            let changed = apply(&mut pairs, &key, value);
            let is_filter = self
                .slots
                .get(&key)
                .is_some_and(|slot| slot.role == SlotRole::Filter);
            filter_changed |= changed && is_filter;
        }

        if filter_changed || force_page_reset {
            if let Some(pagination) = &self.pagination {
                apply(
                    &mut pairs,
                    &pagination.index_key,
                    Some(pagination.first_page.clone()),
                );
            }
        }

        if pairs == before {
            tracing::trace!("query state unchanged");
            return false;
        }

        match navigation {
            Navigation::Push => self.location.push(pairs),
            Navigation::Replace => self.location.replace(pairs),
        }
        tracing::debug!(
            href = %self.location.href(),
            ?navigation,
            page_reset = filter_changed || force_page_reset,
            "query state updated"
        );
        true
    }
}

/// How a write lands in the location history
#[derive(Debug, Clone, Copy)]
enum Navigation {
    Push,
    Replace,
}

fn lookup<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Set or remove `key` in place; returns whether the key's value changed
fn apply(pairs: &mut QueryPairs, key: &str, value: Option<String>) -> bool {
    let previous = lookup(pairs, key).cloned();
    match value {
        Some(value) => {
            let changed = previous.as_ref() != Some(&value);
            match pairs.iter().position(|(k, _)| k == key) {
                Some(first) => {
                    pairs[first].1 = value;
                    let mut index = 0;
                    pairs.retain(|(k, _)| {
                        let keep = k != key || index == first;
                        index += 1;
                        keep
                    });
                }
                None => pairs.push((key.to_string(), value)),
            }
            changed
        }
        None => {
            pairs.retain(|(k, _)| k != key);
            previous.is_some()
        }
    }
}
