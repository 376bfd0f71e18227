//! Filter bar controller
//!
//! Holds the draft of a list page's filter form. The draft is always
//! re-initialized from the URL; submitting writes the changed fields back as
//! one history entry, together with the page reset.

use crate::config::ConsoleConfig;
use crate::error::{FormError, FormResult};
use formwire_fields::{base_filter_schema, merge, walk, FieldDescriptor, ValueSources};
use formwire_query::{Location, QuerySlot, QueryStore};
use formwire_schema::ObjectSchema;
use indexmap::IndexMap;

/// Filter form of one list page
#[derive(Debug, Clone)]
pub struct FilterBar {
    schema: ObjectSchema,
    draft: IndexMap<String, String>,
}

impl FilterBar {
    /// Filter bar with the base `filter` field plus `extra` fields
    #[must_use]
    pub fn new(extra: Option<&ObjectSchema>) -> Self {
        let schema = merge(&base_filter_schema(), extra);
        let draft = schema.names().map(|n| (n.to_string(), String::new())).collect();
        Self { schema, draft }
    }

    /// Merged filter schema
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &ObjectSchema {
        &self.schema
    }

    /// One filter slot per field, in field order
    #[must_use]
    pub fn slots(&self) -> Vec<QuerySlot> {
        self.schema.names().map(QuerySlot::filter).collect()
    }

    /// Store over `location` with this bar's slots and the configured pagination
    #[must_use]
    pub fn store<L: Location>(&self, location: L, config: &ConsoleConfig) -> QueryStore<L> {
        QueryStore::new(location, self.slots()).with_pagination(config.pagination.clone())
    }

    /// Controls for the current value sources
    ///
    /// Independent of the draft: new sources never discard typed input.
    #[must_use]
    pub fn descriptors(&self, sources: &ValueSources) -> Vec<FieldDescriptor> {
        walk(&self.schema, sources)
    }

    /// Current draft values
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &IndexMap<String, String> {
        &self.draft
    }

    /// Re-initialize the draft from the URL
    pub fn sync<L: Location>(&mut self, store: &QueryStore<L>) {
        for (name, value) in &mut self.draft {
            *value = store.get(name).unwrap_or_default();
        }
    }

    /// Change one draft value
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] if the bar has no such field.
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> FormResult<()> {
        let slot = self
            .draft
            .get_mut(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Draft values that differ from the URL
    ///
    /// A field emptied back to its slot default is removed from the URL
    /// rather than written as `key=`.
    #[must_use]
    pub fn changes<L: Location>(&self, store: &QueryStore<L>) -> Vec<(String, Option<String>)> {
        self.draft
            .iter()
            .filter(|(name, value)| store.get(name).unwrap_or_default() != **value)
            .map(|(name, value)| {
                let is_default = store.slot(name).is_some_and(|s| s.default_value == *value);
                (name.clone(), (!is_default).then(|| value.clone()))
            })
            .collect()
    }

    /// Check if submitting would change nothing
    #[must_use]
    pub fn submit_disabled<L: Location>(&self, store: &QueryStore<L>) -> bool {
        self.changes(store).is_empty()
    }

    /// Check if no filter is active in the URL
    #[must_use]
    pub fn reset_disabled<L: Location>(&self, store: &QueryStore<L>) -> bool {
        !store.has_active_filters()
    }

    /// Write changed draft values to the URL; returns whether anything was written
    pub fn submit<L: Location>(&mut self, store: &mut QueryStore<L>) -> bool {
        let changes = self.changes(store);
        if changes.is_empty() {
            return false;
        }
        tracing::info!(fields = changes.len(), "submitting filters");
        let written = store.set_many(changes);
        self.sync(store);
        written
    }

    /// Remove every filter from the URL and re-initialize the draft
    pub fn reset<L: Location>(&mut self, store: &mut QueryStore<L>) -> bool {
        tracing::info!("resetting filters");
        let written = store.clear_filters();
        self.sync(store);
        written
    }
}
