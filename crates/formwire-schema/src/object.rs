//! Object schemas
//!
//! Provides [`ObjectSchema`], the ordered record of named fields that entity
//! forms and filter bars are compiled from.

use crate::error::SchemaError;
use crate::node::{NodeKind, SchemaNode};
use crate::path::SchemaPath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Record of named fields in declaration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Fields in declaration order
    #[serde(default)]
    pub fields: IndexMap<String, SchemaNode>,
}

impl ObjectSchema {
    /// Create empty object schema
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, returning the extended schema
    ///
    /// Re-declaring an existing name replaces its node in place.
    #[inline]
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.insert(name.into(), node);
        self
    }

    /// Get field node by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.get(name)
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if schema has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check structural invariants of every field
    ///
    /// # Errors
    /// Returns the first [`SchemaError`] found, addressed by field path.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_at(&SchemaPath::root())
    }

    pub(crate) fn validate_at(&self, path: &SchemaPath) -> Result<(), SchemaError> {
        self.fields
            .iter()
            .try_for_each(|(name, node)| node.validate_at(&path.child(name)))
    }

    /// Decode an object schema from JSON
    ///
    /// Accepts either a tagged node (`{"tag":"object","fields":{..}}`) or a
    /// bare `{"fields":{..}}` record.
    ///
    /// # Errors
    /// Returns [`SchemaError::NotAnObject`] when the tagged node is not an
    /// object, or a decode/validation error.
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let schema = if value.get("tag").is_some() {
            let node: SchemaNode = serde_json::from_value(value)?;
            match node.kind {
                NodeKind::Object(object) => object,
                _ => {
                    return Err(SchemaError::NotAnObject {
                        found: node.tag_name(),
                    })
                }
            }
        } else {
            serde_json::from_value(value)?
        };
        schema.validate()?;
        Ok(schema)
    }
}

impl FromIterator<(String, SchemaNode)> for ObjectSchema {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
