//! Error types for schema loading and validation

use crate::path::SchemaPath;

/// Errors raised while loading or checking a schema tree
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A union node declares no options
    #[error("union at {path} has no options")]
    EmptyUnion {
        /// Location of the offending node
        path: SchemaPath,
    },

    /// The top-level node is not an object schema
    #[error("expected an object schema, found '{found}'")]
    NotAnObject {
        /// Tag of the node that was found instead
        found: &'static str,
    },

    /// JSON document could not be decoded into a schema
    #[error("invalid schema document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SchemaError {
    /// Create empty union error for path
    #[inline]
    #[must_use]
    pub fn empty_union(path: SchemaPath) -> Self {
        Self::EmptyUnion { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_union_display() {
        let err = SchemaError::empty_union(SchemaPath::root().child("status"));
        assert_eq!(err.to_string(), "union at status has no options");
    }

    #[test]
    fn not_an_object_display() {
        let err = SchemaError::NotAnObject { found: "string" };
        assert_eq!(err.to_string(), "expected an object schema, found 'string'");
    }
}
