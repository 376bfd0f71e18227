//! Schema node tree
//!
//! [`SchemaNode`] is the closed sum type the field compiler dispatches on.
//! Nodes are built either from JSON (tagged by `"tag"`) or through the
//! builder methods, which mirror a chained schema front-end:
//!
//! ```rust
//! use formwire_schema::SchemaNode;
//!
//! let name = SchemaNode::string().optional().describe("Name");
//! assert!(name.is_wrapper());
//! assert_eq!(name.unwrapped().tag_name(), "string");
//! ```

use crate::error::SchemaError;
use crate::object::ObjectSchema;
use crate::path::SchemaPath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Constraint metadata attached to a node
///
/// The compiler never validates against these; they travel to the renderer
/// as input hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Must be a UUID
    Uuid,

    /// Must be an e-mail address
    Email,

    /// Must be a URL
    Url,

    /// Must be a CUID
    Cuid,

    /// Must be an integer
    Int,

    /// Must be strictly positive
    Positive,

    /// Must not be empty
    NonEmpty,
}

/// One node of a validation schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Declared shape of the node
    #[serde(flatten)]
    pub kind: NodeKind,

    /// Human-readable description, used as the field label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Constraint metadata
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub constraints: BTreeSet<ConstraintKind>,
}

/// Shape of a schema node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum NodeKind {
    /// Free text
    String,

    /// Numeric value
    Number,

    /// True/false flag
    Boolean,

    /// Calendar date or timestamp
    Date,

    /// Value may be absent
    Optional {
        /// Wrapped node
        inner: Box<SchemaNode>,
    },

    /// Value may be null
    Nullable {
        /// Wrapped node
        inner: Box<SchemaNode>,
    },

    /// Closed set of string values (value → label)
    Enum {
        /// Allowed values in declaration order
        values: IndexMap<String, String>,
    },

    /// Enum declared by the host language (value → member name)
    NativeEnum {
        /// Allowed values in declaration order
        values: IndexMap<String, String>,
    },

    /// A single constant
    Literal {
        /// The constant value
        value: String,
    },

    /// One of several shapes
    Union {
        /// Alternatives, never empty in a valid schema
        options: Vec<SchemaNode>,
    },

    /// Record of named fields
    Object(ObjectSchema),

    /// Any tag this model does not know
    #[serde(other)]
    Unknown,
}

impl SchemaNode {
    /// Create node of the given kind with no metadata
    #[inline]
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            description: None,
            constraints: BTreeSet::new(),
        }
    }

    /// String node
    #[inline]
    #[must_use]
    pub fn string() -> Self {
        Self::new(NodeKind::String)
    }

    /// Number node
    #[inline]
    #[must_use]
    pub fn number() -> Self {
        Self::new(NodeKind::Number)
    }

    /// Boolean node
    #[inline]
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(NodeKind::Boolean)
    }

    /// Date node
    #[inline]
    #[must_use]
    pub fn date() -> Self {
        Self::new(NodeKind::Date)
    }

    /// Literal constant node
    #[inline]
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Literal {
            value: value.into(),
        })
    }

    /// Enum node whose labels equal its values
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|v| {
                let v = v.into();
                (v.clone(), v)
            })
            .collect();
        Self::new(NodeKind::Enum { values })
    }

    /// Native enum node from `(member name, value)` pairs
    #[must_use]
    pub fn native_enum<I, K, V>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = members
            .into_iter()
            .map(|(name, value)| (value.into(), name.into()))
            .collect();
        Self::new(NodeKind::NativeEnum { values })
    }

    /// Union node
    #[must_use]
    pub fn union(options: impl IntoIterator<Item = SchemaNode>) -> Self {
        Self::new(NodeKind::Union {
            options: options.into_iter().collect(),
        })
    }

    /// Object node
    #[inline]
    #[must_use]
    pub fn object(schema: ObjectSchema) -> Self {
        Self::new(NodeKind::Object(schema))
    }

    /// Set description
    #[inline]
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add constraint
    #[inline]
    #[must_use]
    pub fn constrain(mut self, constraint: ConstraintKind) -> Self {
        self.constraints.insert(constraint);
        self
    }

    /// Shorthand for `constrain(ConstraintKind::Uuid)`
    #[inline]
    #[must_use]
    pub fn uuid(self) -> Self {
        self.constrain(ConstraintKind::Uuid)
    }

    /// Wrap in an optional layer; the description is carried onto the wrapper
    #[must_use]
    pub fn optional(self) -> Self {
        let description = self.description.clone();
        Self {
            kind: NodeKind::Optional {
                inner: Box::new(self),
            },
            description,
            constraints: BTreeSet::new(),
        }
    }

    /// Wrap in a nullable layer; the description is carried onto the wrapper
    #[must_use]
    pub fn nullable(self) -> Self {
        let description = self.description.clone();
        Self {
            kind: NodeKind::Nullable {
                inner: Box::new(self),
            },
            description,
            constraints: BTreeSet::new(),
        }
    }

    /// Tag name as it appears in the serialized form
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        match self.kind {
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Date => "date",
            NodeKind::Optional { .. } => "optional",
            NodeKind::Nullable { .. } => "nullable",
            NodeKind::Enum { .. } => "enum",
            NodeKind::NativeEnum { .. } => "native_enum",
            NodeKind::Literal { .. } => "literal",
            NodeKind::Union { .. } => "union",
            NodeKind::Object(_) => "object",
            NodeKind::Unknown => "unknown",
        }
    }

    /// Check if node is an optional or nullable wrapper
    #[inline]
    #[must_use]
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Optional { .. } | NodeKind::Nullable { .. }
        )
    }

    /// Check if node is a literal constant
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Literal { .. })
    }

    /// Strip every optional/nullable layer
    #[must_use]
    pub fn unwrapped(&self) -> &SchemaNode {
        let mut node = self;
        while let NodeKind::Optional { inner } | NodeKind::Nullable { inner } = &node.kind {
            node = inner;
        }
        node
    }

    /// Check if node carries a constraint
    #[inline]
    #[must_use]
    pub fn has_constraint(&self, constraint: ConstraintKind) -> bool {
        self.constraints.contains(&constraint)
    }

    /// Check structural invariants of the whole subtree
    ///
    /// # Errors
    /// Returns [`SchemaError::EmptyUnion`] for the first union without options.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_at(&SchemaPath::root())
    }

    pub(crate) fn validate_at(&self, path: &SchemaPath) -> Result<(), SchemaError> {
        match &self.kind {
            NodeKind::Optional { inner } | NodeKind::Nullable { inner } => inner.validate_at(path),
            NodeKind::Union { options } => {
                if options.is_empty() {
                    return Err(SchemaError::empty_union(path.clone()));
                }
                options
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, option)| option.validate_at(&path.option(i)))
            }
            NodeKind::Object(object) => object.validate_at(path),
            NodeKind::String
            | NodeKind::Number
            | NodeKind::Boolean
            | NodeKind::Date
            | NodeKind::Enum { .. }
            | NodeKind::NativeEnum { .. }
            | NodeKind::Literal { .. }
            | NodeKind::Unknown => Ok(()),
        }
    }

    /// Decode and validate a node from JSON
    ///
    /// # Errors
    /// Returns [`SchemaError::Decode`] on malformed input, or a validation error.
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let node: Self = serde_json::from_str(source)?;
        node.validate()?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_description_and_constraints() {
        let node = SchemaNode::string().describe("Customer").uuid();
        assert_eq!(node.description.as_deref(), Some("Customer"));
        assert!(node.has_constraint(ConstraintKind::Uuid));
        assert!(!node.has_constraint(ConstraintKind::Email));
    }

    #[test]
    fn optional_carries_description() {
        let node = SchemaNode::string().describe("Name").optional();
        assert_eq!(node.tag_name(), "optional");
        assert_eq!(node.description.as_deref(), Some("Name"));
    }

    #[test]
    fn unwrapped_strips_all_layers() {
        let node = SchemaNode::number().nullable().optional();
        assert_eq!(node.unwrapped().tag_name(), "number");
    }

    #[test]
    fn native_enum_maps_value_to_member() {
        let node = SchemaNode::native_enum([("Active", "ACTIVE"), ("Closed", "CLOSED")]);
        let NodeKind::NativeEnum { values } = &node.kind else {
            panic!("expected native enum");
        };
        assert_eq!(values.get("ACTIVE").map(String::as_str), Some("Active"));
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["ACTIVE", "CLOSED"]);
    }

    #[test]
    fn validate_rejects_empty_union() {
        let node = SchemaNode::union([]).optional();
        assert!(matches!(node.validate(), Err(SchemaError::EmptyUnion { .. })));
    }

    #[test]
    fn json_wrapper_round_trip() {
        let json = r#"{"tag":"optional","description":"Name","inner":{"tag":"string"}}"#;
        let node = SchemaNode::from_json(json).unwrap();
        assert_eq!(node, SchemaNode::string().optional().describe("Name"));
    }

    #[test]
    fn json_unknown_tag_decodes() {
        let node = SchemaNode::from_json(r#"{"tag":"bigint","description":"Total"}"#).unwrap();
        assert_eq!(node.kind, NodeKind::Unknown);
        assert_eq!(node.description.as_deref(), Some("Total"));
    }

    #[test]
    fn json_constraints_decode() {
        let node = SchemaNode::from_json(r#"{"tag":"string","constraints":["uuid"]}"#).unwrap();
        assert!(node.has_constraint(ConstraintKind::Uuid));
    }
}
