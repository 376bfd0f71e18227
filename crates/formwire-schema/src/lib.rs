//! formwire Schema Model
//!
//! Typed validation-schema tree consumed by the field compiler.
//!
//! # Core Concepts
//!
//! - [`SchemaNode`]: One node with description and constraint metadata
//! - [`NodeKind`]: Closed set of node shapes (scalars, wrappers, enums, unions, objects)
//! - [`ObjectSchema`]: Ordered record of named fields
//! - [`SchemaPath`]: Addressing within a schema tree for diagnostics
//!
//! # Example
//!
//! ```rust
//! use formwire_schema::{ObjectSchema, SchemaNode};
//!
//! let schema = ObjectSchema::new()
//!     .field("name", SchemaNode::string().optional().describe("Name"))
//!     .field("age", SchemaNode::number());
//!
//! assert_eq!(schema.names().collect::<Vec<_>>(), vec!["name", "age"]);
//! assert!(schema.validate().is_ok());
//! ```

#![warn(unreachable_pub)]

mod error;
mod node;
mod object;
mod path;

// Re-exports
pub use error::SchemaError;
pub use node::{ConstraintKind, NodeKind, SchemaNode};
pub use object::ObjectSchema;
pub use path::SchemaPath;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf() -> impl Strategy<Value = SchemaNode> {
        prop_oneof![
            Just(SchemaNode::string()),
            Just(SchemaNode::number()),
            Just(SchemaNode::boolean()),
            Just(SchemaNode::date()),
            "[a-z]{1,6}".prop_map(SchemaNode::literal),
        ]
    }

    fn node() -> impl Strategy<Value = SchemaNode> {
        leaf().prop_recursive(3, 16, 3, |inner| {
            prop_oneof![
                inner.clone().prop_map(SchemaNode::optional),
                inner.clone().prop_map(SchemaNode::nullable),
                prop::collection::vec(inner, 1..3).prop_map(SchemaNode::union),
            ]
        })
    }

    proptest! {
        #[test]
        fn generated_trees_are_valid_and_survive_json(node in node()) {
            prop_assert!(node.validate().is_ok());
            let json = serde_json::to_string(&node).unwrap();
            let back = SchemaNode::from_json(&json).unwrap();
            prop_assert_eq!(back, node);
        }

        #[test]
        fn unwrapped_is_never_a_wrapper(node in node()) {
            prop_assert!(!node.unwrapped().is_wrapper());
        }
    }
}
