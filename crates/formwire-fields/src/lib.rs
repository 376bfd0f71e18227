//! formwire Field Compiler
//!
//! Schema-driven compilation of renderable field descriptors.
//!
//! # Core Concepts
//!
//! - [`compile`]: One schema node to one [`FieldDescriptor`]
//! - [`walk`]: Every field of an object schema, in declaration order
//! - [`merge`]: Base filter schema plus caller-supplied filter fields
//! - [`ValueSource`]: Externally fetched options for select fields
//!
//! # Example
//!
//! ```rust
//! use formwire_fields::{walk, ControlTag, ValueSources};
//! use formwire_schema::{ObjectSchema, SchemaNode};
//!
//! let schema = ObjectSchema::new()
//!     .field("name", SchemaNode::string().optional().describe("Name"))
//!     .field("age", SchemaNode::number());
//!
//! let fields = walk(&schema, &ValueSources::new());
//! assert_eq!(fields[0].label, "Name");
//! assert_eq!(fields[1].label, "age");
//! assert!(fields.iter().all(|f| f.tag() == ControlTag::Text));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod compiler;
mod descriptor;
mod merge;
mod source;
mod walker;

// Re-exports
pub use compiler::compile;
pub use descriptor::{coerce_number, Control, ControlTag, DateKind, FieldDescriptor};
pub use merge::{base_filter_schema, filter_fields, merge, BASE_FILTER_KEY};
pub use source::{SelectOption, ValueKind, ValueSource, ValueSources};
pub use walker::{walk, walk_with_labels};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
