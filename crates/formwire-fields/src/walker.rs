//! Object schema walker
//!
//! Compiles every field of an [`ObjectSchema`] in declaration order. The
//! output always has exactly one descriptor per declared field.

use crate::compiler::compile;
use crate::descriptor::FieldDescriptor;
use crate::source::ValueSources;
use formwire_schema::ObjectSchema;
use indexmap::IndexMap;

/// Compile all fields of `schema`
#[must_use]
pub fn walk(schema: &ObjectSchema, sources: &ValueSources) -> Vec<FieldDescriptor> {
    schema
        .fields
        .iter()
        .map(|(name, node)| compile(name, node, sources, None))
        .collect()
}

/// Compile all fields of `schema`, taking labels from `labels` where present
#[must_use]
pub fn walk_with_labels(
    schema: &ObjectSchema,
    sources: &ValueSources,
    labels: &IndexMap<String, String>,
) -> Vec<FieldDescriptor> {
    schema
        .fields
        .iter()
        .map(|(name, node)| compile(name, node, sources, labels.get(name).map(String::as_str)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Control;
    use formwire_schema::SchemaNode;

    #[test]
    fn empty_schema_yields_nothing() {
        assert!(walk(&ObjectSchema::new(), &ValueSources::new()).is_empty());
    }

    #[test]
    fn one_descriptor_per_field_even_when_unsupported() {
        let schema = ObjectSchema::new()
            .field("a", SchemaNode::literal("x"))
            .field("b", SchemaNode::boolean());
        let out = walk(&schema, &ValueSources::new());
        assert_eq!(out.len(), 2);
        assert!(matches!(out[0].control, Control::Unsupported { .. }));
        assert_eq!(out[1].control, Control::Boolean);
    }

    #[test]
    fn labels_override_descriptions() {
        let schema = ObjectSchema::new()
            .field("a", SchemaNode::string().describe("A"))
            .field("b", SchemaNode::string().describe("B"));
        let mut labels = IndexMap::new();
        labels.insert("b".to_string(), "Bee".to_string());
        let out = walk_with_labels(&schema, &ValueSources::new(), &labels);
        assert_eq!(out[0].label, "A");
        assert_eq!(out[1].label, "Bee");
    }
}
