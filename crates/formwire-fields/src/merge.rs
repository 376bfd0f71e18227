//! Filter schema merging
//!
//! Filter bars always offer a free-text `filter` field; callers add their own
//! fields on top.

use crate::descriptor::FieldDescriptor;
use crate::source::ValueSources;
use crate::walker::walk;
use formwire_schema::{ObjectSchema, SchemaNode};

/// Key of the free-text search field every filter bar carries
pub const BASE_FILTER_KEY: &str = "filter";

/// Base filter schema: `{ filter: string }`
#[must_use]
pub fn base_filter_schema() -> ObjectSchema {
    ObjectSchema::new().field(BASE_FILTER_KEY, SchemaNode::string().describe("Search"))
}

/// Merge `extra` into `base`
///
/// On a name collision the node from `extra` replaces the base node at the
/// base position; other extra fields are appended in declaration order.
#[must_use]
pub fn merge(base: &ObjectSchema, extra: Option<&ObjectSchema>) -> ObjectSchema {
    let mut merged = base.clone();
    if let Some(extra) = extra {
        for (name, node) in &extra.fields {
            merged.fields.insert(name.clone(), node.clone());
        }
    }
    merged
}

/// Merge `extra` into the base filter schema and compile the result
#[must_use]
pub fn filter_fields(extra: Option<&ObjectSchema>, sources: &ValueSources) -> Vec<FieldDescriptor> {
    walk(&merge(&base_filter_schema(), extra), sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_without_extra_is_base() {
        assert_eq!(merge(&base_filter_schema(), None), base_filter_schema());
    }

    #[test]
    fn merge_appends_extra_fields() {
        let extra = ObjectSchema::new()
            .field("session", SchemaNode::string().describe("Session"))
            .field("paid", SchemaNode::boolean());
        let merged = merge(&base_filter_schema(), Some(&extra));
        assert_eq!(
            merged.names().collect::<Vec<_>>(),
            vec!["filter", "session", "paid"]
        );
    }

    #[test]
    fn extra_wins_on_collision() {
        let extra = ObjectSchema::new().field("filter", SchemaNode::string().describe("Name"));
        let merged = merge(&base_filter_schema(), Some(&extra));
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged.get("filter").and_then(|n| n.description.as_deref()),
            Some("Name")
        );
    }

    #[test]
    fn filter_fields_labels() {
        let extra = ObjectSchema::new().field("session", SchemaNode::string().describe("Session"));
        let out = filter_fields(Some(&extra), &ValueSources::new());
        let labels: Vec<_> = out.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Search", "Session"]);
    }
}
