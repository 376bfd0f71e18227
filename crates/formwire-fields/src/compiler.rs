//! Field compiler
//!
//! Turns one schema node into a [`FieldDescriptor`]. Pure: the output depends
//! only on the field name, the node, the value sources and the label override.

use crate::descriptor::{Control, DateKind, FieldDescriptor};
use crate::source::{SelectOption, ValueKind, ValueSources};
use formwire_schema::{NodeKind, SchemaNode};
use indexmap::IndexMap;

/// Compile one field
///
/// # Label resolution
/// `override_label`, else the node description, else `field_name`. Wrapper
/// layers pass their resolved label down, so an override or a description on
/// `optional(..)` survives the unwrap.
///
/// A loading value source only affects kinds that read it: string and date
/// fields become a loading placeholder, toggles and enums compile as usual.
///
/// Never fails: shapes without a control degrade to [`Control::Unsupported`].
#[must_use]
pub fn compile(
    field_name: &str,
    node: &SchemaNode,
    sources: &ValueSources,
    override_label: Option<&str>,
) -> FieldDescriptor {
    let source = sources.get(field_name);

    let control = match &node.kind {
        NodeKind::Optional { inner } | NodeKind::Nullable { inner } => {
            let label = override_label.or(node.description.as_deref());
            return compile(field_name, inner, sources, label);
        }
        NodeKind::String => match source {
            Some(s) if s.loading => loading_placeholder(field_name, s.options()),
            Some(s) if s.has_options() => Control::SelectStatic {
                options: s.options().to_vec(),
            },
            Some(s) if s.kind == Some(ValueKind::Array) => Control::SelectDynamic {
                options: Vec::new(),
                loading: false,
            },
            _ => text(node, false),
        },
        NodeKind::Number => text(node, true),
        NodeKind::Boolean => Control::Boolean,
        NodeKind::Date => match source {
            Some(s) if s.loading => loading_placeholder(field_name, s.options()),
            _ => Control::Date {
                kind: match source.and_then(|s| s.kind) {
                    Some(ValueKind::Datetime) => DateKind::Datetime,
                    _ => DateKind::Date,
                },
            },
        },
        NodeKind::Enum { values } | NodeKind::NativeEnum { values } => Control::SelectStatic {
            options: options_from_map(values),
        },
        NodeKind::Union { options } => {
            if options.is_empty() {
                unsupported(field_name, "union without options")
            } else if let Some(literals) = literal_options(options) {
                Control::SelectStatic { options: literals }
            } else {
                // Heterogeneous unions render their first branch only.
                tracing::debug!(
                    field = field_name,
                    branches = options.len(),
                    "union of mixed shapes, compiling first branch"
                );
                let label = override_label.or(node.description.as_deref());
                return compile(field_name, &options[0], sources, label);
            }
        }
        NodeKind::Literal { .. } => unsupported(field_name, "literal outside of a union"),
        NodeKind::Object(_) => unsupported(field_name, "nested object"),
        NodeKind::Unknown => unsupported(field_name, "unrecognized schema tag"),
    };

    tracing::trace!(field = field_name, tag = node.tag_name(), "compiled field");
    FieldDescriptor::new(field_name, resolve_label(field_name, node, override_label), control)
}

fn loading_placeholder(field_name: &str, options: &[SelectOption]) -> Control {
    tracing::trace!(field = field_name, "value source loading");
    Control::SelectDynamic {
        options: options.to_vec(),
        loading: true,
    }
}

fn resolve_label(field_name: &str, node: &SchemaNode, override_label: Option<&str>) -> String {
    override_label
        .or(node.description.as_deref())
        .unwrap_or(field_name)
        .to_string()
}

fn text(node: &SchemaNode, numeric: bool) -> Control {
    Control::Text {
        numeric,
        constraints: node.constraints.iter().copied().collect(),
    }
}

fn unsupported(field_name: &str, reason: &str) -> Control {
    tracing::warn!(field = field_name, reason, "no control for schema node");
    Control::Unsupported {
        reason: reason.to_string(),
    }
}

fn options_from_map(values: &IndexMap<String, String>) -> Vec<SelectOption> {
    values
        .iter()
        .map(|(value, label)| SelectOption::new(value.clone(), label.clone()))
        .collect()
}

/// Options of a union made only of literals, `None` if any branch is not a literal
fn literal_options(options: &[SchemaNode]) -> Option<Vec<SelectOption>> {
    options
        .iter()
        .map(|option| match &option.kind {
            NodeKind::Literal { value } => Some(SelectOption::new(
                value.clone(),
                option.description.clone().unwrap_or_else(|| value.clone()),
            )),
            _ => None,
        })
        .collect()
}
