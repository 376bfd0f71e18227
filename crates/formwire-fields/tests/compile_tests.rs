//! Compilation behaviour over realistic console schemas.

use formwire_fields::{
    compile, filter_fields, walk, Control, ControlTag, DateKind, FieldDescriptor, SelectOption,
    ValueSource, ValueSources,
};
use formwire_schema::{ObjectSchema, SchemaNode};
use formwire_test_utils::{session_options, sources, ticket_filter_extra, ticket_schema, ticket_sources};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn text(field: &str, label: &str, numeric: bool) -> FieldDescriptor {
    FieldDescriptor::new(
        field,
        label,
        Control::Text {
            numeric,
            constraints: vec![],
        },
    )
}

/// `{name: string.optional().describe("Name"), age: number}` with no sources.
#[test]
fn name_and_age_scenario() {
    let schema = ObjectSchema::new()
        .field("name", SchemaNode::string().optional().describe("Name"))
        .field("age", SchemaNode::number());

    let out = walk(&schema, &ValueSources::new());
    assert_eq!(out, vec![text("name", "Name", false), text("age", "age", true)]);
}

/// A union of literals collapses into an enum-like select.
#[test]
fn status_union_scenario() {
    let schema = ObjectSchema::new().field(
        "status",
        SchemaNode::union([SchemaNode::literal("A"), SchemaNode::literal("B")]),
    );
    let out = walk(&schema, &ValueSources::new());
    assert_eq!(
        out,
        vec![FieldDescriptor::new(
            "status",
            "status",
            Control::SelectStatic {
                options: vec![SelectOption::plain("A"), SelectOption::plain("B")],
            },
        )]
    );
}

#[test]
fn ticket_form_controls() {
    let out = walk(&ticket_schema(), &ticket_sources());
    let tags: Vec<_> = out.iter().map(|d| (d.field_name.as_str(), d.tag())).collect();
    assert_eq!(
        tags,
        vec![
            ("attendee", ControlTag::Text),
            ("email", ControlTag::Text),
            ("session_id", ControlTag::SelectStatic),
            ("quantity", ControlTag::Text),
            ("paid", ControlTag::Boolean),
            ("purchased_at", ControlTag::Date),
            ("status", ControlTag::SelectStatic),
        ]
    );
    assert_eq!(out[2].options(), session_options().as_slice());
    assert_eq!(out[5].control, Control::Date { kind: DateKind::Datetime });
    assert_eq!(out[1].label, "E-mail");
}

#[test]
fn sources_arriving_later_only_change_that_field() {
    let schema = ticket_schema();
    let loading = sources([("session_id", ValueSource::loading())]);
    let before = walk(&schema, &loading);
    let after = walk(&schema, &ticket_sources());

    assert!(before[2].is_loading());
    assert_eq!(after[2].tag(), ControlTag::SelectStatic);
    assert_eq!(before[0], after[0]);
    assert_eq!(before[3], after[3]);
}

#[test]
fn filter_bar_controls() {
    let out = filter_fields(Some(&ticket_filter_extra()), &ticket_sources());
    let names: Vec<_> = out.iter().map(|d| d.field_name.as_str()).collect();
    assert_eq!(names, vec!["filter", "session", "status"]);
    assert_eq!(out[0].label, "Search");
    assert_eq!(out[1].tag(), ControlTag::SelectStatic);
    assert_eq!(out[2].options().len(), 3);
}

fn wrapped(depth: usize, nullable_first: bool) -> SchemaNode {
    let mut node = SchemaNode::string().describe("Label");
    for i in 0..depth {
        node = if (i % 2 == 0) == nullable_first {
            node.nullable()
        } else {
            node.optional()
        };
    }
    node
}

proptest! {
    #[test]
    fn walk_is_deterministic(seed in 0usize..6) {
        let schema = ticket_schema();
        let srcs = if seed % 2 == 0 { ticket_sources() } else { ValueSources::new() };
        prop_assert_eq!(walk(&schema, &srcs), walk(&schema, &srcs));
    }

    #[test]
    fn order_follows_declaration_not_sources(
        names in proptest::collection::vec("[a-z]{1,8}", 1..8),
        reverse in any::<bool>(),
    ) {
        let mut unique = names.clone();
        unique.dedup();
        let schema: ObjectSchema = unique
            .iter()
            .map(|n| (n.clone(), SchemaNode::string()))
            .collect();

        let mut keys: Vec<_> = schema.names().map(str::to_string).collect();
        if reverse {
            keys.reverse();
        }
        let srcs: ValueSources = keys
            .into_iter()
            .map(|k| (k, ValueSource::with_values([SelectOption::plain("x")])))
            .collect();

        let out = walk(&schema, &srcs);
        let got: Vec<_> = out.iter().map(|d| d.field_name.clone()).collect();
        let expected: Vec<_> = schema.names().map(str::to_string).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(out.len(), schema.len());
    }

    #[test]
    fn unwrapping_is_transparent(depth in 0usize..5, nullable_first in any::<bool>()) {
        let plain = compile("f", &SchemaNode::string().describe("Label"), &ValueSources::new(), None);
        let layered = compile("f", &wrapped(depth, nullable_first), &ValueSources::new(), None);
        prop_assert_eq!(plain, layered);
    }
}
