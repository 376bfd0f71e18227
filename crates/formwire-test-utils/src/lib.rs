//! Testing utilities for formwire workspace
//!
//! Shared schema fixtures, value sources and store builders.

#![allow(missing_docs)]

use formwire_fields::{SelectOption, ValueKind, ValueSource, ValueSources};
use formwire_query::{MemoryLocation, PaginationConfig, QuerySlot, QueryStore};
use formwire_schema::{ConstraintKind, ObjectSchema, SchemaNode};

/// Ticket entity as edited in the ticketing console
pub fn ticket_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("attendee", SchemaNode::string().describe("Attendee"))
        .field(
            "email",
            SchemaNode::string()
                .constrain(ConstraintKind::Email)
                .describe("E-mail")
                .optional(),
        )
        .field("session_id", SchemaNode::string().uuid().describe("Session"))
        .field("quantity", SchemaNode::number().describe("Quantity"))
        .field("paid", SchemaNode::boolean().describe("Paid"))
        .field("purchased_at", SchemaNode::date().describe("Purchased at").nullable())
        .field(
            "status",
            SchemaNode::union([
                SchemaNode::literal("PENDING"),
                SchemaNode::literal("CONFIRMED"),
                SchemaNode::literal("CANCELLED"),
            ])
            .describe("Status"),
        )
}

/// Extra filter fields of the ticket list
pub fn ticket_filter_extra() -> ObjectSchema {
    ObjectSchema::new()
        .field("session", SchemaNode::string().describe("Session"))
        .field(
            "status",
            SchemaNode::enumeration(["PENDING", "CONFIRMED", "CANCELLED"])
                .describe("Status")
                .optional(),
        )
}

/// Sessions as fetched from the backend
pub fn session_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("s1", "Morning"),
        SelectOption::new("s2", "Afternoon"),
        SelectOption::new("s3", "Evening").disabled(),
    ]
}

/// Build value sources from `(field, source)` pairs
pub fn sources<'a>(entries: impl IntoIterator<Item = (&'a str, ValueSource)>) -> ValueSources {
    entries
        .into_iter()
        .map(|(name, source)| (name.to_string(), source))
        .collect()
}

/// Value sources with loaded sessions and a datetime purchase date
pub fn ticket_sources() -> ValueSources {
    sources([
        ("session_id", ValueSource::with_values(session_options())),
        ("session", ValueSource::with_values(session_options())),
        ("purchased_at", ValueSource::of_kind(ValueKind::Datetime)),
    ])
}

/// In-memory store at `query` with `pageIndex`/`pageSize` pagination
pub fn memory_store(
    query: &str,
    slots: impl IntoIterator<Item = QuerySlot>,
) -> QueryStore<MemoryLocation> {
    QueryStore::new(MemoryLocation::from_query(query), slots)
        .with_pagination(PaginationConfig::page_index())
}
