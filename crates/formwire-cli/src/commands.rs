//! Subcommand implementations
//!
//! Each command returns its printable output so it can be tested without a
//! terminal.

use anyhow::{Context, Result};
use formwire_core::{ConsoleConfig, FilterBar};
use formwire_fields::{filter_fields, walk, ValueSources};
use formwire_query::{active_sorts, Location, QueryStore, UrlLocation};
use formwire_schema::ObjectSchema;
use serde_json::json;
use std::path::Path;

/// Edits requested by `apply`
#[derive(Debug, Default)]
pub(crate) struct Edits {
    pub(crate) set: Vec<(String, String)>,
    pub(crate) unset: Vec<String>,
    pub(crate) sort: Vec<String>,
    pub(crate) clear: bool,
}

/// Parse a `key=value` argument; the value may be empty
pub(crate) fn parse_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub(crate) fn parse_config(source: &str) -> Result<ConsoleConfig> {
    toml::from_str(source).context("invalid console configuration")
}

/// Configuration from `path`, or the defaults
pub(crate) fn load_config(path: Option<&Path>) -> Result<ConsoleConfig> {
    let Some(path) = path else {
        return Ok(ConsoleConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse_config(&source)?;
    tracing::debug!(path = %path.display(), sort_prefix = %config.sort_prefix, "loaded config");
    Ok(config)
}

pub(crate) fn read_schema(path: &Path) -> Result<ObjectSchema> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    ObjectSchema::from_json(&source).with_context(|| format!("invalid schema {}", path.display()))
}

pub(crate) fn read_sources(path: &Path) -> Result<ValueSources> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read value sources {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("invalid value sources {}", path.display()))
}

/// Descriptors of `schema`, or of the filter bar it extends
pub(crate) fn fields(schema: &ObjectSchema, sources: &ValueSources, filter: bool) -> Result<String> {
    let descriptors = if filter {
        filter_fields(Some(schema), sources)
    } else {
        walk(schema, sources)
    };
    Ok(serde_json::to_string_pretty(&descriptors)?)
}

fn open(
    url: &str,
    schema: &ObjectSchema,
    sorts: &[String],
    config: &ConsoleConfig,
) -> Result<QueryStore<UrlLocation>> {
    let location = UrlLocation::parse(url).with_context(|| format!("invalid url '{url}'"))?;
    let mut store = FilterBar::new(Some(schema)).store(location, config);
    for column in sorts {
        store.register(config.server_sort(column.as_str()).slot());
    }
    Ok(store)
}

/// Filter values and sort states read from `url`
pub(crate) fn state(
    url: &str,
    schema: &ObjectSchema,
    sorts: &[String],
    config: &ConsoleConfig,
) -> Result<String> {
    let store = open(url, schema, sorts, config)?;
    let columns: Vec<_> = sorts.iter().map(|c| config.server_sort(c.as_str())).collect();
    let directions: serde_json::Map<_, _> = columns
        .iter()
        .map(|sort| (sort.column().to_string(), json!(sort.current(&store))))
        .collect();
    let report = json!({
        "values": store.values(),
        "sorts": directions,
        "active_sorts": active_sorts(&store, &columns).len(),
        "active_filters": store.has_active_filters(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// URL after applying `edits` to `url`
///
/// Clearing, key edits and each sort click are separate history steps, in
/// that order.
pub(crate) fn apply(
    url: &str,
    schema: &ObjectSchema,
    edits: &Edits,
    config: &ConsoleConfig,
) -> Result<String> {
    let mut store = open(url, schema, &edits.sort, config)?;
    if edits.clear {
        store.clear_filters();
    }
    let partial = edits
        .set
        .iter()
        .map(|(key, value)| (key.clone(), Some(value.clone())))
        .chain(edits.unset.iter().map(|key| (key.clone(), None)));
    store.set_many(partial);
    for column in &edits.sort {
        let direction = config.server_sort(column.as_str()).click(&mut store);
        tracing::info!(column = %column, %direction, "sorted");
    }
    Ok(store.location().href())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwire_query::PaginationConfig;
    use formwire_schema::SchemaNode;
    use pretty_assertions::assert_eq;

    const URL: &str = "https://admin.example.com/tickets";

    fn extra() -> ObjectSchema {
        ObjectSchema::new().field("session", SchemaNode::string())
    }

    #[test]
    fn pair_parsing() {
        assert_eq!(parse_pair("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert_eq!(parse_pair("q="), Ok(("q".to_string(), String::new())));
        assert!(parse_pair("q").is_err());
        assert!(parse_pair("=x").is_err());
    }

    #[test]
    fn config_from_toml() {
        let config = parse_config(
            r#"
            sort_prefix = "sort."

            [pagination]
            index_key = "p.page"
            size_key = "p.pageSize"
            "#,
        )
        .unwrap();
        assert_eq!(config.sort_prefix, "sort.");
        assert_eq!(config.pagination, PaginationConfig::prefixed());
        assert_eq!(parse_config("").unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn apply_writes_filters_and_page() {
        let edits = Edits {
            set: vec![
                ("filter".to_string(), "john".to_string()),
                ("session".to_string(), "s1".to_string()),
            ],
            ..Edits::default()
        };
        let href = apply(URL, &extra(), &edits, &ConsoleConfig::default()).unwrap();
        assert_eq!(href, format!("{URL}?filter=john&session=s1&pageIndex=1"));
    }

    #[test]
    fn apply_clear_and_sort() {
        let edits = Edits {
            sort: vec!["name".to_string()],
            clear: true,
            ..Edits::default()
        };
        let href = apply(
            &format!("{URL}?filter=x&pageIndex=3"),
            &extra(),
            &edits,
            &ConsoleConfig::default(),
        )
        .unwrap();
        assert_eq!(href, format!("{URL}?pageIndex=1&ob.name=asc"));
    }

    #[test]
    fn state_reports_values_and_sorts() {
        let out = state(
            &format!("{URL}?session=s2&ob.name=desc"),
            &extra(),
            &["name".to_string(), "total".to_string()],
            &ConsoleConfig::default(),
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["values"]["session"], "s2");
        assert_eq!(report["values"]["filter"], "");
        assert_eq!(report["sorts"]["name"], "desc");
        assert_eq!(report["sorts"]["total"], "none");
        assert_eq!(report["active_sorts"], 1);
        assert_eq!(report["active_filters"], true);
    }

    #[test]
    fn fields_in_filter_mode_start_with_search() {
        let out = fields(&extra(), &ValueSources::new(), true).unwrap();
        let descriptors: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(descriptors[0]["field_name"], "filter");
        assert_eq!(descriptors[0]["label"], "Search");
        assert_eq!(descriptors[1]["tag"], "text");
    }

    #[test]
    fn files_are_loaded_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = dir.path().join("filters.json");
        std::fs::write(
            &schema_path,
            r#"{"tag":"object","fields":{"session":{"tag":"string","description":"Session"}}}"#,
        )
        .unwrap();
        let schema = read_schema(&schema_path).unwrap();
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["session"]);

        let config_path = dir.path().join("console.toml");
        std::fs::write(&config_path, "sort_prefix = \"s.\"\n").unwrap();
        assert_eq!(load_config(Some(config_path.as_path())).unwrap().sort_prefix, "s.");
        assert_eq!(load_config(None).unwrap(), ConsoleConfig::default());

        let missing = read_schema(&dir.path().join("absent.json")).unwrap_err();
        assert!(missing.to_string().starts_with("failed to read schema"));
    }

    #[test]
    fn invalid_url_is_reported() {
        let err = apply("not a url", &extra(), &Edits::default(), &ConsoleConfig::default());
        assert!(err.unwrap_err().to_string().contains("invalid url"));
    }
}
