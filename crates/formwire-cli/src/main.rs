use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Edits;

fn cli() -> Command {
    let schema = Arg::new("schema")
        .long("schema")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Object schema as JSON");
    let url = Arg::new("url")
        .long("url")
        .required(true)
        .help("Absolute URL of the list page");

    Command::new("formwire")
        .version(formwire_core::VERSION)
        .about("Compile schemas into form controls and edit URL filter state")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding sort prefix and pagination keys"),
        )
        .subcommand(
            Command::new("fields")
                .about("Print field descriptors as JSON")
                .arg(schema.clone())
                .arg(
                    Arg::new("sources")
                        .long("sources")
                        .value_parser(value_parser!(PathBuf))
                        .help("Value sources as JSON, keyed by field name"),
                )
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .action(ArgAction::SetTrue)
                        .help("Treat the schema as extra filter fields"),
                ),
        )
        .subcommand(
            Command::new("state")
                .about("Print filter values and sort states of a URL")
                .arg(url.clone())
                .arg(schema.clone())
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .action(ArgAction::Append)
                        .help("Sortable column to report"),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply filter and sort edits to a URL and print the result")
                .arg(url)
                .arg(schema)
                .arg(
                    Arg::new("set")
                        .long("set")
                        .action(ArgAction::Append)
                        .value_parser(commands::parse_pair)
                        .help("Set a query key, as key=value"),
                )
                .arg(
                    Arg::new("unset")
                        .long("unset")
                        .action(ArgAction::Append)
                        .help("Remove a query key"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .action(ArgAction::Append)
                        .help("Click the sort header of a column"),
                )
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .action(ArgAction::SetTrue)
                        .help("Clear every filter first"),
                ),
        )
}

fn path_arg(args: &ArgMatches, id: &str) -> Result<PathBuf> {
    args.get_one::<PathBuf>(id)
        .cloned()
        .with_context(|| format!("missing --{id}"))
}

fn string_arg(args: &ArgMatches, id: &str) -> Result<String> {
    args.get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing --{id}"))
}

fn strings(args: &ArgMatches, id: &str) -> Vec<String> {
    args.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no subcommand given");
    };
    let config = commands::load_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    let output = match name {
        "fields" => {
            let schema = commands::read_schema(&path_arg(args, "schema")?)?;
            let sources = match args.get_one::<PathBuf>("sources") {
                Some(path) => commands::read_sources(path)?,
                None => formwire_fields::ValueSources::new(),
            };
            commands::fields(&schema, &sources, args.get_flag("filter"))?
        }
        "state" => {
            let schema = commands::read_schema(&path_arg(args, "schema")?)?;
            commands::state(
                &string_arg(args, "url")?,
                &schema,
                &strings(args, "sort"),
                &config,
            )?
        }
        "apply" => {
            let schema = commands::read_schema(&path_arg(args, "schema")?)?;
            let edits = Edits {
                set: args
                    .get_many::<(String, String)>("set")
                    .map(|pairs| pairs.cloned().collect())
                    .unwrap_or_default(),
                unset: strings(args, "unset"),
                sort: strings(args, "sort"),
                clear: args.get_flag("clear"),
            };
            commands::apply(&string_arg(args, "url")?, &schema, &edits, &config)?
        }
        other => anyhow::bail!("unknown subcommand: {other}"),
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn apply_collects_repeated_edits() {
        let matches = cli()
            .try_get_matches_from([
                "formwire",
                "apply",
                "--url",
                "https://admin.example.com/t",
                "--schema",
                "filters.json",
                "--set",
                "filter=john",
                "--set",
                "session=s1",
                "--unset",
                "status",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let sets: Vec<_> = args.get_many::<(String, String)>("set").unwrap().cloned().collect();
        assert_eq!(
            sets,
            vec![
                ("filter".to_string(), "john".to_string()),
                ("session".to_string(), "s1".to_string())
            ]
        );
        assert_eq!(strings(args, "unset"), vec!["status"]);
        assert!(!args.get_flag("clear"));
    }

    #[test]
    fn malformed_pair_is_rejected() {
        let result = cli().try_get_matches_from([
            "formwire",
            "apply",
            "--url",
            "https://admin.example.com/t",
            "--schema",
            "filters.json",
            "--set",
            "filter",
        ]);
        assert!(result.is_err());
    }
}
