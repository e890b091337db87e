//! List schema root types.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Print the full introspected schema as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SchemaArgs, global: &GlobalArgs) -> Result<()> {
    let client = context::client(global)?;
    let schema = client
        .graphql()
        .introspect_schema()
        .await
        .context("Failed to introspect schema")?;

    if args.json {
        return output::json_pretty(&schema);
    }

    if let Some(query) = schema.query_type_name() {
        output::field("query", query);
    }
    if let Some(mutation) = schema.mutation_type_name() {
        output::field("mutation", mutation);
    }
    println!();

    let rows: Vec<Vec<String>> = schema
        .root_types()
        .iter()
        .map(|t| vec![t.name().to_string(), t.fields.len().to_string()])
        .collect();

    if rows.is_empty() {
        eprintln!("{}", "Schema has no object types.".dimmed());
    } else {
        output::rows(&["type", "fields"], &rows);
    }

    Ok(())
}
