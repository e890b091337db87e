//! Execute a GraphQL query.

use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query text, @path to read it from a file, or - for stdin
    pub query: String,

    /// Variables as a JSON object
    #[arg(long)]
    pub variables: Option<String>,
}

pub async fn run(args: QueryArgs, global: &GlobalArgs) -> Result<()> {
    let query = read_query(&args.query)?;
    let variables = args
        .variables
        .as_deref()
        .map(parse_variables)
        .transpose()?;

    let client = context::client(global)?;
    let response = client
        .graphql()
        .execute(&query, variables.as_ref())
        .await
        .context("Failed to execute query")?;

    if let Some(data) = &response.data {
        output::json_pretty(data)?;
    }

    if response.has_errors() {
        bail!("Query returned errors: {}", response.error_messages());
    }

    Ok(())
}

fn read_query(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut query = String::new();
        std::io::stdin()
            .read_to_string(&mut query)
            .context("Failed to read query from stdin")?;
        Ok(query)
    } else if let Some(path) = arg.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    } else {
        Ok(arg.to_string())
    }
}

fn parse_variables(raw: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(raw).context("Variables are not valid JSON")?;
    if !value.is_object() {
        bail!("Variables must be a JSON object");
    }
    Ok(value)
}
