//! Show the fields of a schema type.

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct TypeArgs {
    /// Type name, e.g. Query
    pub name: String,
}

pub async fn run(args: TypeArgs, global: &GlobalArgs) -> Result<()> {
    let client = context::client(global)?;
    let schema = client
        .graphql()
        .introspect_schema()
        .await
        .context("Failed to introspect schema")?;

    let full_type = schema
        .find_type(&args.name)
        .ok_or_else(|| anyhow!("Type '{}' not found in schema", args.name))?;

    if let Some(description) = full_type.description.as_deref() {
        println!("{}", description);
        println!();
    }

    let rows: Vec<Vec<String>> = if full_type.fields.is_empty() {
        full_type
            .input_fields
            .iter()
            .map(|f| vec![f.name.clone(), f.type_ref.to_string()])
            .collect()
    } else {
        full_type
            .fields
            .iter()
            .map(|f| vec![f.name.clone(), f.type_name()])
            .collect()
    };

    output::rows(&["field", "type"], &rows);
    Ok(())
}
