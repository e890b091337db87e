//! Get record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::{Target, print_record};
use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: Target,

    /// Record id
    pub id: String,

    /// Properties to return (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub properties: Vec<String>,

    /// Print raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, global: &GlobalArgs) -> Result<()> {
    let client = context::client(global)?;

    let record = client
        .resources_in(args.target.family)
        .get(&args.target.resource, &args.id, &args.properties)
        .await
        .with_context(|| format!("Failed to get {} {}", args.target.resource, args.id))?;

    if args.json {
        output::json_pretty(&record)
    } else {
        print_record(&record);
        Ok(())
    }
}
