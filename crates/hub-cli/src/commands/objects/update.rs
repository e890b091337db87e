//! Update record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hubkit_core::property::parse_assignments;

use super::{Target, print_record};
use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub target: Target,

    /// Record id
    pub id: String,

    /// Property assignment (can be repeated); an empty value clears the property
    #[arg(long = "set", value_name = "KEY=VALUE", required = true)]
    pub set: Vec<String>,

    /// Print raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: UpdateArgs, global: &GlobalArgs) -> Result<()> {
    let properties = parse_assignments(&args.set)?;
    let client = context::client(global)?;

    let record = client
        .resources_in(args.target.family)
        .update(&args.target.resource, &args.id, &properties)
        .await
        .with_context(|| format!("Failed to update {} {}", args.target.resource, args.id))?;

    if args.json {
        return output::json_pretty(&record);
    }

    output::success(&format!("Updated {} {}", args.target.resource, record.id));
    print_record(&record);
    Ok(())
}
