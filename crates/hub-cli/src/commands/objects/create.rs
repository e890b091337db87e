//! Create record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hubkit_core::property::parse_assignments;

use super::{Target, print_record};
use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub target: Target,

    /// Property assignment (can be repeated), e.g. --set email=a@example.com
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Print raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: CreateArgs, global: &GlobalArgs) -> Result<()> {
    let properties = parse_assignments(&args.set)?;
    let client = context::client(global)?;

    let record = client
        .resources_in(args.target.family)
        .create(&args.target.resource, &properties)
        .await
        .with_context(|| format!("Failed to create {}", args.target.resource))?;

    if args.json {
        return output::json_pretty(&record);
    }

    output::success(&format!("Created {} {}", args.target.resource, record.id));
    print_record(&record);
    Ok(())
}
