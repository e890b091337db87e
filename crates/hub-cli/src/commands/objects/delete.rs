//! Delete record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Target;
use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: Target,

    /// Record id
    pub id: String,
}

pub async fn run(args: DeleteArgs, global: &GlobalArgs) -> Result<()> {
    let client = context::client(global)?;

    client
        .resources_in(args.target.family)
        .delete(&args.target.resource, &args.id)
        .await
        .with_context(|| format!("Failed to delete {} {}", args.target.resource, args.id))?;

    output::success(&format!("Archived {} {}", args.target.resource, args.id));
    Ok(())
}
