//! List records command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hubkit_core::ListOptions;

use super::{Target, print_records};
use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: Target,

    /// Maximum number of records per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pagination cursor from a previous page
    #[arg(long)]
    pub after: Option<String>,

    /// Properties to return (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub properties: Vec<String>,

    /// List archived records
    #[arg(long)]
    pub archived: bool,

    /// Follow cursors and fetch every page
    #[arg(long)]
    pub all: bool,

    /// Stop after this many pages (with --all)
    #[arg(long, requires = "all")]
    pub max_pages: Option<usize>,

    /// Print raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, global: &GlobalArgs) -> Result<()> {
    let client = context::client(global)?;
    let resources = client.resources_in(args.target.family);

    let options = ListOptions {
        limit: args.limit,
        after: args.after.clone(),
        properties: args.properties.clone(),
        archived: args.archived.then_some(true),
    };

    if args.all {
        let records = resources
            .list_all(&args.target.resource, options, args.max_pages)
            .await
            .with_context(|| format!("Failed to list {}", args.target.resource))?;

        if args.json {
            return output::json_pretty(&records);
        }
        print_records(&records, &args.properties);
        return Ok(());
    }

    let page = resources
        .list(&args.target.resource, &options)
        .await
        .with_context(|| format!("Failed to list {}", args.target.resource))?;

    if args.json {
        return output::json_pretty(&page);
    }

    if page.results.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
    } else {
        print_records(&page.results, &args.properties);
    }

    if let Some(cursor) = page.next_cursor() {
        eprintln!();
        eprintln!("{}: {}", "Next cursor".dimmed(), cursor);
    }

    Ok(())
}
