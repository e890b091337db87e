//! Record subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod search;
mod update;

use std::collections::BTreeSet;

use anyhow::Result;
use clap::{Args, Subcommand};

use hubkit_core::{ApiFamily, Record, ResourceType};

use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ObjectsCommand {
    #[command(subcommand)]
    pub command: ObjectsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjectsSubcommand {
    /// List records of a resource type
    List(list::ListArgs),

    /// Fetch a single record
    Get(get::GetArgs),

    /// Create a record
    Create(create::CreateArgs),

    /// Update properties of a record
    Update(update::UpdateArgs),

    /// Delete (archive) a record
    Delete(delete::DeleteArgs),

    /// Search records with filters
    Search(search::SearchArgs),
}

/// Resource type and API family a command operates on.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Resource type (e.g. contacts, deals, companies)
    pub resource: ResourceType,

    /// API family (crm-v3, crm-v4, cms-v3, automation-v4, conversations-v3, marketing-v3, files-v3)
    #[arg(long, default_value = "crm-v3")]
    pub family: ApiFamily,
}

pub async fn handle(cmd: ObjectsCommand, global: &GlobalArgs) -> Result<()> {
    match cmd.command {
        ObjectsSubcommand::List(args) => list::run(args, global).await,
        ObjectsSubcommand::Get(args) => get::run(args, global).await,
        ObjectsSubcommand::Create(args) => create::run(args, global).await,
        ObjectsSubcommand::Update(args) => update::run(args, global).await,
        ObjectsSubcommand::Delete(args) => delete::run(args, global).await,
        ObjectsSubcommand::Search(args) => search::run(args, global).await,
    }
}

/// Print records as rows of `id` plus the given properties.
///
/// Without explicit properties, every property key seen in `records` is
/// used, in sorted order.
fn print_records(records: &[Record], properties: &[String]) {
    let columns: Vec<String> = if properties.is_empty() {
        records
            .iter()
            .flat_map(|r| r.properties.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    } else {
        properties.to_vec()
    };

    let headers: Vec<&str> = std::iter::once("id")
        .chain(columns.iter().map(String::as_str))
        .collect();
    let rows: Vec<Vec<String>> = records.iter().map(|r| r.row(&columns)).collect();

    output::rows(&headers, &rows);
}

/// Print one record as labeled fields.
fn print_record(record: &Record) {
    output::field("id", &record.id);
    if let Some(created_at) = record.created_at {
        output::field("createdAt", &created_at.to_rfc3339());
    }
    if let Some(updated_at) = record.updated_at {
        output::field("updatedAt", &updated_at.to_rfc3339());
    }
    output::field("archived", &record.archived.to_string());
    for (key, value) in &record.properties {
        output::field(key, &value.to_display_string());
    }
}
