//! GraphQL subcommand implementations.

mod query;
mod schema;
mod type_info;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::GlobalArgs;

#[derive(Args, Debug)]
pub struct GraphqlCommand {
    #[command(subcommand)]
    pub command: GraphqlSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GraphqlSubcommand {
    /// Execute a query and print its data
    Query(query::QueryArgs),

    /// List the object and interface types of the schema
    Schema(schema::SchemaArgs),

    /// Show the fields of one schema type
    Type(type_info::TypeArgs),
}

pub async fn handle(cmd: GraphqlCommand, global: &GlobalArgs) -> Result<()> {
    match cmd.command {
        GraphqlSubcommand::Query(args) => query::run(args, global).await,
        GraphqlSubcommand::Schema(args) => schema::run(args, global).await,
        GraphqlSubcommand::Type(args) => type_info::run(args, global).await,
    }
}
