//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::graphql::GraphqlCommand;
use crate::commands::objects::ObjectsCommand;

/// CLI for CRM/CMS REST and GraphQL APIs.
#[derive(Parser, Debug)]
#[command(name = "hub")]
#[command(author, version = env!("HUB_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API base URL
    #[arg(
        long,
        env = "HUB_BASE_URL",
        default_value = hubkit_core::types::DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Access token (defaults to the HUB_ACCESS_TOKEN environment variable)
    #[arg(long, env = "HUB_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record operations on any resource type
    Objects(ObjectsCommand),

    /// GraphQL queries and schema exploration
    Graphql(GraphqlCommand),
}
