//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod module;
pub mod pat;
pub mod status;

pub use args::{CredentialArgs, GlobalOptions, ListArgs, OutputFormat, TokenArgs};
pub use context::CommandContext;

/// ado-pat - Azure DevOps Personal Access Token lifecycle management
#[derive(Parser, Debug)]
#[command(name = "ado-pat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "ADO_PAT_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "ADO_PAT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ADO_PAT_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Identity provider host (development/testing)
    #[arg(long, global = true, env = "ADO_PAT_LOGIN_HOST", hide = true)]
    pub login_host: Option<String>,

    /// DevOps token API host (development/testing)
    #[arg(long, global = true, env = "ADO_PAT_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a PAT and print its token
    Create(TokenArgs),

    /// Rename an existing PAT
    Update(TokenArgs),

    /// Revoke a PAT
    Revoke(TokenArgs),

    /// Show a single PAT
    Get(TokenArgs),

    /// List PATs in the organization
    List(ListArgs),

    /// Show resolved configuration without contacting Azure
    Status,

    /// Run as a configuration-management module (JSON args file in, JSON out)
    Module {
        /// Path to the JSON file of module parameters
        args_file: PathBuf,
    },
}
