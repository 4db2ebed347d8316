//! Common CLI types shared across commands

use clap::Args;

use crate::client::models::{DisplayFilter, ListFilter};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized, raw token only for create
    #[default]
    Pretty,
    /// JSON format - API bodies exactly as returned
    Json,
}

/// Identifiers for a single PAT.
///
/// Both are optional at parse time; which ones an operation requires is
/// checked before any request is made.
#[derive(Debug, Clone, Args, Default)]
pub struct TokenArgs {
    /// Display name for the PAT
    #[arg(long = "token-name", alias = "token_name")]
    pub token_name: Option<String>,

    /// Authorization ID of an existing PAT
    #[arg(long = "token-id", alias = "token_id")]
    pub token_id: Option<String>,
}

/// List query options
#[derive(Debug, Clone, Args, Default)]
pub struct ListArgs {
    /// Which PATs to include
    #[arg(long, value_enum)]
    pub filter: Option<DisplayFilter>,

    /// Continuation token from a previous page
    #[arg(long = "continuation-token")]
    pub continuation_token: Option<String>,
}

impl From<&ListArgs> for ListFilter {
    fn from(args: &ListArgs) -> Self {
        ListFilter {
            display_filter: args.filter,
            continuation_token: args.continuation_token.clone(),
        }
    }
}
