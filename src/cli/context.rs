//! Command execution context
//!
//! Loads config, resolves credentials and the organization, and builds the
//! API client, so PAT handlers only deal with the operation itself.

use std::io::IsTerminal;

use crate::cli::OutputFormat;
use crate::cli::args::{CredentialArgs, GlobalOptions};
use crate::client::models::Credentials;
use crate::client::{AzureDevOpsClient, DEFAULT_API_HOST, DEFAULT_LOGIN_HOST};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution: client, resolved credentials, and output options.
pub struct CommandContext {
    /// API client bound to the resolved hosts
    pub client: AzureDevOpsClient,
    /// Resolved password-grant credentials
    pub credentials: Credentials,
    /// Target Azure DevOps organization
    pub organization: String,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Performs no network I/O. May prompt for missing secrets when stdin is
    /// a terminal.
    ///
    /// # Errors
    /// Returns error if the config file is invalid or a required credential
    /// cannot be resolved.
    pub fn new(opts: &GlobalOptions, credentials: &CredentialArgs) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let organization = credentials.resolve_organization(&config)?;
        let interactive = std::io::stdin().is_terminal();
        let resolved = credentials.resolve(&config, interactive)?;
        let client = build_client(opts, &config)?;

        Ok(Self {
            client,
            credentials: resolved,
            organization,
            format: opts.format,
        })
    }
}

/// Login and API hosts: flag/env override, then config, then the public endpoints
pub fn resolve_hosts<'a>(opts: &'a GlobalOptions, config: &'a Config) -> (&'a str, &'a str) {
    let login_host = opts
        .login_host_ref()
        .or(config.login_host.as_deref())
        .unwrap_or(DEFAULT_LOGIN_HOST);
    let api_host = opts
        .api_host_ref()
        .or(config.api_host.as_deref())
        .unwrap_or(DEFAULT_API_HOST);
    (login_host, api_host)
}

/// Build a client bound to the resolved hosts
pub fn build_client(opts: &GlobalOptions, config: &Config) -> Result<AzureDevOpsClient> {
    let (login_host, api_host) = resolve_hosts(opts, config);
    AzureDevOpsClient::with_hosts(login_host, api_host)
}
