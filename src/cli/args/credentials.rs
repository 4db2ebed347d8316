//! Credential and organization arguments
//!
//! Every field can come from a flag or an `ADO_PAT_*` environment variable.
//! Non-secret fields fall back to the config file; secrets fall back to a
//! hidden prompt when stdin is a terminal and are never read from disk.

use clap::Args;
use dialoguer::Password;
use secrecy::SecretString;

use crate::client::models::Credentials;
use crate::config::Config;
use crate::error::{Result, ValidationError};

/// Credentials for the password grant plus the target organization
#[derive(Debug, Clone, Args, Default)]
pub struct CredentialArgs {
    /// Azure AD tenant ID
    #[arg(
        long = "tenant-id",
        alias = "tenant_id",
        global = true,
        env = "ADO_PAT_TENANT_ID",
        hide_env = true
    )]
    pub tenant_id: Option<String>,

    /// Azure AD application (client) ID
    #[arg(
        long = "client-id",
        alias = "client_id",
        global = true,
        env = "ADO_PAT_CLIENT_ID",
        hide_env = true
    )]
    pub client_id: Option<String>,

    /// Azure AD application secret
    #[arg(
        long = "client-secret",
        alias = "client_secret",
        global = true,
        env = "ADO_PAT_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// Azure DevOps username
    #[arg(
        long,
        global = true,
        env = "ADO_PAT_USERNAME",
        hide_env = true
    )]
    pub username: Option<String>,

    /// Azure DevOps password
    #[arg(
        long,
        global = true,
        env = "ADO_PAT_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Azure DevOps organization name
    #[arg(
        long,
        alias = "organization_name",
        global = true,
        env = "ADO_PAT_ORGANIZATION",
        hide_env = true
    )]
    pub organization: Option<String>,
}

fn pick(
    flag: &Option<String>,
    fallback: &Option<String>,
    name: &'static str,
) -> std::result::Result<String, ValidationError> {
    let usable = |v: &&String| !v.trim().is_empty();
    flag.as_ref()
        .filter(usable)
        .or(fallback.as_ref().filter(usable))
        .cloned()
        .ok_or(ValidationError::MissingCredential(name))
}

fn secret(
    flag: &Option<String>,
    name: &'static str,
    prompt: &str,
    interactive: bool,
) -> Result<SecretString> {
    if let Some(value) = flag.as_ref().filter(|v| !v.is_empty()) {
        return Ok(SecretString::new(value.clone()));
    }
    if !interactive {
        return Err(ValidationError::MissingCredential(name).into());
    }

    let value = Password::new().with_prompt(prompt).interact()?;
    Ok(SecretString::new(value))
}

impl CredentialArgs {
    /// Organization from flag/env, then config
    pub fn resolve_organization(&self, config: &Config) -> Result<String> {
        Ok(pick(&self.organization, &config.organization, "organization")?)
    }

    /// Build credentials, prompting for missing secrets when `interactive`
    pub fn resolve(&self, config: &Config, interactive: bool) -> Result<Credentials> {
        let tenant_id = pick(&self.tenant_id, &config.tenant_id, "tenant_id")?;
        let client_id = pick(&self.client_id, &config.client_id, "client_id")?;
        let username = pick(&self.username, &config.username, "username")?;
        let client_secret = secret(
            &self.client_secret,
            "client_secret",
            "Client secret",
            interactive,
        )?;
        let password = secret(&self.password, "password", "Password", interactive)?;

        Ok(Credentials {
            tenant_id,
            client_id,
            client_secret,
            username,
            password,
        })
    }
}
