//! Status command implementation

use colored::Colorize;

use crate::cli::args::{CredentialArgs, GlobalOptions};
use crate::cli::context::resolve_hosts;
use crate::config::Config;
use crate::error::Result;

/// Where a resolved value came from
fn source(flag: &Option<String>, config: &Option<String>) -> Option<&'static str> {
    if flag.as_deref().is_some_and(|v| !v.is_empty()) {
        Some("flag/env")
    } else if config.is_some() {
        Some("config")
    } else {
        None
    }
}

fn report(label: &str, value: Option<&'static str>) {
    match value {
        Some(from) => println!("{} {} ({})", "✓".green(), label, from.dimmed()),
        None => println!("{} {} not set", "○".dimmed(), label),
    }
}

/// Show configuration status. Makes no network calls and never prints secrets.
pub fn run(opts: &GlobalOptions, credentials: &CredentialArgs) -> Result<()> {
    println!("{}\n", "ado-pat Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    let config = Config::load_at(opts.config_ref())?;
    println!();

    report("Tenant ID", source(&credentials.tenant_id, &config.tenant_id));
    report("Client ID", source(&credentials.client_id, &config.client_id));
    report("Username", source(&credentials.username, &config.username));
    report(
        "Client secret",
        source(&credentials.client_secret, &None),
    );
    report("Password", source(&credentials.password, &None));

    let organization = credentials
        .organization
        .as_deref()
        .or(config.organization.as_deref());
    match organization {
        Some(org) => println!("{} Organization: {}", "✓".green(), org),
        None => println!("{} No organization set", "○".dimmed()),
    }

    println!();
    let (login_host, api_host) = resolve_hosts(opts, &config);
    println!("Login host: {}", login_host);
    println!("API host:   {}", api_host);

    Ok(())
}
