//! PAT command implementations

use colored::Colorize;
use log::debug;
use serde_json::{Value, json};

use crate::cli::args::{CredentialArgs, GlobalOptions};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::PatDescriptor;
use crate::client::{PatCommand, PatOutcome, authenticate_and_execute};
use crate::error::Result;
use crate::models::{PatDetail, PatDisplay};
use crate::output::json::format_json;
use crate::output::table;

/// Authenticate, run one PAT command, and print the result.
///
/// The command is already validated, so a missing identifier never reaches
/// the network.
pub async fn run(
    opts: &GlobalOptions,
    credentials: &CredentialArgs,
    command: PatCommand,
) -> Result<()> {
    let ctx = CommandContext::new(opts, credentials)?;
    debug!(
        "Running {} against organization {}",
        command.action(),
        ctx.organization
    );

    let outcome =
        authenticate_and_execute(&ctx.client, &ctx.credentials, &ctx.organization, &command)
            .await?;

    println!("{}", render(&outcome, ctx.format)?);
    Ok(())
}

/// Render an outcome for stdout
pub fn render(outcome: &PatOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(outcome),
        OutputFormat::Pretty => Ok(render_pretty(outcome)),
    }
}

fn render_json(outcome: &PatOutcome) -> Result<String> {
    let output = match outcome {
        PatOutcome::Created(created) => format_json(&created.descriptor)?,
        PatOutcome::Updated { body, .. } => format_json(body)?,
        PatOutcome::Revoked { authorization_id } => format_json(&json!({
            "authorizationId": authorization_id,
            "revoked": true
        }))?,
        PatOutcome::Fetched(body) | PatOutcome::Listed(body) => format_json(body)?,
    };
    Ok(output)
}

fn render_pretty(outcome: &PatOutcome) -> String {
    match outcome {
        // Raw token only, so `$(ado-pat create ...)` captures it cleanly
        PatOutcome::Created(created) => created.token().to_string(),
        PatOutcome::Updated {
            authorization_id,
            body,
        } => {
            let name = PatDescriptor::single_from(body).and_then(|d| d.display_name);
            match name {
                Some(name) => format!(
                    "{} Updated PAT {} (now '{}')",
                    "✓".green(),
                    authorization_id,
                    name
                ),
                None => format!("{} Updated PAT {}", "✓".green(), authorization_id),
            }
        }
        PatOutcome::Revoked { authorization_id } => {
            format!("{} Revoked PAT {}", "✓".green(), authorization_id)
        }
        PatOutcome::Fetched(body) => match PatDescriptor::single_from(body) {
            Some(pat) => PatDetail::from(&pat).render(),
            None => pretty_value(body),
        },
        PatOutcome::Listed(body) => render_list(body),
    }
}

fn render_list(body: &Value) -> String {
    let rows: Vec<PatDisplay> = PatDescriptor::list_from(body)
        .iter()
        .map(PatDisplay::from)
        .collect();

    let mut output = table::format_table(&rows, "No personal access tokens found.");

    let continuation = body
        .get("continuationToken")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty());
    if let Some(token) = continuation {
        output.push_str(&format!(
            "\n{}",
            format!("More results available: --continuation-token {}", token).dimmed()
        ));
    }

    output
}

fn pretty_value(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
