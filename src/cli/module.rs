//! Configuration-management module surface
//!
//! Implements the Ansible binary-module contract: the only argument is the
//! path to a JSON file of module parameters, and exactly one JSON object is
//! written to stdout. Failures are reported in that object (`failed: true`)
//! rather than on stderr.

use std::path::Path;

use log::{debug, warn};
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::cli::args::GlobalOptions;
use crate::cli::context::build_client;
use crate::client::models::{Credentials, ListFilter, PatAction};
use crate::client::{PatCommand, PatOutcome, authenticate_and_execute};
use crate::config::Config;
use crate::error::{Error, Result};

fn default_action() -> PatAction {
    PatAction::Create
}

/// Module parameters. Unknown keys (Ansible's `_ansible_*` internals) are ignored.
#[derive(Debug, Deserialize)]
pub struct ModuleArgs {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub username: String,
    pub password: SecretString,
    pub organization_name: String,

    #[serde(default)]
    pub token_name: Option<String>,

    #[serde(default)]
    pub token_id: Option<String>,

    #[serde(default = "default_action")]
    pub action: PatAction,

    #[serde(default, rename = "_ansible_check_mode")]
    pub check_mode: bool,
}

impl ModuleArgs {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn into_parts(self) -> (Credentials, String) {
        (
            Credentials {
                tenant_id: self.tenant_id,
                client_id: self.client_id,
                client_secret: self.client_secret,
                username: self.username,
                password: self.password,
            },
            self.organization_name,
        )
    }
}

/// Result object for a successful run
pub fn success(outcome: PatOutcome) -> Value {
    let changed = outcome.changed();
    let (message, pat_token) = match outcome {
        PatOutcome::Created(created) => {
            let token = created.token().to_string();
            let mut descriptor = created.descriptor;
            // The raw value is reported once, under pat_token
            if let Some(fields) = descriptor.as_object_mut() {
                fields.remove("token");
            }
            (descriptor, token)
        }
        PatOutcome::Updated { .. } => (json!("PAT updated successfully"), String::new()),
        PatOutcome::Revoked { .. } => (json!("PAT revoked successfully"), String::new()),
        PatOutcome::Fetched(body) | PatOutcome::Listed(body) => (body, String::new()),
    };

    json!({
        "changed": changed,
        "message": message,
        "pat_token": pat_token,
    })
}

/// Result object for a failed run
pub fn failure(msg: &str) -> Value {
    json!({
        "failed": true,
        "changed": false,
        "msg": msg,
    })
}

/// Result object when check mode skips a mutating action
fn check_mode_result(command: &PatCommand) -> Value {
    let message = match command.token_id() {
        Some(id) => format!("Would {} PAT {}", command.action(), id),
        None => format!("Would {} PAT", command.action()),
    };
    json!({
        "changed": true,
        "message": message,
        "pat_token": "",
    })
}

async fn execute_module(args_file: &Path, opts: &GlobalOptions) -> Result<Value> {
    let args = ModuleArgs::from_file(args_file)?;
    let command = PatCommand::new(
        args.action,
        args.token_name.clone(),
        args.token_id.clone(),
        ListFilter::default(),
    )?;

    if args.check_mode && command.action().is_mutating() {
        debug!("Check mode: skipping {}", command.action());
        return Ok(check_mode_result(&command));
    }

    let config = Config::load_at(opts.config_ref())?;
    let client = build_client(opts, &config)?;
    let (credentials, organization) = args.into_parts();

    let outcome = authenticate_and_execute(&client, &credentials, &organization, &command).await?;
    Ok(success(outcome))
}

/// Run as a module and return the process exit code
pub async fn run(args_file: &Path, opts: &GlobalOptions) -> i32 {
    let (result, code) = match execute_module(args_file, opts).await {
        Ok(result) => (result, 0),
        Err(err) => {
            warn!("Module run failed: {}", err);
            let mut result = failure(&err.to_string());
            if let Error::Api(api) = &err
                && let Some(status) = api.status()
            {
                result["status"] = json!(status);
            }
            (result, 1)
        }
    };

    println!("{}", result);
    code
}
