//! Validated PAT operations and their dispatch
//!
//! Both the CLI and the module surface go through here: raw inputs become a
//! [`PatCommand`] (rejecting missing identifiers before any network call),
//! then [`execute`] performs exactly one API call.

use log::debug;
use serde_json::Value;

use super::api::{AuthApi, PatApi};
use super::models::{AccessToken, CreatedPat, Credentials, ListFilter, PatAction};
use crate::error::{Result, ValidationError};

/// A PAT operation with every identifier it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatCommand {
    Create {
        display_name: String,
    },
    Update {
        authorization_id: String,
        display_name: String,
    },
    Revoke {
        authorization_id: String,
    },
    Get {
        authorization_id: String,
    },
    List {
        filter: ListFilter,
    },
}

/// Treat blank strings the same as absent ones
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PatCommand {
    /// Validate raw inputs for `action`.
    ///
    /// Token name is required for create and update; token ID for get,
    /// update and revoke. Inputs an action does not use are ignored.
    pub fn new(
        action: PatAction,
        token_name: Option<String>,
        token_id: Option<String>,
        filter: ListFilter,
    ) -> std::result::Result<Self, ValidationError> {
        let token_name = present(token_name);
        let token_id = present(token_id);

        let require_name =
            |name: Option<String>| name.ok_or(ValidationError::MissingTokenName(action));
        let require_id = |id: Option<String>| id.ok_or(ValidationError::MissingTokenId(action));

        match action {
            PatAction::Create => Ok(PatCommand::Create {
                display_name: require_name(token_name)?,
            }),
            PatAction::Update => {
                let authorization_id = require_id(token_id)?;
                Ok(PatCommand::Update {
                    authorization_id,
                    display_name: require_name(token_name)?,
                })
            }
            PatAction::Revoke => Ok(PatCommand::Revoke {
                authorization_id: require_id(token_id)?,
            }),
            PatAction::Get => Ok(PatCommand::Get {
                authorization_id: require_id(token_id)?,
            }),
            PatAction::List => Ok(PatCommand::List { filter }),
        }
    }

    pub fn action(&self) -> PatAction {
        match self {
            PatCommand::Create { .. } => PatAction::Create,
            PatCommand::Update { .. } => PatAction::Update,
            PatCommand::Revoke { .. } => PatAction::Revoke,
            PatCommand::Get { .. } => PatAction::Get,
            PatCommand::List { .. } => PatAction::List,
        }
    }

    /// Authorization ID the command targets, if any
    pub fn token_id(&self) -> Option<&str> {
        match self {
            PatCommand::Update {
                authorization_id, ..
            }
            | PatCommand::Revoke { authorization_id }
            | PatCommand::Get { authorization_id } => Some(authorization_id),
            PatCommand::Create { .. } | PatCommand::List { .. } => None,
        }
    }
}

/// Result of a successful PAT operation
#[derive(Debug)]
pub enum PatOutcome {
    Created(CreatedPat),
    Updated {
        authorization_id: String,
        body: Value,
    },
    Revoked {
        authorization_id: String,
    },
    Fetched(Value),
    Listed(Value),
}

impl PatOutcome {
    /// Whether server-side state was changed
    pub fn changed(&self) -> bool {
        matches!(
            self,
            PatOutcome::Created(_) | PatOutcome::Updated { .. } | PatOutcome::Revoked { .. }
        )
    }
}

/// Run one PAT command with an already acquired access token
pub async fn execute<A>(
    api: &A,
    token: &AccessToken,
    organization: &str,
    command: &PatCommand,
) -> Result<PatOutcome>
where
    A: PatApi + ?Sized,
{
    debug!("Executing {} in organization {}", command.action(), organization);

    let outcome = match command {
        PatCommand::Create { display_name } => {
            PatOutcome::Created(api.create_pat(token, organization, display_name).await?)
        }
        PatCommand::Update {
            authorization_id,
            display_name,
        } => PatOutcome::Updated {
            authorization_id: authorization_id.clone(),
            body: api
                .update_pat(token, organization, authorization_id, display_name)
                .await?,
        },
        PatCommand::Revoke { authorization_id } => {
            api.revoke_pat(token, organization, authorization_id)
                .await?;
            PatOutcome::Revoked {
                authorization_id: authorization_id.clone(),
            }
        }
        PatCommand::Get { authorization_id } => {
            PatOutcome::Fetched(api.get_pat(token, organization, authorization_id).await?)
        }
        PatCommand::List { filter } => {
            PatOutcome::Listed(api.list_pats(token, organization, filter).await?)
        }
    };

    Ok(outcome)
}

/// Authenticate once, then run exactly one PAT command
pub async fn authenticate_and_execute<C>(
    client: &C,
    credentials: &Credentials,
    organization: &str,
    command: &PatCommand,
) -> Result<PatOutcome>
where
    C: AuthApi + PatApi + ?Sized,
{
    let token = client.authenticate(credentials).await?;
    execute(client, &token, organization, command).await
}
