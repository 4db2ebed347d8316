//! Personal Access Token models

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The five PAT lifecycle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatAction {
    Create,
    Update,
    Revoke,
    Get,
    List,
}

impl PatAction {
    /// Whether the operation changes server-side state
    pub fn is_mutating(self) -> bool {
        matches!(self, PatAction::Create | PatAction::Update | PatAction::Revoke)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatAction::Create => "create",
            PatAction::Update => "update",
            PatAction::Revoke => "revoke",
            PatAction::Get => "get",
            PatAction::List => "list",
        }
    }
}

impl fmt::Display for PatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which PATs the list endpoint returns (`displayFilterOption`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFilter {
    Active,
    Revoked,
    Expired,
    All,
}

impl DisplayFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayFilter::Active => "active",
            DisplayFilter::Revoked => "revoked",
            DisplayFilter::Expired => "expired",
            DisplayFilter::All => "all",
        }
    }
}

/// Optional query parameters for listing PATs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub display_filter: Option<DisplayFilter>,
    pub continuation_token: Option<String>,
}

impl ListFilter {
    /// Query pairs to append after `api-version`
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = self.display_filter {
            pairs.push(("displayFilterOption", filter.as_str().to_string()));
        }
        if let Some(ref token) = self.continuation_token {
            pairs.push(("continuationToken", token.clone()));
        }
        pairs
    }
}

/// Body for `POST .../tokens/pats`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatRequest<'a> {
    pub display_name: &'a str,
    pub scope: &'a str,
}

/// Body for `PUT .../tokens/pats`.
///
/// The authorization ID travels in the body here, unlike get and revoke
/// which take it from the query string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatRequest<'a> {
    pub authorization_id: &'a str,
    pub display_name: &'a str,
}

/// Response envelope from the create endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatResponse {
    #[serde(default)]
    pub pat_token: Option<Value>,

    /// "none" on success, otherwise a reason such as "duplicateTokenName"
    #[serde(default)]
    pub pat_token_error: Option<String>,
}

/// A freshly created PAT
#[derive(Debug)]
pub struct CreatedPat {
    token: SecretString,

    /// The `patToken` object exactly as the server returned it
    pub descriptor: Value,
}

impl CreatedPat {
    pub fn new(token: String, descriptor: Value) -> Self {
        Self {
            token: SecretString::new(token),
            descriptor,
        }
    }

    /// The raw PAT value. Only available once, right after creation.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Server-assigned authorization ID, if present in the descriptor
    pub fn authorization_id(&self) -> Option<&str> {
        self.descriptor
            .get("authorizationId")
            .and_then(Value::as_str)
    }
}

/// Typed view of a PAT descriptor, used for display only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatDescriptor {
    #[serde(default)]
    pub authorization_id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub target_accounts: Option<Vec<String>>,

    #[serde(default)]
    pub valid_from: Option<String>,

    #[serde(default)]
    pub valid_to: Option<String>,
}

impl PatDescriptor {
    /// Extract the `patTokens` array from a list response body
    pub fn list_from(body: &Value) -> Vec<PatDescriptor> {
        body.get("patTokens")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract the `patToken` object from a get/update response body
    pub fn single_from(body: &Value) -> Option<PatDescriptor> {
        body.get("patToken")
            .and_then(|item| serde_json::from_value(item.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_serde_lowercase() {
        let action: PatAction = serde_json::from_str("\"revoke\"").unwrap();
        assert_eq!(action, PatAction::Revoke);
        assert_eq!(action.to_string(), "revoke");
        assert!(serde_json::from_str::<PatAction>("\"delete\"").is_err());
    }

    #[test]
    fn test_action_is_mutating() {
        assert!(PatAction::Create.is_mutating());
        assert!(PatAction::Update.is_mutating());
        assert!(PatAction::Revoke.is_mutating());
        assert!(!PatAction::Get.is_mutating());
        assert!(!PatAction::List.is_mutating());
    }

    #[test]
    fn test_list_filter_query_pairs() {
        assert!(ListFilter::default().query_pairs().is_empty());

        let filter = ListFilter {
            display_filter: Some(DisplayFilter::Expired),
            continuation_token: Some("next-page".to_string()),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("displayFilterOption", "expired".to_string()),
                ("continuationToken", "next-page".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let create = serde_json::to_value(CreatePatRequest {
            display_name: "ci-bot",
            scope: "vso.code",
        })
        .unwrap();
        assert_eq!(create, json!({"displayName": "ci-bot", "scope": "vso.code"}));

        let update = serde_json::to_value(UpdatePatRequest {
            authorization_id: "4b1e",
            display_name: "renamed",
        })
        .unwrap();
        assert_eq!(
            update,
            json!({"authorizationId": "4b1e", "displayName": "renamed"})
        );
    }

    #[test]
    fn test_created_pat_accessors() {
        let created = CreatedPat::new(
            "abc123".to_string(),
            json!({"authorizationId": "4b1e", "token": "abc123"}),
        );
        assert_eq!(created.token(), "abc123");
        assert_eq!(created.authorization_id(), Some("4b1e"));
        assert!(!format!("{:?}", created.token).contains("abc123"));
    }

    #[test]
    fn test_descriptor_list_from_body() {
        let body = json!({
            "patTokens": [
                {"authorizationId": "a", "displayName": "first", "scope": "vso.code",
                 "validFrom": "2024-01-01T00:00:00Z", "validTo": "2024-02-01T00:00:00Z"},
                {"authorizationId": "b", "displayName": "second"}
            ],
            "continuationToken": ""
        });

        let pats = PatDescriptor::list_from(&body);
        assert_eq!(pats.len(), 2);
        assert_eq!(pats[0].display_name.as_deref(), Some("first"));
        assert_eq!(pats[1].authorization_id.as_deref(), Some("b"));
        assert!(pats[1].scope.is_none());
    }

    #[test]
    fn test_descriptor_list_from_unexpected_body() {
        assert!(PatDescriptor::list_from(&json!({"value": []})).is_empty());
        assert!(PatDescriptor::single_from(&json!([])).is_none());
    }
}
