//! Mock Azure DevOps client for testing
//!
//! Implements the API traits in memory so dispatch and rendering can be
//! tested without a server.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, PatApi};
use super::models::{AccessToken, CreatedPat, Credentials, ListFilter};
use crate::error::{ApiError, Result};

/// A call observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Authenticate,
    Create {
        organization: String,
        display_name: String,
    },
    Update {
        organization: String,
        authorization_id: String,
        display_name: String,
    },
    Revoke {
        organization: String,
        authorization_id: String,
    },
    Get {
        organization: String,
        authorization_id: String,
    },
    List {
        organization: String,
        filter: ListFilter,
    },
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAzureDevOpsClient::new().with_created("abc123", json!({}));
/// let token = mock.authenticate(&creds).await?;
/// ```
pub struct MockAzureDevOpsClient {
    /// HTTP status the token endpoint "returns"; 200 succeeds
    auth_status: u16,
    /// Raw token and descriptor returned from create_pat
    created: Arc<Mutex<Option<(String, Value)>>>,
    /// Descriptors served by get/list
    pats: Arc<Mutex<Vec<Value>>>,
    /// Error to return from the next PAT call - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Calls in order
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl Default for MockAzureDevOpsClient {
    fn default() -> Self {
        Self {
            auth_status: 200,
            created: Arc::new(Mutex::new(None)),
            pats: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockAzureDevOpsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make authentication fail with the given status
    pub fn with_auth_failure(mut self, status: u16) -> Self {
        self.auth_status = status;
        self
    }

    pub fn with_created(self, token: &str, descriptor: Value) -> Self {
        *self.created.try_lock().expect("fresh mock") = Some((token.to_string(), descriptor));
        self
    }

    pub fn with_pats(self, pats: Vec<Value>) -> Self {
        *self.pats.try_lock().expect("fresh mock") = pats;
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("fresh mock") = Some(error);
        self
    }

    /// Calls recorded so far
    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: MockCall) -> Result<()> {
        self.calls.lock().await.push(call);
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn find(&self, authorization_id: &str) -> Option<Value> {
        self.pats
            .lock()
            .await
            .iter()
            .find(|p| p.get("authorizationId").and_then(Value::as_str) == Some(authorization_id))
            .cloned()
    }
}

#[async_trait]
impl AuthApi for MockAzureDevOpsClient {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<AccessToken> {
        self.calls.lock().await.push(MockCall::Authenticate);
        if self.auth_status == 200 {
            Ok(AccessToken::new("mock-access-token".to_string()))
        } else {
            Err(ApiError::Authentication {
                status: Some(self.auth_status),
                body: "mock rejection".to_string(),
            }
            .into())
        }
    }
}

#[async_trait]
impl PatApi for MockAzureDevOpsClient {
    async fn create_pat(
        &self,
        _token: &AccessToken,
        organization: &str,
        display_name: &str,
    ) -> Result<CreatedPat> {
        self.record(MockCall::Create {
            organization: organization.to_string(),
            display_name: display_name.to_string(),
        })
        .await?;

        let (token, descriptor) = self
            .created
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| ("mock-pat".to_string(), json!({})));
        Ok(CreatedPat::new(token, descriptor))
    }

    async fn update_pat(
        &self,
        _token: &AccessToken,
        organization: &str,
        authorization_id: &str,
        display_name: &str,
    ) -> Result<Value> {
        self.record(MockCall::Update {
            organization: organization.to_string(),
            authorization_id: authorization_id.to_string(),
            display_name: display_name.to_string(),
        })
        .await?;

        Ok(json!({
            "patToken": {"authorizationId": authorization_id, "displayName": display_name},
            "patTokenError": "none"
        }))
    }

    async fn revoke_pat(
        &self,
        _token: &AccessToken,
        organization: &str,
        authorization_id: &str,
    ) -> Result<()> {
        self.record(MockCall::Revoke {
            organization: organization.to_string(),
            authorization_id: authorization_id.to_string(),
        })
        .await
    }

    async fn get_pat(
        &self,
        _token: &AccessToken,
        organization: &str,
        authorization_id: &str,
    ) -> Result<Value> {
        self.record(MockCall::Get {
            organization: organization.to_string(),
            authorization_id: authorization_id.to_string(),
        })
        .await?;

        match self.find(authorization_id).await {
            Some(pat) => Ok(json!({"patToken": pat, "patTokenError": "none"})),
            None => Err(ApiError::Operation {
                operation: super::models::PatAction::Get,
                token_id: Some(authorization_id.to_string()),
                status: 404,
                body: "not found".to_string(),
            }
            .into()),
        }
    }

    async fn list_pats(
        &self,
        _token: &AccessToken,
        organization: &str,
        filter: &ListFilter,
    ) -> Result<Value> {
        self.record(MockCall::List {
            organization: organization.to_string(),
            filter: filter.clone(),
        })
        .await?;

        let pats = self.pats.lock().await.clone();
        Ok(json!({"patTokens": pats, "continuationToken": ""}))
    }
}
