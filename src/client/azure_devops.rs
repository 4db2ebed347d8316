//! Azure DevOps API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;

use super::api::{AuthApi, PatApi};
use super::models::{
    AccessToken, CreatePatRequest, CreatePatResponse, CreatedPat, Credentials, ListFilter,
    PatAction, TokenResponse, UpdatePatRequest,
};
use crate::error::{ApiError, Result};

/// Azure AD login host
pub const DEFAULT_LOGIN_HOST: &str = "https://login.microsoftonline.com";

/// Azure DevOps token administration host
pub const DEFAULT_API_HOST: &str = "https://vssps.dev.azure.com";

/// Resource scope of Azure DevOps itself. Fixed by Microsoft.
pub const DEVOPS_RESOURCE_SCOPE: &str = "499b84ac-1321-427f-aa17-267ca6975798/.default";

/// PAT lifecycle API version
pub const API_VERSION: &str = "7.0-preview.1";

/// Scope granted to every PAT this tool creates
pub const PAT_SCOPE: &str = "vso.code";

/// Per-request timeout for every call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Azure DevOps API client
pub struct AzureDevOpsClient {
    http: HttpClient,
    login_host: String,
    api_host: String,
    timeout: Duration,
}

impl AzureDevOpsClient {
    /// Create a client against custom hosts (testing, sovereign clouds)
    pub fn with_hosts(login_host: &str, api_host: &str) -> Result<Self> {
        Self::build(login_host, api_host, REQUEST_TIMEOUT)
    }

    pub(crate) fn build(login_host: &str, api_host: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("ado-pat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            login_host: login_host.trim_end_matches('/').to_string(),
            api_host: api_host.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.login_host, tenant_id)
    }

    fn pats_url(&self, organization: &str) -> String {
        format!("{}/{}/_apis/tokens/pats", self.api_host, organization)
    }

    /// Send a request, keeping timeouts distinguishable
    async fn send(&self, request: RequestBuilder) -> std::result::Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, self.timeout))
    }

    async fn read_body(&self, response: Response) -> std::result::Result<String, ApiError> {
        response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(e, self.timeout))
    }

    /// Read the body and fail with `ApiError::Operation` unless the status is `expected`
    async fn expect_status(
        &self,
        response: Response,
        expected: StatusCode,
        operation: PatAction,
        authorization_id: Option<&str>,
    ) -> Result<String> {
        let status = response.status();
        let body = self.read_body(response).await?;
        debug!("{} PAT -> HTTP {}", operation, status.as_u16());

        if status != expected {
            return Err(ApiError::Operation {
                operation,
                token_id: authorization_id.map(str::to_string),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }

    /// Authenticated request against the PAT endpoint.
    ///
    /// Every call gets the bearer token and `api-version`; only calls that
    /// send a JSON body or expect one carry a content type.
    fn pat_request(
        &self,
        method: reqwest::Method,
        token: &AccessToken,
        organization: &str,
    ) -> RequestBuilder {
        let url = self.pats_url(organization);
        debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .bearer_auth(token.secret())
            .query(&[("api-version", API_VERSION)])
    }
}

fn parse_json(body: &str, what: &str) -> std::result::Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {} response: {}", what, e)))
}

/// Transport failures while talking to the token endpoint are authentication
/// failures without a status; timeouts stay timeouts.
fn auth_transport(err: ApiError) -> ApiError {
    match err {
        ApiError::Network(msg) => ApiError::Authentication {
            status: None,
            body: msg,
        },
        other => other,
    }
}

#[async_trait]
impl AuthApi for AzureDevOpsClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken> {
        let url = self.token_url(&credentials.tenant_id);
        debug!("Requesting access token for tenant {}", credentials.tenant_id);

        let form = [
            ("grant_type", "password"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.expose_secret().as_str()),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.expose_secret().as_str()),
            ("scope", DEVOPS_RESOURCE_SCOPE),
        ];

        let response = self
            .send(self.http.post(&url).form(&form))
            .await
            .map_err(auth_transport)?;

        let status = response.status();
        let body = self.read_body(response).await.map_err(auth_transport)?;
        debug!("Token endpoint -> HTTP {}", status.as_u16());

        if status != StatusCode::OK {
            return Err(ApiError::Authentication {
                status: Some(status.as_u16()),
                body,
            }
            .into());
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|_| ApiError::Authentication {
                status: Some(status.as_u16()),
                body: body.clone(),
            })?;

        match parsed.access_token {
            Some(token) if !token.is_empty() => {
                info!("Authenticated against tenant {}", credentials.tenant_id);
                if let Some(seconds) = parsed.expires_in {
                    debug!("Access token valid for {}s", seconds);
                }
                Ok(AccessToken::new(token))
            }
            _ => Err(ApiError::Authentication {
                status: Some(status.as_u16()),
                body: "Token response did not contain an access_token".to_string(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl PatApi for AzureDevOpsClient {
    async fn create_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        display_name: &str,
    ) -> Result<CreatedPat> {
        let request = self
            .pat_request(reqwest::Method::POST, token, organization)
            .json(&CreatePatRequest {
                display_name,
                scope: PAT_SCOPE,
            });

        let response = self.send(request).await?;
        let body = self
            .expect_status(response, StatusCode::OK, PatAction::Create, None)
            .await?;

        let parsed: CreatePatResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse create response: {}", e))
        })?;

        let descriptor = parsed.pat_token.unwrap_or(Value::Null);
        let raw = descriptor
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        match raw {
            Some(raw) => {
                let created = CreatedPat::new(raw, descriptor);
                info!(
                    "Created PAT '{}' ({})",
                    display_name,
                    created.authorization_id().unwrap_or("-")
                );
                Ok(created)
            }
            None => Err(ApiError::InvalidResponse(format!(
                "Create response carried no token (patTokenError: {})",
                parsed.pat_token_error.as_deref().unwrap_or("unknown")
            ))
            .into()),
        }
    }

    async fn update_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        authorization_id: &str,
        display_name: &str,
    ) -> Result<Value> {
        let request = self
            .pat_request(reqwest::Method::PUT, token, organization)
            .json(&UpdatePatRequest {
                authorization_id,
                display_name,
            });

        let response = self.send(request).await?;
        let body = self
            .expect_status(
                response,
                StatusCode::OK,
                PatAction::Update,
                Some(authorization_id),
            )
            .await?;

        info!("Updated PAT {}", authorization_id);
        Ok(parse_json(&body, "update")?)
    }

    async fn revoke_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        authorization_id: &str,
    ) -> Result<()> {
        let request = self
            .pat_request(reqwest::Method::DELETE, token, organization)
            .query(&[("authorizationId", authorization_id)]);

        let response = self.send(request).await?;
        self.expect_status(
            response,
            StatusCode::NO_CONTENT,
            PatAction::Revoke,
            Some(authorization_id),
        )
        .await?;

        info!("Revoked PAT {}", authorization_id);
        Ok(())
    }

    async fn get_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        authorization_id: &str,
    ) -> Result<Value> {
        let request = self
            .pat_request(reqwest::Method::GET, token, organization)
            .header(CONTENT_TYPE, "application/json")
            .query(&[("authorizationId", authorization_id)]);

        let response = self.send(request).await?;
        let body = self
            .expect_status(
                response,
                StatusCode::OK,
                PatAction::Get,
                Some(authorization_id),
            )
            .await?;

        Ok(parse_json(&body, "get")?)
    }

    async fn list_pats(
        &self,
        token: &AccessToken,
        organization: &str,
        filter: &ListFilter,
    ) -> Result<Value> {
        let request = self
            .pat_request(reqwest::Method::GET, token, organization)
            .header(CONTENT_TYPE, "application/json")
            .query(&filter.query_pairs());

        let response = self.send(request).await?;
        let body = self
            .expect_status(response, StatusCode::OK, PatAction::List, None)
            .await?;

        Ok(parse_json(&body, "list")?)
    }
}
