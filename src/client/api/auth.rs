//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, Credentials};
use crate::error::Result;

/// Authentication against the Azure AD token endpoint
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange user and application credentials for a DevOps access token
    /// using the password grant. Called once per run; never retried.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken>;
}
