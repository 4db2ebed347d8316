//! Personal Access Token API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::{AccessToken, CreatedPat, ListFilter};
use crate::error::Result;

/// PAT lifecycle operations. Each method is exactly one HTTP round trip.
#[async_trait]
pub trait PatApi: Send + Sync {
    /// Create a PAT and return its raw token value
    async fn create_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        display_name: &str,
    ) -> Result<CreatedPat>;

    /// Rename an existing PAT, returning the response body
    async fn update_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        authorization_id: &str,
        display_name: &str,
    ) -> Result<Value>;

    /// Revoke a PAT. Succeeds only on `204 No Content`.
    async fn revoke_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        authorization_id: &str,
    ) -> Result<()>;

    /// Fetch a single PAT descriptor, passed through unmodified
    async fn get_pat(
        &self,
        token: &AccessToken,
        organization: &str,
        authorization_id: &str,
    ) -> Result<Value>;

    /// List PAT descriptors, passed through unmodified
    async fn list_pats(
        &self,
        token: &AccessToken,
        organization: &str,
        filter: &ListFilter,
    ) -> Result<Value>;
}
