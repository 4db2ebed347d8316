//! Authentication models

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Password-grant credentials for the identity provider.
///
/// Secrets are wrapped so `Debug` output never shows them.
#[derive(Debug)]
pub struct Credentials {
    /// Azure AD tenant ID
    pub tenant_id: String,

    /// Azure AD application (client) ID
    pub client_id: String,

    /// Azure AD application secret
    pub client_secret: SecretString,

    /// User principal name
    pub username: String,

    /// User password
    pub password: SecretString,
}

/// Bearer token for the DevOps API. Lives for a single run only.
#[derive(Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(SecretString::new(token))
    }

    /// The raw bearer value, for the `Authorization` header
    pub fn secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Token endpoint response body
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_secrets() {
        let creds = Credentials {
            tenant_id: "tenant".to_string(),
            client_id: "client".to_string(),
            client_secret: SecretString::new("s3cr3t-value".to_string()),
            username: "ci@contoso.com".to_string(),
            password: SecretString::new("hunter2-value".to_string()),
        };

        let debug = format!("{:?}", creds);
        assert!(debug.contains("tenant"));
        assert!(!debug.contains("s3cr3t-value"));
        assert!(!debug.contains("hunter2-value"));
    }

    #[test]
    fn test_access_token_debug_hides_value() {
        let token = AccessToken::new("eyJ0eXAi.bearer".to_string());
        assert_eq!(token.secret(), "eyJ0eXAi.bearer");
        assert!(!format!("{:?}", token).contains("eyJ0eXAi"));
    }

    #[test]
    fn test_token_response_parsing() {
        let body = r#"{"token_type":"Bearer","expires_in":3599,"access_token":"abc"}"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("abc"));
        assert_eq!(parsed.expires_in, Some(3599));

        let parsed: TokenResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.access_token.is_none());
    }
}
