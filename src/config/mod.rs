//! Configuration management for ado-pat
//!
//! The config file only ever holds non-secret defaults. Secret keys are
//! rejected at parse time along with any other unknown key.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default Azure AD tenant ID
    #[serde(default)]
    pub tenant_id: Option<String>,

    /// Default Azure AD application (client) ID
    #[serde(default)]
    pub client_id: Option<String>,

    /// Default user principal name
    #[serde(default)]
    pub username: Option<String>,

    /// Default Azure DevOps organization
    #[serde(default)]
    pub organization: Option<String>,

    /// Identity provider host override
    #[serde(default)]
    pub login_host: Option<String>,

    /// DevOps token API host override
    #[serde(default)]
    pub api_host: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ado-pat").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load from an optional override path, falling back to defaults when
    /// the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tenant_id.is_none());
        assert!(config.organization.is_none());
        assert!(config.api_host.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = Config::load_at(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_defaults_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "tenant_id: tenant-1\nclient_id: client-1\nusername: ci@contoso.com\norganization: contoso\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tenant_id.as_deref(), Some("tenant-1"));
        assert_eq!(config.client_id.as_deref(), Some("client-1"));
        assert_eq!(config.username.as_deref(), Some("ci@contoso.com"));
        assert_eq!(config.organization.as_deref(), Some("contoso"));
        assert!(config.login_host.is_none());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_secrets_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "tenant_id: t\npassword: hunter2\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        match err {
            Error::Config(ConfigError::ParseError(msg)) => assert!(msg.contains("password")),
            other => panic!("Expected ConfigError::ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_path_override() {
        let path = Config::resolve_path(Some("/custom/config.yaml")).unwrap();
        assert_eq!(path, PathBuf::from("/custom/config.yaml"));
    }
}
