//! PAT display models

use tabled::Tabled;

use super::common::{format_timestamp, or_missing};
use crate::client::models::PatDescriptor;

/// One row in `ado-pat list`
#[derive(Debug, Clone, Tabled)]
pub struct PatDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "AUTHORIZATION ID")]
    pub authorization_id: String,

    #[tabled(rename = "SCOPE")]
    pub scope: String,

    #[tabled(rename = "VALID TO")]
    pub valid_to: String,
}

impl From<&PatDescriptor> for PatDisplay {
    fn from(pat: &PatDescriptor) -> Self {
        Self {
            name: or_missing(pat.display_name.as_deref()),
            authorization_id: or_missing(pat.authorization_id.as_deref()),
            scope: or_missing(pat.scope.as_deref()),
            valid_to: format_timestamp(pat.valid_to.as_deref()),
        }
    }
}

/// Key/value view for `ado-pat get`
#[derive(Debug, Clone)]
pub struct PatDetail {
    pub fields: Vec<(&'static str, String)>,
}

impl From<&PatDescriptor> for PatDetail {
    fn from(pat: &PatDescriptor) -> Self {
        let targets = match pat.target_accounts.as_deref() {
            Some(accounts) if !accounts.is_empty() => accounts.join(", "),
            _ => super::common::MISSING.to_string(),
        };

        Self {
            fields: vec![
                ("Name", or_missing(pat.display_name.as_deref())),
                ("Authorization ID", or_missing(pat.authorization_id.as_deref())),
                ("Scope", or_missing(pat.scope.as_deref())),
                ("Target accounts", targets),
                ("Valid from", format_timestamp(pat.valid_from.as_deref())),
                ("Valid to", format_timestamp(pat.valid_to.as_deref())),
            ],
        }
    }
}

impl PatDetail {
    /// Aligned `Label: value` lines
    pub fn render(&self) -> String {
        let width = self
            .fields
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);

        self.fields
            .iter()
            .map(|(label, value)| {
                format!(
                    "{:width$}  {}",
                    format!("{}:", label),
                    value,
                    width = width + 1
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> PatDescriptor {
        PatDescriptor {
            authorization_id: Some("4b1e".to_string()),
            display_name: Some("ci-bot".to_string()),
            scope: Some("vso.code".to_string()),
            target_accounts: Some(vec!["acct-1".to_string(), "acct-2".to_string()]),
            valid_from: Some("2024-01-01T00:00:00Z".to_string()),
            valid_to: Some("2024-02-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_pat_display_from_descriptor() {
        let row = PatDisplay::from(&descriptor());
        assert_eq!(row.name, "ci-bot");
        assert_eq!(row.authorization_id, "4b1e");
        assert_eq!(row.valid_to, "2024-02-01 00:00 UTC");
    }

    #[test]
    fn test_pat_display_missing_fields() {
        let row = PatDisplay::from(&PatDescriptor::default());
        assert_eq!(row.name, "-");
        assert_eq!(row.scope, "-");
        assert_eq!(row.valid_to, "-");
    }

    #[test]
    fn test_pat_detail_render() {
        let rendered = PatDetail::from(&descriptor()).render();
        assert!(rendered.contains("Name:"));
        assert!(rendered.contains("ci-bot"));
        assert!(rendered.contains("acct-1, acct-2"));
        assert!(rendered.contains("Valid from:"));
        assert_eq!(rendered.lines().count(), 6);
    }
}
