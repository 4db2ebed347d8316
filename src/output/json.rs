//! JSON output formatting
//!
//! Server bodies are printed as returned. No envelope or metadata is added,
//! so scripts can consume the output exactly as the API documents it.

use serde::Serialize;

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
