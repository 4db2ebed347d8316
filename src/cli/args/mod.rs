//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod credentials;
mod global;

pub use common::{ListArgs, OutputFormat, TokenArgs};
pub use credentials::CredentialArgs;
pub use global::GlobalOptions;
