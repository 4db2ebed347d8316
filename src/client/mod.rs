//! Azure DevOps API client
//!
//! The API surface is split into [`api::AuthApi`] (password-grant token
//! acquisition) and [`api::PatApi`] (PAT lifecycle), both implemented by
//! [`AzureDevOpsClient`]. [`operation`] validates and dispatches a single
//! PAT command on top of them.

pub mod api;
pub mod azure_devops;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod operation;

pub use azure_devops::{AzureDevOpsClient, DEFAULT_API_HOST, DEFAULT_LOGIN_HOST};
pub use operation::{PatCommand, PatOutcome, authenticate_and_execute};
