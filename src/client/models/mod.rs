//! Azure DevOps API data models
//!
//! Credentials and tokens for the identity provider live in `auth`; PAT
//! request/response shapes live in `pat`.

mod auth;
mod pat;

pub use auth::{AccessToken, Credentials, TokenResponse};
pub use pat::{
    CreatePatRequest, CreatePatResponse, CreatedPat, DisplayFilter, ListFilter, PatAction,
    PatDescriptor, UpdatePatRequest,
};
