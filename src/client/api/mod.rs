//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Access token acquisition from the identity provider
//! - [`PatApi`] - Personal Access Token lifecycle operations

mod auth;
mod pat;

pub use auth::AuthApi;
pub use pat::PatApi;
