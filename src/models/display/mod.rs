//! Display model implementations for table and key/value output
//!
//! Display models turn PAT descriptors into CLI-friendly rows with
//! readable dates and placeholders for missing fields.

mod common;
mod pat;

pub use pat::{PatDetail, PatDisplay};
