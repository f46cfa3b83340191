//! Version-control access layer
//!
//! # Modules
//!
//! - [`client`]: `VcsClient` trait for tag and commit queries
//! - [`git`]: `VcsClient` implementation backed by the git executable
//! - [`error`]: Error types for failed queries

pub mod client;
pub mod error;
pub mod git;

pub use client::VcsClient;
pub use error::VcsError;
pub use git::GitCli;
