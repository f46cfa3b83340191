//! Inventory of local git repositories and their latest releases
//!
//! # Modules
//!
//! - [`config`]: Constants and resolved run settings
//! - [`discovery`]: Finds repository roots under a directory tree
//! - [`vcs`]: Tag and commit queries against the version-control tool
//! - [`version`]: Tag name parsing and version ordering
//! - [`inventory`]: Per-repository extraction into report records
//! - [`report`]: Ordering and plain-text rendering
//! - [`runner`]: The full pipeline for one run

pub mod config;
pub mod discovery;
pub mod inventory;
pub mod report;
pub mod runner;
pub mod vcs;
pub mod version;
