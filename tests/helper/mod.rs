//! Shared test utilities

pub mod vcs;

pub use vcs::{FakeVcs, create_repo_tree};
