//! Version-control client trait

#[cfg(test)]
use mockall::automock;

use std::path::Path;

use crate::vcs::error::VcsError;
use crate::version::Tag;

/// Trait for querying release metadata from a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VcsClient: Send + Sync {
    /// Lists all release tags of the repository at `dir` with their dates
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - Tags in the order the tool reported them (possibly empty)
    /// * `Err(VcsError)` - If the query fails (not a repository, tool missing, timeout)
    async fn tags(&self, dir: &Path) -> Result<Vec<Tag>, VcsError>;

    /// Returns the most recent commit's timestamp in seconds since the UNIX epoch
    async fn latest_commit_timestamp(&self, dir: &Path) -> Result<i64, VcsError>;
}
