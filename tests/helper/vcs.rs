//! Version-control test utilities

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;

use repo_inventory::vcs::{VcsClient, VcsError};
use repo_inventory::version::Tag;

/// In-memory version-control client keyed by repository path.
/// Unknown paths fail like a directory that is not a repository.
#[derive(Default)]
pub struct FakeVcs {
    tags: HashMap<PathBuf, Vec<Tag>>,
    commits: HashMap<PathBuf, i64>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, dir: &Path, tags: &[(&str, &str)], commit_timestamp: i64) -> Self {
        self.tags.insert(
            dir.to_path_buf(),
            tags.iter().map(|(name, date)| Tag::new(*name, *date)).collect(),
        );
        self.commits.insert(dir.to_path_buf(), commit_timestamp);
        self
    }

    fn not_a_repository(dir: &Path) -> VcsError {
        VcsError::InvalidOutput(format!("fatal: not a git repository: {}", dir.display()))
    }
}

#[async_trait]
impl VcsClient for FakeVcs {
    async fn tags(&self, dir: &Path) -> Result<Vec<Tag>, VcsError> {
        self.tags
            .get(dir)
            .cloned()
            .ok_or_else(|| Self::not_a_repository(dir))
    }

    async fn latest_commit_timestamp(&self, dir: &Path) -> Result<i64, VcsError> {
        self.commits
            .get(dir)
            .copied()
            .ok_or_else(|| Self::not_a_repository(dir))
    }
}

/// Create a directory tree with a `.git` directory under each relative path
pub fn create_repo_tree(repos: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for rel in repos {
        fs::create_dir_all(temp_dir.path().join(rel).join(".git")).unwrap();
    }
    temp_dir
}
