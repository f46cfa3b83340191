//! Repository discovery
//!
//! Either takes an explicit list of repositories as given, or walks a root
//! directory looking for `.git` metadata directories.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::{ALWAYS_PRUNED_DIRS, DiscoveryOptions, METADATA_DIR, VENDOR_DIRS};

/// Returns the repositories to inspect.
///
/// A non-empty `explicit` list is returned unchanged, in order, without
/// touching the filesystem. Otherwise `root` is walked.
pub fn candidate_paths(
    explicit: Vec<PathBuf>,
    root: &Path,
    options: DiscoveryOptions,
) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit;
    }
    find_repositories(root, options)
}

/// Walks `root` and returns every directory that contains a `.git` directory.
///
/// - Directories named `pkg` are never entered.
/// - `vendor` and `node_modules` are not entered unless `include_vendor` is set.
/// - The contents of a repository root are not searched for nested repositories.
/// - Unreadable entries are skipped; a missing root yields an empty list.
pub fn find_repositories(root: &Path, options: DiscoveryOptions) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        if is_pruned(entry.file_name(), options) {
            walker.skip_current_dir();
            continue;
        }

        if entry.path().join(METADATA_DIR).is_dir() {
            debug!("Found repository at {:?}", entry.path());
            repos.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    repos
}

fn is_pruned(name: &OsStr, options: DiscoveryOptions) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    ALWAYS_PRUNED_DIRS.contains(&name) || (!options.include_vendor && VENDOR_DIRS.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn make_repo(root: &Path, rel: &str) -> PathBuf {
        let dir = root.join(rel);
        fs::create_dir_all(dir.join(METADATA_DIR)).unwrap();
        dir
    }

    #[test]
    fn candidate_paths_returns_explicit_paths_unchanged() {
        let explicit = vec![PathBuf::from("/b"), PathBuf::from("/a")];

        let result = candidate_paths(
            explicit.clone(),
            Path::new("/nonexistent-root"),
            DiscoveryOptions::default(),
        );

        assert_eq!(result, explicit);
    }

    #[test]
    fn candidate_paths_walks_root_when_no_explicit_paths() {
        let temp_dir = TempDir::new().unwrap();
        let repo = make_repo(temp_dir.path(), "src/proj");

        let result = candidate_paths(vec![], temp_dir.path(), DiscoveryOptions::default());

        assert_eq!(result, vec![repo]);
    }

    #[test]
    fn find_repositories_returns_repos_in_walk_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = make_repo(temp_dir.path(), "b/proj");
        let a = make_repo(temp_dir.path(), "a");
        let c = make_repo(temp_dir.path(), "c/deep/er/proj");
        fs::create_dir_all(temp_dir.path().join("d/empty")).unwrap();
        fs::write(temp_dir.path().join("file.txt"), "not a dir").unwrap();

        let result = find_repositories(temp_dir.path(), DiscoveryOptions::default());

        assert_eq!(result, vec![a, b, c]);
    }

    #[test]
    fn find_repositories_does_not_report_nested_repositories() {
        let temp_dir = TempDir::new().unwrap();
        let proj = make_repo(temp_dir.path(), "proj1");
        make_repo(temp_dir.path(), "proj1/vendor/dep");
        make_repo(temp_dir.path(), "proj1/sub/inner");

        for include_vendor in [false, true] {
            let result = find_repositories(temp_dir.path(), DiscoveryOptions { include_vendor });
            assert_eq!(result, vec![proj.clone()]);
        }
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn find_repositories_never_enters_pkg(#[case] include_vendor: bool) {
        let temp_dir = TempDir::new().unwrap();
        make_repo(temp_dir.path(), "go/pkg/mod/github.com/x/y");
        let proj = make_repo(temp_dir.path(), "go/src/proj");

        let result = find_repositories(temp_dir.path(), DiscoveryOptions { include_vendor });

        assert_eq!(result, vec![proj]);
    }

    #[test]
    fn find_repositories_includes_vendor_only_when_requested() {
        let temp_dir = TempDir::new().unwrap();
        let dep = make_repo(temp_dir.path(), "vendor/dep");
        let module = make_repo(temp_dir.path(), "web/node_modules/left-pad");
        let proj = make_repo(temp_dir.path(), "work/proj");

        let pruned = find_repositories(temp_dir.path(), DiscoveryOptions::default());
        let included = find_repositories(
            temp_dir.path(),
            DiscoveryOptions {
                include_vendor: true,
            },
        );

        assert_eq!(pruned, vec![proj.clone()]);
        assert_eq!(included, vec![dep, module, proj]);
    }

    #[test]
    fn find_repositories_reports_root_when_root_is_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        let root = make_repo(temp_dir.path(), "proj");

        let result = find_repositories(&root, DiscoveryOptions::default());

        assert_eq!(result, vec![root]);
    }

    #[test]
    fn find_repositories_ignores_git_files() {
        let temp_dir = TempDir::new().unwrap();
        let worktree = temp_dir.path().join("worktree");
        fs::create_dir_all(&worktree).unwrap();
        fs::write(worktree.join(METADATA_DIR), "gitdir: /elsewhere").unwrap();

        assert!(find_repositories(temp_dir.path(), DiscoveryOptions::default()).is_empty());
    }

    #[test]
    fn find_repositories_returns_empty_for_missing_root() {
        let temp_dir = TempDir::new().unwrap();

        let result = find_repositories(
            &temp_dir.path().join("does-not-exist"),
            DiscoveryOptions::default(),
        );

        assert!(result.is_empty());
    }
}
