use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

// =============================================================================
// Discovery constants
// =============================================================================

/// Name of the directory that marks a repository root
pub const METADATA_DIR: &str = ".git";

/// Directories never descended into during discovery
pub const ALWAYS_PRUNED_DIRS: &[&str] = &["pkg"];

/// Dependency directories pruned unless vendor directories are included
pub const VENDOR_DIRS: &[&str] = &["vendor", "node_modules"];

// =============================================================================
// Extraction constants
// =============================================================================

/// Timeout for a single git invocation in milliseconds (30 seconds)
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 30_000;

/// Version shown for repositories without any release tag
pub const NO_TAG_VERSION: &str = "v0.0.0";

/// Release date shown for repositories without any release tag
pub const NO_TAG_DATE: &str = "0000-00-00";

/// Sort key for the final listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OrderBy {
    /// Ascending by the latest tag's date
    #[default]
    #[value(alias = "releaseDate")]
    ReleaseDate,
    /// Ascending by the full repository path
    Path,
}

/// Options controlling which directories are considered during discovery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub include_vendor: bool,
}

/// Options controlling how the report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_full_path: bool,
    pub show_modified_date: bool,
    pub order_by: OrderBy,
}

/// Fully resolved settings for one inventory run
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Explicit repository paths; empty means walk `root`
    pub paths: Vec<PathBuf>,
    pub root: PathBuf,
    pub skip_untagged: bool,
    pub query_timeout: Duration,
    pub discovery: DiscoveryOptions,
    pub report: ReportOptions,
}

/// Returns the directory walked when no explicit paths are given.
/// Uses $HOME if set, otherwise the platform home directory,
/// or `.` if neither is available.
pub fn default_root() -> PathBuf {
    root_with_env(std::env::var("HOME").ok(), dirs::home_dir())
}

fn root_with_env(home_env: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    home_env
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or(home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
