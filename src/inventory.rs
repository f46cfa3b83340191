//! Release metadata extraction
//!
//! Queries each repository for its latest release tag and last commit date
//! and collects the results into an [`Inventory`]. A failed query for one
//! repository is logged and degrades to an empty result; it never stops the
//! remaining repositories from being processed.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use tracing::{debug, info, warn};

use crate::config::{NO_TAG_DATE, NO_TAG_VERSION};
use crate::vcs::VcsClient;
use crate::version::Tag;
use crate::version::tag::latest;

/// One repository in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub path: PathBuf,
    /// Latest release tag, None if the repository has no tags
    pub latest: Option<Tag>,
    /// Date of the most recent commit (YYYY-MM-DD), empty if unknown
    pub last_modified: String,
}

impl Project {
    pub fn version(&self) -> &str {
        self.latest
            .as_ref()
            .map_or(NO_TAG_VERSION, |tag| tag.name.as_str())
    }

    pub fn release_date(&self) -> &str {
        self.latest
            .as_ref()
            .map_or(NO_TAG_DATE, |tag| tag.date.as_str())
    }

    /// Final path segment, or the whole path if it has none (e.g., "/")
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Extraction result for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub projects: Vec<Project>,
    /// Number of candidate repositories that were inspected
    pub discovered: usize,
    /// Number of untagged repositories left out of `projects`
    pub skipped_untagged: usize,
}

/// Returns the highest-versioned tag of the repository at `dir`.
///
/// A failed query is logged and treated as a repository without tags.
pub async fn latest_tag<C: VcsClient + ?Sized>(client: &C, dir: &Path) -> Option<Tag> {
    let tags = client
        .tags(dir)
        .await
        .inspect_err(|e| warn!("{}: failed to list tags: {}", dir.display(), e))
        .unwrap_or_default();

    debug!("{}: {} tags", dir.display(), tags.len());
    latest(tags)
}

/// Returns the local calendar date of the most recent commit, or an empty
/// string if it could not be determined.
pub async fn latest_commit_date<C: VcsClient + ?Sized>(client: &C, dir: &Path) -> String {
    let timestamp = match client.latest_commit_timestamp(dir).await {
        Ok(timestamp) => timestamp,
        Err(e) => {
            warn!("{}: failed to read last commit: {}", dir.display(), e);
            return String::new();
        }
    };

    format_commit_date(timestamp, &Local).unwrap_or_else(|| {
        warn!("{}: commit timestamp out of range: {}", dir.display(), timestamp);
        String::new()
    })
}

/// Format epoch seconds as YYYY-MM-DD in the given time zone
pub fn format_commit_date<Tz>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Inspect every path in order and collect the report records.
///
/// With `skip_untagged`, repositories without tags produce no record.
pub async fn collect_inventory<C: VcsClient + ?Sized>(
    client: &C,
    paths: Vec<PathBuf>,
    skip_untagged: bool,
) -> Inventory {
    let discovered = paths.len();
    let mut projects = Vec::with_capacity(discovered);
    let mut skipped_untagged = 0;

    for path in paths {
        let tag = latest_tag(client, &path).await;
        if tag.is_none() && skip_untagged {
            debug!("{}: skipping untagged repository", path.display());
            skipped_untagged += 1;
            continue;
        }

        let last_modified = latest_commit_date(client, &path).await;
        projects.push(Project {
            path,
            latest: tag,
            last_modified,
        });
    }

    info!(
        "Collected {} of {} repositories ({} untagged skipped)",
        projects.len(),
        discovered,
        skipped_untagged
    );

    Inventory {
        projects,
        discovered,
        skipped_untagged,
    }
}
