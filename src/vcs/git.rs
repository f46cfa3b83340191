//! git command-line client

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::config::DEFAULT_QUERY_TIMEOUT_MS;
use crate::vcs::client::VcsClient;
use crate::vcs::error::VcsError;
use crate::version::Tag;

const DEFAULT_PROGRAM: &str = "git";

/// Annotated tags print as `<name> <YYYY-MM-DD>`; lightweight tags have no
/// tagger and print fewer fields.
const TAG_FORMAT: &str = "--format=%(tag) %(taggerdate:short)";

/// `VcsClient` that shells out to the git executable
pub struct GitCli {
    program: String,
    timeout: Duration,
}

impl GitCli {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program(DEFAULT_PROGRAM, timeout)
    }

    /// Creates a client running `program` instead of `git` from PATH
    pub fn with_program(program: &str, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            timeout,
        }
    }

    async fn run(&self, dir: &Path, args: &[&str]) -> Result<String, VcsError> {
        debug!("Running {} -C {:?} {}", self.program, dir, args.join(" "));

        let mut command = Command::new(&self.program);
        command.arg("-C").arg(dir).args(args).kill_on_drop(true);

        let output: Output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| VcsError::Timeout {
                dir: dir.to_path_buf(),
                timeout_ms: self.timeout.as_millis(),
            })?
            .map_err(|source| VcsError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::Failed {
                dir: dir.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| VcsError::InvalidOutput(e.to_string()))
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS))
    }
}

#[async_trait::async_trait]
impl VcsClient for GitCli {
    async fn tags(&self, dir: &Path) -> Result<Vec<Tag>, VcsError> {
        let stdout = self
            .run(dir, &["for-each-ref", TAG_FORMAT, "refs/tags"])
            .await?;
        Ok(parse_tag_list(&stdout))
    }

    async fn latest_commit_timestamp(&self, dir: &Path) -> Result<i64, VcsError> {
        let stdout = self.run(dir, &["log", "-1", "--format=%ct"]).await?;
        parse_timestamp(&stdout)
    }
}

/// Parse `for-each-ref` output into tags, skipping lines that do not have
/// exactly a name and a date.
fn parse_tag_list(output: &str) -> Vec<Tag> {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [name, date] => Some(Tag::new(*name, *date)),
                _ => None,
            }
        })
        .collect()
}

fn parse_timestamp(output: &str) -> Result<i64, VcsError> {
    let trimmed = output.trim();
    trimmed
        .parse()
        .map_err(|_| VcsError::InvalidOutput(format!("not a commit timestamp: {:?}", trimmed)))
}
