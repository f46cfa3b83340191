use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed in {dir:?} ({status}): {stderr}")]
    Failed {
        dir: PathBuf,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Command timed out after {timeout_ms}ms in {dir:?}")]
    Timeout { dir: PathBuf, timeout_ms: u128 },

    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}
