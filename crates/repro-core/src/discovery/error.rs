//! Discovery failure taxonomy
//!
//! None of these reach the end user as a hard error. They travel inside
//! [`Discovered`](super::Discovered) so callers can log them.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("'{0}' is not an AWS SDK client package identifier")]
    InvalidPackage(String),

    #[error("failed to prepare sandbox workspace: {0}")]
    Workspace(#[source] io::Error),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("package install failed ({status}): {stderr}")]
    FetchFailed { status: String, stderr: String },

    #[error("package install timed out after {0:?}")]
    Timeout(Duration),

    #[error("package not found at {}", .0.display())]
    PackageMissing(PathBuf),

    #[error("failed to remove sandbox workspace {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
