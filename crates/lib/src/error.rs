//! Error type shared by every step of a build run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a build run.
///
/// Every variant is fatal; nothing in the crate retries.
#[derive(Debug, Error)]
pub enum BuildError {
  /// A mandatory startup option was not supplied.
  #[error("Missing mandatory {0} option")]
  MissingOption(&'static str),

  /// The artifact name has no group/artifact identifiers.
  #[error("unknown artifact: {0}")]
  UnknownArtifact(String),

  /// The subprocess could not be started.
  #[error("failed to launch {program}: {source}")]
  LaunchFailure {
    program: String,
    #[source]
    source: io::Error,
  },

  /// The subprocess ran but exited unsuccessfully.
  #[error("{program} failed, exit code: {}", .code.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string()))]
  ProcessFailure { program: String, code: Option<i32> },

  /// Reading or writing the build tool configuration failed.
  #[error("failed to patch {}: {source}", .path.display())]
  ConfigPatchFailure {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T> = std::result::Result<T, BuildError>;
