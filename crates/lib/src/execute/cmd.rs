//! Running external commands.
//!
//! Commands inherit the parent's standard streams so tool output reaches the
//! terminal as it is produced. Nothing is captured or retried.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::execute::types::CommandSpec;

/// Something that can execute a [`CommandSpec`] to completion.
pub trait ProcessRunner {
  /// Run the command and block until it exits.
  ///
  /// Fails with [`BuildError::LaunchFailure`] if the process cannot be started
  /// and [`BuildError::ProcessFailure`] if it exits unsuccessfully.
  fn run(&self, command: &CommandSpec) -> Result<()>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
  fn run(&self, command: &CommandSpec) -> Result<()> {
    let argv = command.argv();
    let Some((program, args)) = argv.split_first() else {
      return Err(BuildError::LaunchFailure {
        program: String::new(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
      });
    };

    debug!(command = ?argv, directory = %command.cwd.display(), "Execute");

    let mut child = Command::new(program);
    child
      .args(args)
      .current_dir(&command.cwd)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());

    for var in &command.env {
      child.env(&var.name, &var.value);
    }

    let status = child.status().map_err(|source| BuildError::LaunchFailure {
      program: program.to_string(),
      source,
    })?;

    if !status.success() {
      return Err(BuildError::ProcessFailure {
        program: program.to_string(),
        code: status.code(),
      });
    }

    Ok(())
  }
}
