//! Types describing a single subprocess invocation.

use std::path::PathBuf;

use serde::Serialize;

/// An environment variable set on top of the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
  pub name: String,
  pub value: String,
}

impl EnvVar {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }
}

/// A command line, the directory to run it in, and its environment overrides.
///
/// `args` may hold empty tokens standing in for absent optional flags; they
/// are dropped by [`CommandSpec::argv`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
  pub args: Vec<String>,
  pub cwd: PathBuf,
  pub env: Vec<EnvVar>,
}

impl CommandSpec {
  pub fn new<I, S>(args: I, cwd: impl Into<PathBuf>, env: Vec<EnvVar>) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      args: args.into_iter().map(Into::into).collect(),
      cwd: cwd.into(),
      env,
    }
  }

  /// The command line with empty tokens removed.
  pub fn argv(&self) -> Vec<&str> {
    self.args.iter().map(String::as_str).filter(|a| !a.is_empty()).collect()
  }

  /// The program to execute, if any.
  pub fn program(&self) -> Option<&str> {
    self.argv().first().copied()
  }

  pub fn env_value(&self, name: &str) -> Option<&str> {
    self.env.iter().find(|e| e.name == name).map(|e| e.value.as_str())
  }
}

impl std::fmt::Display for CommandSpec {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for var in &self.env {
      write!(f, "{}={} ", var.name, var.value)?;
    }
    write!(f, "{}", self.argv().join(" "))
  }
}
