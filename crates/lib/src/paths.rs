//! On-disk layout: where artifacts are built and where the build tool lives.
//!
//! Defaults match the Mandrel build image. Each location can be moved with an
//! environment variable:
//! - `MANDREL_BUILD_ROOT`: parent of every artifact checkout
//! - `MANDREL_MX_HOME`: mx installation holding `mx.py`
//! - `MANDREL_JAVA_HOME`: JDK handed to subprocesses as `JAVA_HOME`

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::{DEFAULT_BUILD_ROOT, DEFAULT_JAVA_HOME, DEFAULT_MX_HOME, MX_PY, MX_PY_BACKUP};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
  pub build_root: PathBuf,
  pub mx_home: PathBuf,
  pub java_home: PathBuf,
}

impl Layout {
  pub fn new(build_root: impl Into<PathBuf>, mx_home: impl Into<PathBuf>, java_home: impl Into<PathBuf>) -> Self {
    Self {
      build_root: build_root.into(),
      mx_home: mx_home.into(),
      java_home: java_home.into(),
    }
  }

  /// Layout for this process, honouring environment overrides.
  pub fn current() -> Self {
    Self {
      build_root: env_path("MANDREL_BUILD_ROOT", DEFAULT_BUILD_ROOT),
      mx_home: env_path("MANDREL_MX_HOME", DEFAULT_MX_HOME),
      java_home: env_path("MANDREL_JAVA_HOME", DEFAULT_JAVA_HOME),
    }
  }

  /// Build directory of an artifact. Existence is not checked.
  pub fn artifact_dir(&self, artifact_name: &str) -> PathBuf {
    self.build_root.join(artifact_name)
  }

  pub fn mx_py(&self) -> PathBuf {
    self.mx_home.join(MX_PY)
  }

  pub fn mx_py_backup(&self) -> PathBuf {
    self.mx_home.join(MX_PY_BACKUP)
  }
}

impl Default for Layout {
  fn default() -> Self {
    Self::new(DEFAULT_BUILD_ROOT, DEFAULT_MX_HOME, DEFAULT_JAVA_HOME)
  }
}

fn env_path(var: &str, default: impl AsRef<Path>) -> PathBuf {
  match std::env::var(var) {
    Ok(path) if !path.is_empty() => PathBuf::from(path),
    _ => default.as_ref().to_path_buf(),
  }
}
