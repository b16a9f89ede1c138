//! Startup options for a build run.

use serde::Serialize;

use crate::error::{BuildError, Result};

/// Immutable configuration for one build run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
  /// Version stamped on installed artifacts.
  pub version: String,
  /// Ask the external tools for verbose output.
  pub verbose: bool,
  /// Maven repository proxy to put first in the build tool's repository list.
  pub maven_proxy: Option<String>,
}

impl BuildOptions {
  /// Validate raw startup inputs.
  ///
  /// A missing or blank version fails with [`BuildError::MissingOption`].
  /// A blank proxy is treated as no proxy.
  pub fn new(version: Option<String>, verbose: bool, maven_proxy: Option<String>) -> Result<Self> {
    let version = version
      .map(|v| v.trim().to_string())
      .filter(|v| !v.is_empty())
      .ok_or(BuildError::MissingOption("version"))?;

    let maven_proxy = maven_proxy.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());

    Ok(Self {
      version,
      verbose,
      maven_proxy,
    })
  }
}
