//! Artifacts the orchestrator knows how to build and install.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BuildError;

/// A supported artifact, carrying its Maven coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Artifact {
  Sdk,
  Substratevm,
}

impl Artifact {
  pub const ALL: [Artifact; 2] = [Artifact::Sdk, Artifact::Substratevm];

  /// Name of the artifact's directory under the build root.
  pub const fn name(&self) -> &'static str {
    match self {
      Artifact::Sdk => "sdk",
      Artifact::Substratevm => "substratevm",
    }
  }

  pub const fn group_id(&self) -> &'static str {
    match self {
      Artifact::Sdk => "io.mandrel.sdk",
      Artifact::Substratevm => "io.mandrel.nativeimage",
    }
  }

  pub const fn artifact_id(&self) -> &'static str {
    match self {
      Artifact::Sdk => "graal-sdk",
      Artifact::Substratevm => "svm",
    }
  }
}

impl FromStr for Artifact {
  type Err = BuildError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Artifact::ALL
      .into_iter()
      .find(|a| a.name() == s)
      .ok_or_else(|| BuildError::UnknownArtifact(s.to_string()))
  }
}

impl fmt::Display for Artifact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
