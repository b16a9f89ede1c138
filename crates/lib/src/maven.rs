//! Installing built jars into the local Maven repository.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::artifact::Artifact;
use crate::consts::{JAR_DIST_DIR, MVN_TOOL};
use crate::error::Result;
use crate::execute::{CommandSpec, ProcessRunner};
use crate::mx::java_home_env;
use crate::options::BuildOptions;
use crate::paths::Layout;

/// What `mvn install:install-file` was asked to install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledArtifact {
  pub artifact: Artifact,
  pub group_id: &'static str,
  pub artifact_id: &'static str,
  pub version: String,
  pub jar: PathBuf,
}

/// Path of the jar mx produces for an artifact.
pub fn jar_path(artifact: Artifact, layout: &Layout) -> PathBuf {
  layout
    .artifact_dir(artifact.name())
    .join(JAR_DIST_DIR)
    .join(format!("{}.jar", artifact.artifact_id()))
}

/// Command line installing the artifact's jar with checksums.
pub fn install_command(artifact: Artifact, options: &BuildOptions, layout: &Layout) -> CommandSpec {
  CommandSpec::new(
    [
      MVN_TOOL.to_string(),
      if options.verbose { "--debug" } else { "" }.to_string(),
      "install:install-file".to_string(),
      format!("-DgroupId={}", artifact.group_id()),
      format!("-DartifactId={}", artifact.artifact_id()),
      format!("-Dversion={}", options.version),
      "-Dpackaging=jar".to_string(),
      format!("-Dfile={}", jar_path(artifact, layout).display()),
      "-DcreateChecksum=true".to_string(),
    ],
    layout.artifact_dir(artifact.name()),
    vec![java_home_env(layout)],
  )
}

/// Install an artifact, looked up by name, into the local Maven repository.
///
/// An unknown name fails with [`crate::BuildError::UnknownArtifact`] before
/// anything is run.
pub fn install(
  artifact_name: &str,
  options: &BuildOptions,
  layout: &Layout,
  runner: &impl ProcessRunner,
) -> Result<InstalledArtifact> {
  let artifact: Artifact = artifact_name.parse()?;

  info!(
    artifact = %artifact,
    group_id = artifact.group_id(),
    artifact_id = artifact.artifact_id(),
    version = %options.version,
    "installing"
  );
  runner.run(&install_command(artifact, options, layout))?;

  Ok(InstalledArtifact {
    artifact,
    group_id: artifact.group_id(),
    artifact_id: artifact.artifact_id(),
    version: options.version.clone(),
    jar: jar_path(artifact, layout),
  })
}
