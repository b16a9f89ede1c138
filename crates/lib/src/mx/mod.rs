//! Driving the `mx` build tool.
//!
//! [`build`] compiles an artifact checkout without native images. The
//! [`proxy`] submodule rewrites mx's own configuration so its dependency
//! downloads go through a Maven proxy.

pub mod proxy;

use tracing::info;

use crate::consts::MX_TOOL;
use crate::error::Result;
use crate::execute::{CommandSpec, EnvVar, ProcessRunner};
use crate::options::BuildOptions;
use crate::paths::Layout;

/// The `JAVA_HOME` override handed to every tool invocation.
pub fn java_home_env(layout: &Layout) -> EnvVar {
  EnvVar::new("JAVA_HOME", layout.java_home.to_string_lossy())
}

/// Command line for `mx build` in the artifact's directory.
pub fn build_command(artifact_name: &str, options: &BuildOptions, layout: &Layout) -> CommandSpec {
  CommandSpec::new(
    [MX_TOOL, if options.verbose { "-V" } else { "" }, "build", "--no-native"],
    layout.artifact_dir(artifact_name),
    vec![java_home_env(layout)],
  )
}

/// Build an artifact with mx.
pub fn build(
  artifact_name: &str,
  options: &BuildOptions,
  layout: &Layout,
  runner: &impl ProcessRunner,
) -> Result<()> {
  info!(artifact = artifact_name, "building");
  runner.run(&build_command(artifact_name, options, layout))
}
