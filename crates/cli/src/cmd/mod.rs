mod build;
mod plan;
mod restore;

pub use build::cmd_build;
pub use plan::cmd_plan;
pub use restore::cmd_restore;

use clap::Args;

use mandrel_build_lib::BuildError;
use mandrel_build_lib::options::BuildOptions;

/// Startup options shared by `build` and `plan`.
#[derive(Debug, Args)]
pub struct BuildArgs {
  /// Mandrel version stamped on the installed artifacts
  #[arg(long, env = "MANDREL_VERSION")]
  pub mandrel_version: Option<String>,

  /// Maven repository proxy to put first in mx's repository list
  #[arg(long, env = "MAVEN_PROXY")]
  pub maven_proxy: Option<String>,
}

impl BuildArgs {
  pub fn options(&self, verbose: bool) -> Result<BuildOptions, BuildError> {
    BuildOptions::new(self.mandrel_version.clone(), verbose, self.maven_proxy.clone())
  }
}
