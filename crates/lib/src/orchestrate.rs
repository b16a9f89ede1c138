//! The build sequence: patch mx, build, install.
//!
//! Stages run strictly in order and each one must succeed before the next
//! starts. The first failure ends the run; the only thing left behind for
//! recovery is the `mx.py` backup.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, info_span};

use crate::artifact::Artifact;
use crate::error::Result;
use crate::execute::{CommandSpec, ProcessRunner};
use crate::maven::{self, InstalledArtifact};
use crate::mx;
use crate::options::BuildOptions;
use crate::paths::Layout;

/// Artifacts built by a run, in order.
pub const ARTIFACTS: [Artifact; 1] = [Artifact::Sdk];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
  PatchConfig,
  Build,
  Install,
}

impl Stage {
  pub const fn first() -> Self {
    Stage::PatchConfig
  }

  /// The stage after this one, or `None` once the run is complete.
  pub const fn next(self) -> Option<Self> {
    match self {
      Stage::PatchConfig => Some(Stage::Build),
      Stage::Build => Some(Stage::Install),
      Stage::Install => None,
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      Stage::PatchConfig => "patch-config",
      Stage::Build => "build",
      Stage::Install => "install",
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
  /// The mx configuration file that received the proxy, if one was configured.
  pub patched_config: Option<PathBuf>,
  pub built: Vec<Artifact>,
  pub installed: Vec<InstalledArtifact>,
}

/// Run every stage against `runner`.
pub fn run(options: &BuildOptions, layout: &Layout, runner: &impl ProcessRunner) -> Result<BuildReport> {
  info!(version = %options.version, "Build Mandrel");

  let mut report = BuildReport::default();
  let mut stage = Some(Stage::first());

  while let Some(current) = stage {
    let _span = info_span!("stage", name = %current).entered();

    match current {
      Stage::PatchConfig => report.patched_config = mx::proxy::hook_maven_proxy(options, layout)?,
      Stage::Build => {
        for artifact in ARTIFACTS {
          mx::build(artifact.name(), options, layout, runner)?;
          report.built.push(artifact);
        }
      }
      Stage::Install => {
        for artifact in ARTIFACTS {
          report.installed.push(maven::install(artifact.name(), options, layout, runner)?);
        }
      }
    }

    stage = current.next();
  }

  info!(installed = report.installed.len(), "Build complete");
  Ok(report)
}

/// What a run would do, without doing any of it.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
  /// `mx.py` path that would be patched, if a proxy is configured.
  pub patch_config: Option<PathBuf>,
  pub commands: Vec<CommandSpec>,
}

pub fn plan(options: &BuildOptions, layout: &Layout) -> BuildPlan {
  let build = ARTIFACTS.iter().map(|a| mx::build_command(a.name(), options, layout));
  let install = ARTIFACTS.iter().map(|a| maven::install_command(*a, options, layout));

  BuildPlan {
    patch_config: options.maven_proxy.as_ref().map(|_| layout.mx_py()),
    commands: build.chain(install).collect(),
  }
}
