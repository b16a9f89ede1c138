//! Implementation of the `mandrel-build build` command.
//!
//! Runs the whole sequence: add the Maven proxy to mx, build each artifact
//! with mx, then install its jar with Maven.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use mandrel_build_lib::execute::SystemRunner;
use mandrel_build_lib::orchestrate;
use mandrel_build_lib::paths::Layout;

use crate::cmd::BuildArgs;
use crate::output::{OutputFormat, format_duration, print_json, print_stat, print_success};

pub fn cmd_build(args: &BuildArgs, verbose: bool, output: OutputFormat) -> Result<()> {
  let options = args.options(verbose)?;
  let layout = Layout::current();
  debug!(?layout, "resolved layout");
  let start = Instant::now();

  let report = orchestrate::run(&options, &layout, &SystemRunner).context("Build failed")?;

  if output.is_json() {
    return print_json(&report);
  }

  println!();
  print_success("Build complete!");
  print_stat("Version", &options.version);
  if let Some(ref path) = report.patched_config {
    print_stat("Maven proxy added to", &path.display().to_string());
  }
  for installed in &report.installed {
    print_stat(
      "Installed",
      &format!("{}:{}:{}", installed.group_id, installed.artifact_id, installed.version),
    );
  }
  print_stat("Duration", &format_duration(start.elapsed()));

  Ok(())
}
