//! Implementation of the `mandrel-build plan` command.
//!
//! Shows what `build` would do without changing anything.

use anyhow::Result;
use tracing::debug;

use mandrel_build_lib::orchestrate;
use mandrel_build_lib::paths::Layout;

use crate::cmd::BuildArgs;
use crate::output::{OutputFormat, print_info, print_json, print_step};

pub fn cmd_plan(args: &BuildArgs, verbose: bool, output: OutputFormat) -> Result<()> {
  let options = args.options(verbose)?;
  let layout = Layout::current();
  debug!(?layout, "resolved layout");
  let plan = orchestrate::plan(&options, &layout);

  if output.is_json() {
    return print_json(&plan);
  }

  match (&plan.patch_config, &options.maven_proxy) {
    (Some(path), Some(proxy)) => print_info(&format!("Would add maven proxy {} to {}", proxy, path.display())),
    _ => print_info("No maven proxy configured"),
  }

  print_info(&format!("Would run {} command(s):", plan.commands.len()));
  for command in &plan.commands {
    print_step(&format!("{}  (in {})", command, command.cwd.display()));
  }

  Ok(())
}
