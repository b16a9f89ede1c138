//! Implementation of the `mandrel-build restore` command.

use anyhow::{Context, Result};
use serde_json::json;

use mandrel_build_lib::mx::proxy::restore_mx_py;
use mandrel_build_lib::paths::Layout;

use crate::output::{OutputFormat, print_json, print_success, print_warning};

/// Put the pristine `mx.py` back, removing any Maven proxy added by `build`.
pub fn cmd_restore(output: OutputFormat) -> Result<()> {
  let layout = Layout::current();
  let restored = restore_mx_py(&layout).context("Failed to restore mx.py")?;

  if output.is_json() {
    return print_json(&json!({
      "restored": restored,
      "path": layout.mx_py(),
    }));
  }

  if restored {
    print_success(&format!("Restored {}", layout.mx_py().display()));
  } else {
    print_warning(&format!(
      "No backup at {}, nothing to restore",
      layout.mx_py_backup().display()
    ));
  }

  Ok(())
}
