//! Maven proxy injection into `mx.py`.
//!
//! mx keeps its list of Maven repositories in `mx.py` itself. To make it
//! fetch through a proxy, the proxy URL is prepended to that list. The
//! pristine file is kept next to it as `mx.py.backup` and restored before
//! every patch, so repeated runs always start from the same content.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::MAVEN_REPO_MARKER;
use crate::error::{BuildError, Result};
use crate::options::BuildOptions;
use crate::paths::Layout;

/// Prepend the configured Maven proxy to mx's repository list.
///
/// Returns the patched file, or `None` when no proxy is configured (in which
/// case neither `mx.py` nor its backup is touched).
pub fn hook_maven_proxy(options: &BuildOptions, layout: &Layout) -> Result<Option<PathBuf>> {
  let Some(proxy) = options.maven_proxy.as_deref() else {
    debug!("no maven proxy configured, leaving mx.py alone");
    return Ok(None);
  };

  let mx_py = backup_or_restore(layout)?;
  prepend_maven_proxy_to_file(&mx_py, proxy)?;

  info!(proxy, path = %mx_py.display(), "maven proxy added to mx");
  Ok(Some(mx_py))
}

/// Copy `mx.py.backup` back over `mx.py`, undoing any proxy patch.
///
/// Returns `false` if there is no backup to restore from.
pub fn restore_mx_py(layout: &Layout) -> Result<bool> {
  let backup = layout.mx_py_backup();
  if !backup.exists() {
    return Ok(false);
  }

  let mx_py = layout.mx_py();
  fs::copy(&backup, &mx_py).map_err(|source| patch_failure(&mx_py, source))?;
  info!(path = %mx_py.display(), "restored mx.py from backup");
  Ok(true)
}

/// Rewrite one line of `mx.py`, putting `proxy` first in the repository list
/// if this is the line declaring it.
pub fn prepend_maven_proxy(line: &str, proxy: &str) -> String {
  if !line.contains(MAVEN_REPO_MARKER) {
    return line.to_string();
  }

  let base_url = format!("\"{}/\"", proxy.trim_end_matches('/'));
  line.replacen('[', &format!("[ {base_url},"), 1)
}

/// Make sure `mx.py` holds pristine content and return its path.
///
/// The first run saves a backup; later runs restore from it. A backup that
/// cannot be written for lack of permission is skipped: the file is then
/// assumed to be protected already.
fn backup_or_restore(layout: &Layout) -> Result<PathBuf> {
  let mx_py = layout.mx_py();
  let backup = layout.mx_py_backup();

  if !backup.exists() {
    fs::metadata(&mx_py).map_err(|source| patch_failure(&mx_py, source))?;
    ignore_access_denied(fs::copy(&mx_py, &backup), &backup)?;
  } else {
    fs::copy(&backup, &mx_py).map_err(|source| patch_failure(&mx_py, source))?;
    debug!(backup = %backup.display(), "restored mx.py before patching");
  }

  Ok(mx_py)
}

/// Settle the outcome of writing the backup. Permission denied is not an error.
fn ignore_access_denied(copied: io::Result<u64>, backup: &Path) -> Result<()> {
  match copied {
    Ok(_) => debug!(backup = %backup.display(), "saved mx.py backup"),
    Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
      debug!(backup = %backup.display(), "no permission to back up mx.py, continuing without backup");
    }
    Err(e) => return Err(patch_failure(backup, e)),
  }
  Ok(())
}

fn prepend_maven_proxy_to_file(mx_py: &Path, proxy: &str) -> Result<()> {
  let content = fs::read_to_string(mx_py).map_err(|source| patch_failure(mx_py, source))?;

  let mut patched = String::with_capacity(content.len() + proxy.len() + 8);
  for line in content.lines() {
    patched.push_str(&prepend_maven_proxy(line, proxy));
    patched.push('\n');
  }

  fs::write(mx_py, patched).map_err(|source| patch_failure(mx_py, source))
}

fn patch_failure(path: &Path, source: io::Error) -> BuildError {
  BuildError::ConfigPatchFailure {
    path: path.to_path_buf(),
    source,
  }
}
