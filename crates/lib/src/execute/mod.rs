//! Subprocess execution.
//!
//! A [`CommandSpec`] is built per invocation and handed to a
//! [`ProcessRunner`]. [`SystemRunner`] is the only production runner; tests
//! substitute a recording one.

mod cmd;
mod types;

pub use cmd::{ProcessRunner, SystemRunner};
pub use types::{CommandSpec, EnvVar};
