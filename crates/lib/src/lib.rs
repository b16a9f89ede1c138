//! mandrel-build-lib: building and installing Mandrel artifacts
//!
//! A run is a fixed sequence of external tool invocations:
//! - `mx::proxy`: optionally point mx's Maven repository list at a proxy
//! - `mx`: build each artifact with `mx build --no-native`
//! - `maven`: install the resulting jar with `mvn install:install-file`
//!
//! [`orchestrate::run`] drives the sequence; every subprocess goes through a
//! [`execute::ProcessRunner`].

pub mod artifact;
pub mod consts;
pub mod error;
pub mod execute;
pub mod maven;
pub mod mx;
pub mod options;
pub mod orchestrate;
pub mod paths;
pub mod util;

pub use error::{BuildError, Result};
