//! Fixed names and default locations used across the crate.

/// The build tool driven for every artifact.
pub const MX_TOOL: &str = "mx";

/// The package manager used to install built jars into the local repository.
pub const MVN_TOOL: &str = "mvn";

pub const DEFAULT_BUILD_ROOT: &str = "/tmp/mandrel";
pub const DEFAULT_MX_HOME: &str = "/opt/mx";
pub const DEFAULT_JAVA_HOME: &str = "/opt/labsjdk";

/// Location of the build output jars, relative to an artifact directory.
pub const JAR_DIST_DIR: &str = "mxbuild/dists/jdk11";

pub const MX_PY: &str = "mx.py";
pub const MX_PY_BACKUP: &str = "mx.py.backup";

/// Marker identifying the line of `mx.py` that declares the Maven repository list.
pub const MAVEN_REPO_MARKER: &str = "_mavenRepoBaseURLs";
