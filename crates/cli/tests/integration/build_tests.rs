use predicates::prelude::*;
use serial_test::serial;

use crate::common::TestEnv;

#[test]
#[serial]
fn build_runs_mx_then_mvn() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .args(["build", "--mandrel-version", "20.1.0.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Build complete!"))
    .stdout(predicate::str::contains("io.mandrel.sdk:graal-sdk:20.1.0.0"));

  let sdk_dir = env.build_root().join("sdk");
  let java_home = env.java_home();
  let calls = env.tool_calls();
  assert_eq!(calls.len(), 2, "unexpected tool calls: {calls:?}");

  assert_eq!(
    calls[0],
    format!(
      "mx build --no-native | JAVA_HOME={} | PWD={}",
      java_home.display(),
      sdk_dir.display()
    )
  );
  assert_eq!(
    calls[1],
    format!(
      "mvn install:install-file -DgroupId=io.mandrel.sdk -DartifactId=graal-sdk -Dversion=20.1.0.0 \
       -Dpackaging=jar -Dfile={}/mxbuild/dists/jdk11/graal-sdk.jar -DcreateChecksum=true | JAVA_HOME={} | PWD={}",
      sdk_dir.display(),
      java_home.display(),
      sdk_dir.display()
    )
  );
}

#[test]
#[serial]
fn version_can_come_from_environment() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .arg("build")
    .env("MANDREL_VERSION", "21.0")
    .assert()
    .success();

  assert!(env.tool_calls()[1].contains("-Dversion=21.0"));
}

#[test]
#[serial]
fn verbose_build_passes_verbose_flags() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .args(["--verbose", "build", "--mandrel-version", "1.0"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Execute"));

  let calls = env.tool_calls();
  assert!(calls[0].starts_with("mx -V build --no-native"));
  assert!(calls[1].starts_with("mvn --debug install:install-file"));
}

#[test]
#[serial]
fn failed_mx_stops_before_install() {
  let env = TestEnv::new();
  env.install_tool("mx", 1);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("mx failed, exit code: 1"));

  let calls = env.tool_calls();
  assert_eq!(calls.len(), 1);
  assert!(calls[0].starts_with("mx "));
}

#[test]
#[serial]
fn failed_mvn_fails_the_build() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 3);

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("mvn failed, exit code: 3"));

  assert_eq!(env.tool_calls().len(), 2);
}

#[test]
#[serial]
fn missing_checkout_is_launch_failure() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);
  std::fs::remove_dir(env.build_root().join("sdk")).unwrap();

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to launch mx"));

  assert!(env.tool_calls().is_empty());
}

#[test]
#[serial]
fn maven_proxy_is_added_to_mx_py() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0", "--maven-proxy", "http://nexus:8081/repository/maven"])
    .assert()
    .success();

  let patched = env.mx_py();
  assert!(patched.contains(
    r#"_mavenRepoBaseURLs = [ "http://nexus:8081/repository/maven/","https://repo1.maven.org/maven2/""#
  ));
  assert!(env.mx_home().join("mx.py.backup").exists());

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0"])
    .env("MAVEN_PROXY", "http://nexus:8081/repository/maven")
    .assert()
    .success();

  assert_eq!(env.mx_py(), patched);
}

#[test]
#[serial]
fn no_proxy_leaves_mx_py_untouched() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0"])
    .assert()
    .success();

  assert_eq!(env.mx_py(), crate::common::MX_PY);
  assert!(!env.mx_home().join("mx.py.backup").exists());
}

#[test]
#[serial]
fn json_output_reports_installed_artifacts() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  let output = env
    .cmd()
    .args(["--output", "json", "build", "--mandrel-version", "1.0"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["built"], serde_json::json!(["sdk"]));
  assert_eq!(report["installed"][0]["artifact_id"], "graal-sdk");
  assert_eq!(report["installed"][0]["version"], "1.0");
  assert!(report["patched_config"].is_null());
}
