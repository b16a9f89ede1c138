use predicates::prelude::*;
use serial_test::serial;

use crate::common::{MX_PY, TestEnv};

#[test]
#[serial]
fn restore_removes_the_proxy() {
  let env = TestEnv::new();
  env.install_tool("mx", 0);
  env.install_tool("mvn", 0);

  env
    .cmd()
    .args(["build", "--mandrel-version", "1.0", "--maven-proxy", "http://nexus"])
    .assert()
    .success();
  assert_ne!(env.mx_py(), MX_PY);

  env
    .cmd()
    .arg("restore")
    .assert()
    .success()
    .stdout(predicate::str::contains("Restored"));

  assert_eq!(env.mx_py(), MX_PY);
}

#[test]
#[serial]
fn restore_without_backup_warns() {
  let env = TestEnv::new();

  env
    .cmd()
    .arg("restore")
    .assert()
    .success()
    .stderr(predicate::str::contains("nothing to restore"));

  assert_eq!(env.mx_py(), MX_PY);
}

#[test]
#[serial]
fn restore_json_output() {
  let env = TestEnv::new();

  let output = env.cmd().args(["-o", "json", "restore"]).output().unwrap();
  assert!(output.status.success());

  let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(result["restored"], false);
}
