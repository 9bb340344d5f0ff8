// Tests for CLI exit code behavior: 0 clean, 1 violations, 2 internal error.

use super::common::{create_configured_project, run_keygap};

const WARN_CONFIG: &str = r#"{
  "rules": {
    "no-missing-destructure-keys": {
      "severity": "warn",
      "targets": [{ "name": "useUnit" }]
    }
  }
}"#;

const MISSING: &str = "const { a } = useUnit({ a, b });\n";

#[test]
/// Warnings alone exit 0; --strict turns them into exit 1.
fn test_warnings_and_strict() {
    let dir = create_configured_project(WARN_CONFIG, &[("src/a.ts", MISSING)]);
    let out = run_keygap(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("warning[K001]"));

    let out = run_keygap(dir.path(), &["check", "--strict"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
/// A malformed config is an internal error, never silently ignored.
fn test_malformed_config_exits_2() {
    let dir = create_configured_project("{ \"rules\": ", &[("src/a.ts", MISSING)]);
    let out = run_keygap(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("keygap check:"));
}

#[test]
/// Unknown rule options are rejected.
fn test_unknown_rule_option_exits_2() {
    let config = r#"{ "rules": { "no-missing-destructure-keys": { "targetz": [] } } }"#;
    let dir = create_configured_project(config, &[("src/a.ts", MISSING)]);
    assert_eq!(run_keygap(dir.path(), &["check"]).status.code(), Some(2));
}

#[test]
/// A missing --config file is an internal error.
fn test_missing_explicit_config_exits_2() {
    let dir = create_configured_project(WARN_CONFIG, &[("src/a.ts", MISSING)]);
    let out = run_keygap(dir.path(), &["check", "--config", "nope.json"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
/// Severity off disables reporting entirely.
fn test_severity_off_exits_0() {
    let config = r#"{ "rules": { "no-missing-destructure-keys": { "severity": "off", "targets": [{ "name": "useUnit" }] } } }"#;
    let dir = create_configured_project(config, &[("src/a.ts", MISSING)]);
    let out = run_keygap(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).trim().is_empty());
}
