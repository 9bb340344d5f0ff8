// Tests for `keygap init`.

use std::fs;

use super::common::{create_project, run_keygap};

#[test]
/// init writes a loadable config with an empty target list and an ignore file.
fn test_init_creates_files() {
    let dir = create_project(&[]);
    let out = run_keygap(dir.path(), &["init"]);
    assert_eq!(out.status.code(), Some(0));

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(".keygap/keygap.json")).unwrap())
            .unwrap();
    assert_eq!(
        config["rules"]["no-missing-destructure-keys"]["targets"],
        serde_json::json!([])
    );
    assert!(dir.path().join(".keygapignore").exists());
}

#[test]
/// A second init refuses to overwrite and exits 2.
fn test_init_twice_exits_2() {
    let dir = create_project(&[]);
    assert_eq!(run_keygap(dir.path(), &["init"]).status.code(), Some(0));
    let out = run_keygap(dir.path(), &["init"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));
}

#[test]
/// A freshly initialized project checks nothing until targets are added.
fn test_init_then_check_is_noop() {
    let dir = create_project(&[("src/a.ts", "const { a } = useUnit({ a, b });\n")]);
    assert_eq!(run_keygap(dir.path(), &["init"]).status.code(), Some(0));
    let out = run_keygap(dir.path(), &["check", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["info"]["rule_active"], false);
    assert_eq!(value["info"]["sites_checked"], 0);
}
