// Tests for `keygap explain`.

use super::common::{create_project, run_keygap};

#[test]
/// Codes, message ids and the rule name all resolve to the same rule.
fn test_explain_lookups() {
    let dir = create_project(&[]);
    for query in ["K001", "k002", "cannotVerify", "no-missing-destructure-keys"] {
        let out = run_keygap(dir.path(), &["explain", query]);
        assert_eq!(out.status.code(), Some(0), "explain {query}");
        assert!(String::from_utf8_lossy(&out.stdout).starts_with("no-missing-destructure-keys"));
    }
}

#[test]
/// JSON explain carries both message templates.
fn test_explain_json() {
    let dir = create_project(&[]);
    let out = run_keygap(dir.path(), &["explain", "K001", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["command"], "explain");
    assert_eq!(value["messages"].as_array().unwrap().len(), 2);
}

#[test]
/// Unknown codes exit 2.
fn test_explain_unknown() {
    let dir = create_project(&[]);
    let out = run_keygap(dir.path(), &["explain", "E001"]);
    assert_eq!(out.status.code(), Some(2));
}
