/// Contract tests for the on-disk config format.
use keygap_core::config::{KeygapConfig, RULE_NAME};
use keygap_core::types::{ConfigError, Severity};

#[test]
/// The documented full config shape parses.
fn full_config_parses() {
    let cfg: KeygapConfig = serde_json::from_str(
        r#"{
  "version": "0.1.0",
  "rules": {
    "no-missing-destructure-keys": {
      "severity": "warning",
      "targets": [{ "name": "useUnit", "argumentIndex": 0 }, { "name": "useGate" }],
      "ignoreKeys": ["__debug"],
      "ignoreKeyPattern": "^_"
    }
  },
  "ignore_patterns": ["**/*.stories.tsx"]
}"#,
    )
    .unwrap();
    cfg.validate().unwrap();
    let rule = cfg.destructure_rule();
    assert_eq!(rule.severity, Severity::Warn);
    assert_eq!(rule.targets.as_ref().unwrap()[1].argument_index, None);
    assert_eq!(rule.ignore_key_pattern.as_deref(), Some("^_"));
}

#[test]
/// Serialized defaults round-trip and keep the rule key name.
fn default_config_round_trips() {
    let json = serde_json::to_value(KeygapConfig::default()).unwrap();
    assert!(json["rules"].get(RULE_NAME).is_some());
    let back: KeygapConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, KeygapConfig::default());
}

#[test]
/// Negative argument indexes are rejected by the type.
fn negative_argument_index_rejected() {
    let result: Result<KeygapConfig, _> = serde_json::from_str(
        r#"{ "rules": { "no-missing-destructure-keys": { "targets": [{ "name": "f", "argumentIndex": -1 }] } } }"#,
    );
    assert!(result.is_err());
}

#[test]
/// Bad ignore globs fail validation.
fn invalid_ignore_glob_rejected() {
    let cfg: KeygapConfig = serde_json::from_str(r#"{ "ignore_patterns": ["a/[b"] }"#).unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
}
