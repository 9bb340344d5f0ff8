//! `keygap config` command: get or set configuration values.
//!
//! Supports dot-notation for nested keys:
//!   keygap config                                                  # dump full config as JSON
//!   keygap config rules.no-missing-destructure-keys.severity       # get a value
//!   keygap config rules.no-missing-destructure-keys.severity warn  # set a scalar
//!   keygap config rules.no-missing-destructure-keys.targets '[{"name":"useUnit"}]'

use std::fs;
use std::path::Path;

use keygap_core::config::{find_config_dir, KeygapConfig, CONFIG_FILE};
use keygap_output::OutputFormatter;

pub fn run(
    _formatter: &dyn OutputFormatter,
    _verbose: bool,
    key: Option<String>,
    value: Option<String>,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("keygap config: failed to get current directory: {}", e);
            return 2;
        }
    };

    let Some(config_dir) = find_config_dir(&cwd) else {
        eprintln!("keygap config: not initialized. Run `keygap init` first.");
        return 2;
    };

    let config = match KeygapConfig::load(&config_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("keygap config: {}", e);
            return 2;
        }
    };

    match (key, value) {
        (None, None) => dump_config(&config),
        (Some(k), None) => get_config(&config, &k),
        (Some(k), Some(v)) => set_config(&config, &config_dir.join(CONFIG_FILE), &k, &v),
        (None, Some(_)) => {
            eprintln!("keygap config: value provided without key");
            2
        }
    }
}

fn dump_config(config: &KeygapConfig) -> i32 {
    match serde_json::to_string_pretty(config) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("keygap config: failed to serialize: {}", e);
            2
        }
    }
}

fn get_config(config: &KeygapConfig, key: &str) -> i32 {
    let json_value = match serde_json::to_value(config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("keygap config: failed to serialize: {}", e);
            return 2;
        }
    };

    match resolve_dot_path(&json_value, key) {
        Some(v) => {
            let output = match v {
                serde_json::Value::String(s) => s.to_string(),
                other => other.to_string(),
            };
            println!("{}", output);
            0
        }
        None => {
            eprintln!("keygap config: unknown key '{}'", key);
            1
        }
    }
}

fn set_config(config: &KeygapConfig, config_path: &Path, key: &str, value: &str) -> i32 {
    match apply_setting(config, key, value) {
        Ok(updated) => write_config(config_path, &updated, key, value),
        Err(msg) => {
            eprintln!("keygap config: {}", msg);
            1
        }
    }
}

/// Set `key` to `value` and re-validate the whole config.
///
/// A value that looks like a number or bool but does not fit the field is
/// retried as a plain string, so `ignoreKeyPattern 123` stores the pattern.
fn apply_setting(config: &KeygapConfig, key: &str, value: &str) -> Result<KeygapConfig, String> {
    let parsed = parse_value(value);
    let fallback = match &parsed {
        serde_json::Value::Bool(_) | serde_json::Value::Number(_) => {
            Some(serde_json::Value::String(value.to_string()))
        }
        _ => None,
    };

    match apply_value(config, key, parsed) {
        Ok(updated) => Ok(updated),
        Err(err) => match fallback {
            Some(as_string) => apply_value(config, key, as_string).map_err(|_| err),
            None => Err(err),
        },
    }
}

fn apply_value(
    config: &KeygapConfig,
    key: &str,
    new_value: serde_json::Value,
) -> Result<KeygapConfig, String> {
    let mut json_value =
        serde_json::to_value(config).map_err(|e| format!("failed to serialize: {}", e))?;

    if !set_dot_path(&mut json_value, key, new_value) {
        return Err(format!("unknown key '{}'", key));
    }

    let updated: KeygapConfig = serde_json::from_value(json_value)
        .map_err(|e| format!("invalid value for '{}': {}", key, e))?;
    updated
        .validate()
        .map_err(|e| format!("invalid value for '{}': {}", key, e))?;

    // Keys serde silently drops (typos at the top level) never round-trip.
    let round_trip =
        serde_json::to_value(&updated).map_err(|e| format!("failed to serialize: {}", e))?;
    if resolve_dot_path(&round_trip, key).is_none() {
        return Err(format!("unknown key '{}'", key));
    }
    Ok(updated)
}

fn write_config(config_path: &Path, config: &KeygapConfig, key: &str, value: &str) -> i32 {
    let json = match serde_json::to_string_pretty(config) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("keygap config: failed to serialize: {}", e);
            return 2;
        }
    };
    match fs::write(config_path, json + "\n") {
        Ok(_) => {
            eprintln!("keygap config: {} = {}", key, value);
            0
        }
        Err(e) => {
            eprintln!("keygap config: failed to write config: {}", e);
            2
        }
    }
}

fn parse_value(value: &str) -> serde_json::Value {
    match value {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        "null" => serde_json::Value::Null,
        _ => {
            if value.starts_with('[') || value.starts_with('{') || value.starts_with('"') {
                if let Ok(v) = serde_json::from_str(value) {
                    return v;
                }
            }
            if let Ok(n) = value.parse::<i64>() {
                serde_json::Value::Number(n.into())
            } else {
                serde_json::Value::String(value.to_string())
            }
        }
    }
}

fn resolve_dot_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            serde_json::Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            other => other.get(segment)?,
        };
    }
    Some(current)
}

/// Replace or insert the leaf at `path`. Intermediate segments must exist and
/// numeric segments index arrays; the leaf may be new only when its parent is
/// an object.
fn set_dot_path(value: &mut serde_json::Value, path: &str, new_value: serde_json::Value) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = value;
    for segment in parents {
        let next = match current {
            serde_json::Value::Array(items) => match segment.parse::<usize>() {
                Ok(index) => items.get_mut(index),
                Err(_) => None,
            },
            other => other.get_mut(*segment),
        };
        current = match next {
            Some(v) => v,
            None => return false,
        };
    }

    match current {
        serde_json::Value::Object(map) => {
            map.insert(last.to_string(), new_value);
            true
        }
        serde_json::Value::Array(items) => {
            match last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                Some(slot) => {
                    *slot = new_value;
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
