// Tests for `keygap check` end to end through the binary.

use super::common::{create_configured_project, run_keygap, USE_UNIT_CONFIG};

const TASKS_TS: &str = r#"import { useUnit } from "effector-react";
import * as taskModel from "./model";

export function TaskView() {
  const { runTask, taskResult } = useUnit({
    runTask: taskModel.runTask,
    taskResult: taskModel.$taskResult,
    isTaskPending: taskModel.isTaskPending,
  });
  return taskResult;
}
"#;

const CLEAN_TS: &str = r#"
const { runTask, taskResult } = useUnit({ runTask, taskResult, _private, __debug });
const { a, ...rest } = useUnit({ a, b, c });
"#;

#[test]
/// Missing keys are reported rustc-style with file, line and column.
fn test_check_reports_missing_keys_human() {
    let dir = create_configured_project(USE_UNIT_CONFIG, &[("src/tasks.ts", TASKS_TS)]);
    let out = run_keygap(dir.path(), &["check"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains(
        "error[K001]: Keys provided to useUnit(...) must be destructured from its result. Missing: isTaskPending."
    ));
    assert!(stdout.contains("  --> src/tasks.ts:5:9"));
    assert!(stdout.contains("1 error(s), 0 warning(s) in 1 file(s)"));
}

#[test]
/// Ignored keys (literal and pattern) and rest elements keep output empty.
fn test_check_clean_project_is_silent() {
    let dir = create_configured_project(USE_UNIT_CONFIG, &[("src/clean.ts", CLEAN_TS)]);
    let out = run_keygap(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).trim().is_empty());
}

#[test]
/// --json emits a parseable CheckResult even for clean runs.
fn test_check_json_output() {
    let dir = create_configured_project(
        USE_UNIT_CONFIG,
        &[
            ("src/tasks.ts", TASKS_TS),
            ("src/spread.js", "const { a } = useUnit({ a, ...more });\n"),
        ],
    );
    let out = run_keygap(dir.path(), &["check", "--json"]);
    assert_eq!(out.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["command"], "check");
    assert_eq!(value["status"], "error");
    assert_eq!(value["files_analyzed"].as_array().unwrap().len(), 2);
    let errors = value["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["file"], "src/spread.js");
    assert_eq!(errors[0]["code"], "K002");
    assert_eq!(errors[1]["file"], "src/tasks.ts");
    assert_eq!(errors[1]["missing_keys"][0], "isTaskPending");
}

#[test]
/// --llm emits one compact line per violation.
fn test_check_llm_output() {
    let dir = create_configured_project(USE_UNIT_CONFIG, &[("src/tasks.ts", TASKS_TS)]);
    let out = run_keygap(dir.path(), &["check", "--llm"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("CHECK files=1 sites=1 errors=1 warnings=0 suppressed=0"));
    assert!(stdout.contains("K001 src/tasks.ts:5:9 fn=useUnit missing=isTaskPending"));
}

#[test]
/// Explicit files are checked even when the walker would skip them.
fn test_check_explicit_files() {
    let dir = create_configured_project(
        USE_UNIT_CONFIG,
        &[
            ("src/tasks.ts", TASKS_TS),
            ("src/other.ts", "const { x } = useUnit({ x, y });\n"),
        ],
    );
    let out = run_keygap(dir.path(), &["check", "--json", "src/other.ts"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["files_analyzed"], serde_json::json!(["src/other.ts"]));
    assert_eq!(value["errors"][0]["missing_keys"], serde_json::json!(["y"]));
}

#[test]
/// ignore_patterns and .keygapignore both exclude files from the walk.
fn test_check_respects_ignores() {
    let config = r#"{
  "rules": { "no-missing-destructure-keys": { "targets": [{ "name": "useUnit" }] } },
  "ignore_patterns": ["generated/**"]
}"#;
    let dir = create_configured_project(
        config,
        &[
            ("generated/api.ts", "const { a } = useUnit({ a, b });\n"),
            ("legacy/old.ts", "const { a } = useUnit({ a, b });\n"),
            (".keygapignore", "legacy/\n"),
            ("node_modules/lib/index.js", "const { a } = useUnit({ a, b });\n"),
            ("src/ok.ts", "const { a } = useUnit({ a });\n"),
        ],
    );
    let out = run_keygap(dir.path(), &["check", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["files_analyzed"], serde_json::json!(["src/ok.ts"]));
}

#[test]
/// --suppress moves matching violations to the suppressed list.
fn test_check_suppress_flag() {
    let dir = create_configured_project(USE_UNIT_CONFIG, &[("src/tasks.ts", TASKS_TS)]);
    let out = run_keygap(dir.path(), &["check", "--json", "--suppress", "missingKeys"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["errors"], serde_json::json!([]));
    assert_eq!(value["suppressed"][0]["code"], "S001");
    assert_eq!(
        value["suppressed"][0]["suppress_hint"],
        "Suppressed K001 via --suppress flag"
    );
}

#[test]
/// The config is found from a nested working directory; paths stay root-relative.
fn test_check_from_subdirectory() {
    let dir = create_configured_project(USE_UNIT_CONFIG, &[("packages/app/src/tasks.ts", TASKS_TS)]);
    let out = run_keygap(&dir.path().join("packages/app"), &["check", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["errors"][0]["file"], "packages/app/src/tasks.ts");
}
