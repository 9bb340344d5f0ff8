use std::path::{Path, PathBuf};

use keygap_core::config::{find_config_dir, KeygapConfig};
use keygap_core::types::ConfigError;
use keygap_enforce::engine::{Engine, SourceInput};
use keygap_enforce::types::CheckResult;
use keygap_output::OutputFormatter;
use keygap_parsers::treesitter::detect_language;
use keygap_parsers::walker::FileWalker;

/// Run `keygap check`: validate the given files, or every source file under
/// the project root.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    files: Vec<String>,
    strict: bool,
    suppress: Vec<String>,
    config_path: Option<PathBuf>,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("keygap check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let (config, root) = match load_config(&cwd, config_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("keygap check: {}", e);
            return 2;
        }
    };

    let mut engine = Engine::from_config(&config);
    for code in &suppress {
        engine.suppress(code);
    }
    if !engine.is_active() && verbose {
        eprintln!("keygap check: no targets configured or rule is off; nothing to check");
    }

    let inputs = if files.is_empty() {
        walk_inputs(&root, &config.ignore_patterns)
    } else {
        explicit_inputs(&cwd, &root, &files)
    };
    tracing::debug!(files = inputs.len(), root = %root.display(), "collected inputs");

    let result = engine.check_inputs(&inputs);
    for skipped in &result.skipped {
        eprintln!("keygap check: skipped {}: {}", skipped.file, skipped.reason);
    }
    output_result(formatter, &result, strict, verbose)
}

/// Resolve the config and the project root that display paths are relative to.
///
/// `--config` wins; otherwise the nearest `.keygap/` above `cwd` is used. With
/// neither, defaults apply and `cwd` is the root.
fn load_config(
    cwd: &Path,
    explicit: Option<&Path>,
) -> Result<(KeygapConfig, PathBuf), ConfigError> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        return Ok((KeygapConfig::load_file(&path)?, cwd.to_path_buf()));
    }
    match find_config_dir(cwd) {
        Some(dir) => {
            let root = dir.parent().unwrap_or(cwd).to_path_buf();
            tracing::debug!(config = %dir.display(), "using config directory");
            Ok((KeygapConfig::load(&dir)?, root))
        }
        None => Ok((KeygapConfig::default(), cwd.to_path_buf())),
    }
}

fn walk_inputs(root: &Path, ignore_patterns: &[String]) -> Vec<SourceInput> {
    FileWalker::new(root)
        .with_excludes(ignore_patterns)
        .walk()
        .into_iter()
        .map(|entry| SourceInput {
            display: display_path(root, &entry.path),
            path: entry.path,
            language: entry.language,
        })
        .collect()
}

fn explicit_inputs(cwd: &Path, root: &Path, files: &[String]) -> Vec<SourceInput> {
    let mut inputs = Vec::new();
    for file in files {
        let path = Path::new(file);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        let Some(language) = detect_language(&path) else {
            tracing::warn!(file = %file, "unsupported file type, skipping");
            continue;
        };
        inputs.push(SourceInput {
            display: display_path(root, &path),
            path,
            language: language.to_string(),
        });
    }
    inputs
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn output_result(
    formatter: &dyn OutputFormatter,
    result: &CheckResult,
    strict: bool,
    verbose: bool,
) -> i32 {
    let has_errors = result.has_errors();
    let has_warnings = result.has_warnings();

    let output = formatter.format_check(result);
    if !output.is_empty() {
        println!("{}", output);
    }

    if !has_errors && !has_warnings {
        if verbose {
            eprintln!(
                "keygap check: clean, {} site(s) in {} file(s)",
                result.info.sites_checked,
                result.files_analyzed.len()
            );
        }
        return 0;
    }

    if has_errors || (strict && has_warnings) {
        1
    } else {
        0
    }
}
