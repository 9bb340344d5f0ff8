use std::fs;
use std::path::Path;

use keygap_core::config::{DestructureRuleConfig, KeygapConfig, RulesConfig, CONFIG_DIR, CONFIG_FILE};
use keygap_core::types::Severity;
use keygap_output::OutputFormatter;
use keygap_parsers::walker::IGNORE_FILENAME;

const IGNORE_TEMPLATE: &str = "\
# keygap ignore file (gitignore syntax)
node_modules/
dist/
build/
coverage/
*.d.ts
";

/// Run `keygap init`: create `.keygap/keygap.json` and `.keygapignore`.
pub fn run(_formatter: &dyn OutputFormatter, verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("keygap init: failed to get current directory: {}", e);
            return 2;
        }
    };
    init_in(&cwd, verbose)
}

fn init_in(root: &Path, verbose: bool) -> i32 {
    let config_dir = root.join(CONFIG_DIR);
    if config_dir.exists() {
        eprintln!("keygap init: {}/ directory already exists", CONFIG_DIR);
        return 2;
    }

    if let Err(e) = fs::create_dir_all(&config_dir) {
        eprintln!("keygap init: failed to create {}/: {}", CONFIG_DIR, e);
        return 2;
    }

    let json = match serde_json::to_string_pretty(&starter_config()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("keygap init: failed to serialize config: {}", e);
            return 2;
        }
    };
    if let Err(e) = fs::write(config_dir.join(CONFIG_FILE), json + "\n") {
        eprintln!("keygap init: failed to write config: {}", e);
        return 2;
    }

    create_ignore_file(root, verbose);

    if verbose {
        eprintln!("keygap init: initialized in {}", root.display());
    }
    0
}

/// Default config with an empty target list, so the rule starts inactive.
fn starter_config() -> KeygapConfig {
    KeygapConfig {
        rules: RulesConfig {
            no_missing_destructure_keys: DestructureRuleConfig {
                severity: Severity::Error,
                targets: Some(vec![]),
                ignore_keys: Some(vec![]),
                ignore_key_pattern: None,
            },
        },
        ..KeygapConfig::default()
    }
}

fn create_ignore_file(root: &Path, verbose: bool) {
    let path = root.join(IGNORE_FILENAME);
    if path.exists() {
        if verbose {
            eprintln!("keygap init: {} already exists, leaving it alone", IGNORE_FILENAME);
        }
        return;
    }
    if let Err(e) = fs::write(&path, IGNORE_TEMPLATE) {
        eprintln!("keygap init: failed to write {}: {}", IGNORE_FILENAME, e);
    }
}
