//! keygap CLI: destructuring consistency checks for factory calls.
//!
//! This binary provides the `keygap` command with subcommands for
//! initialization, checking, configuration, and rule documentation.
//! See `keygap --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("KEYGAP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    // Diagnostics go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter: Box<dyn keygap_output::OutputFormatter> = if cli.json {
        Box::new(keygap_output::json::JsonFormatter)
    } else if cli.llm {
        Box::new(keygap_output::llm::LlmFormatter::new().with_max_tokens(cli.max_tokens))
    } else {
        Box::new(keygap_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Init => commands::init::run(&*formatter, cli.verbose),
        Commands::Check {
            files,
            strict,
            suppress,
            config,
        } => commands::check::run(&*formatter, cli.verbose, files, strict, suppress, config),
        Commands::Config { key, value } => {
            commands::config::run(&*formatter, cli.verbose, key, value)
        }
        Commands::Explain { code } => commands::explain::run(&*formatter, cli.verbose, code),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
