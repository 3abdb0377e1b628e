//! # Pull Request Title Validator CLI
//!
//! Command-line entry point that checks the title of the pull request which
//! triggered a GitHub Actions run.
//!
//! Every option can also be provided through the environment variables that
//! GitHub Actions sets for a workflow step, which is how the binary is
//! normally invoked.
//!
//! # Examples
//!
//! ```bash
//! # Inside a workflow step
//! pr-title-validator
//!
//! # Locally, against a saved event payload
//! pr-title-validator --event-name pull_request --event-path event.json \
//!     --types fix,feat,chore --scopes "api,ui"
//! ```

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use clap::Parser;
use pr_title_validator_core::{config::ValidationConfig, models::EventKind, TitleValidator};
use std::path::PathBuf;
use std::process::{ExitCode, Termination};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Error types specific to the CLI.
mod errors;

use errors::CliError;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable holding the log filter directives.
const LOG_ENV_VAR: &str = "PR_TITLE_VALIDATOR_LOG";

/// Command-line interface structure for the title validator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Name of the event that triggered the run
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "")]
    event_name: String,

    /// Path of the JSON file holding the event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,

    /// Comma-separated list of allowed types
    #[arg(long, env = "INPUT_TYPES")]
    types: Option<String>,

    /// Comma-separated list of allowed scope patterns
    #[arg(long, env = "INPUT_SCOPES")]
    scopes: Option<String>,
}

/// Installs the JSON log subscriber.
///
/// The filter is read from `PR_TITLE_VALIDATOR_LOG` and defaults to `info`,
/// or `debug` in verbose mode.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().json().with_writer(std::io::stdout))
        .with(filter)
        .init();
}

/// Validates the title of the triggering pull request.
fn run(cli: Cli) -> Result<(), CliError> {
    let config = ValidationConfig::from_inputs(cli.types.as_deref(), cli.scopes.as_deref());
    let validator = TitleValidator::with_config(config);

    let kind: EventKind = cli.event_name.parse().map_err(|e| {
        error!(event = %cli.event_name, "Invalid event type");
        CliError::from(e)
    })?;
    debug!(event = %kind, "Accepted the triggering event");

    let Some(event_path) = cli.event_path else {
        let err = CliError::InvalidArguments(
            "No event payload path given. Set GITHUB_EVENT_PATH or pass --event-path.".to_string(),
        );
        error!(message = "Missing event payload path", error = ?err);
        return Err(err);
    };

    match validator.validate_event(&cli.event_name, &event_path) {
        Ok(_) => Ok(()),
        Err(e) => {
            if e.is_title_violation() {
                eprintln!("{}", validator.failure_summary(&e));
            }
            Err(e.into())
        }
    }
}

/// Main entry point for the title validator.
///
/// Initializes logging, parses the arguments and runs the check. Only this
/// function turns a failure into a process exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "Pull request title validation failed");
            e.report()
        }
    }
}
