//! # Pull Request Title Validator Core
//!
//! Core logic for checking that pull request titles follow the convention
//! `<type>(optional: <scope>): <message>`.
//!
//! A title passes when:
//! - it contains a `:` separator with a type in front of it
//! - the type is one of the allowed types (exact, case-sensitive match)
//! - the scope matches one of the allowed scope patterns, if any are configured
//!
//! ## Example Usage
//!
//! ```rust
//! use pr_title_validator_core::{config::ValidationConfig, TitleValidator};
//!
//! let config = ValidationConfig::from_inputs(Some("fix,feat,chore"), Some("api,ui"));
//! let validator = TitleValidator::with_config(config);
//!
//! let components = validator.validate_title("feat(api): add new endpoint").unwrap();
//! assert_eq!(components.title_type, "feat");
//!
//! assert!(validator.validate_title("feat(database): x").is_err());
//! ```

use indoc::formatdoc;
use std::path::Path;
use tracing::{error, info, instrument};

pub mod checks;
pub mod config;
use config::{ValidationConfig, DESIRED_FORMAT};

pub mod errors;
use errors::TitleValidatorError;

pub mod event;
pub mod models;
use models::{EventKind, TitleComponents};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Validates pull request titles against a fixed configuration.
///
/// # Examples
///
/// ```rust
/// use pr_title_validator_core::TitleValidator;
///
/// // Default configuration: built-in types, no scope restriction
/// let validator = TitleValidator::new();
///
/// assert!(validator.validate_title("fix: resolve memory leak").is_ok());
/// assert!(validator.validate_title("style: reformat").is_err());
/// ```
#[derive(Debug, Default)]
pub struct TitleValidator {
    config: ValidationConfig,
}

impl TitleValidator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Runs the full check for the event that triggered the run.
    ///
    /// This method:
    /// - Rejects events other than `pull_request` and `pull_request_target`
    /// - Reads the pull request title from the event payload at `event_path`
    /// - Parses and validates the title
    ///
    /// # Arguments
    ///
    /// * `event_name` - The name of the triggering event
    /// * `event_path` - The path of the JSON file holding the event payload
    ///
    /// # Returns
    ///
    /// The components of the title if it follows the convention, or the first
    /// error encountered.
    #[instrument(skip(self, event_path))]
    pub fn validate_event<P: AsRef<Path>>(
        &self,
        event_name: &str,
        event_path: P,
    ) -> Result<TitleComponents, TitleValidatorError> {
        info!(event = event_name, "Starting the pull request title validation");

        let kind: EventKind = event_name.parse().map_err(|e| {
            error!(event = event_name, "Invalid event type");
            e
        })?;

        let title = event::load_pull_request_title(event_path)?;
        info!(event = %kind, title = %title, "Loaded the pull request title");

        let components = self.validate_title(&title)?;
        info!(
            title_type = %components.title_type,
            scope = %components.scope,
            message = %components.message,
            "Commit title validated successfully"
        );
        info!("The commit message adheres to the configured standard");

        Ok(components)
    }

    /// Parses `title` and checks its type and scope against the configuration.
    ///
    /// The scope is only checked when at least one scope pattern is configured.
    #[instrument(skip(self))]
    pub fn validate_title(&self, title: &str) -> Result<TitleComponents, TitleValidatorError> {
        let components = checks::title::parse_title(title)?;

        checks::rules::validate_type(&components.title_type, &self.config.allowed_types)?;

        if self.config.restricts_scope() {
            checks::rules::validate_scope(&components.scope, &self.config.allowed_scopes)
                .map_err(|e| {
                    error!(error = %e, "Error while checking the scope against the allowed scopes");
                    e
                })?;
        }

        Ok(components)
    }

    /// Renders a human readable explanation of why a run failed.
    ///
    /// The explanation names the problem, the expected title format and the
    /// configured allow-lists.
    pub fn failure_summary(&self, err: &TitleValidatorError) -> String {
        let scopes = if self.config.restricts_scope() {
            self.config.allowed_scopes.join(", ")
        } else {
            "any".to_string()
        };

        formatdoc!(
            "The pull request title check failed:

            {err}

            - Expected format: `{format}`
            - Allowed types: {types}
            - Allowed scope patterns: {scopes}
            - Examples:
                * feat(api): add new endpoint
                * fix: resolve memory leak",
            err = err,
            format = DESIRED_FORMAT,
            types = self.config.allowed_types.join(", "),
            scopes = scopes,
        )
    }
}
