use pr_title_validator_core::errors::TitleValidatorError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The event payload could not be read or parsed
    #[error("Event error: {0}")]
    EventError(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl From<TitleValidatorError> for CliError {
    fn from(err: TitleValidatorError) -> Self {
        match err {
            TitleValidatorError::InvalidEventKind(_) => CliError::InvalidArguments(err.to_string()),
            TitleValidatorError::PayloadReadFailure { .. }
            | TitleValidatorError::PayloadParseFailure(_) => CliError::EventError(err.to_string()),
            TitleValidatorError::InvalidScopePattern { .. } => {
                CliError::ConfigError(err.to_string())
            }
            TitleValidatorError::MissingSeparator(_)
            | TitleValidatorError::MissingType(_)
            | TitleValidatorError::TypeNotAllowed { .. }
            | TitleValidatorError::ScopeNotAllowed { .. } => {
                CliError::ValidationFailed(err.to_string())
            }
        }
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        match self {
            CliError::ConfigError(_) => std::process::ExitCode::from(2),
            CliError::EventError(_) => std::process::ExitCode::from(3),
            CliError::InvalidArguments(_) => std::process::ExitCode::from(5),
            CliError::ValidationFailed(_) => std::process::ExitCode::from(1),
        }
    }
}
