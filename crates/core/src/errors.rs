use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Terminal failures of a title validation run.
///
/// None of these are retried. The entry point turns the first one it sees into
/// a non-zero exit status.
#[derive(Error, Debug)]
pub enum TitleValidatorError {
    #[error("Invalid event type: '{0}'. Expected 'pull_request' or 'pull_request_target'.")]
    InvalidEventKind(String),

    #[error("Failed to read the event payload at '{path}'. Issue was: '{source}'.")]
    PayloadReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the event payload. Issue was: '{0}'.")]
    PayloadParseFailure(#[from] serde_json::Error),

    #[error("Title '{0}' is missing the ':' separator between the prefix and the message")]
    MissingSeparator(String),

    #[error("Title '{0}' is missing a type before the ':' separator")]
    MissingType(String),

    #[error("Type '{title_type}' is not allowed. Allowed types: [{}]", .allowed.join(", "))]
    TypeNotAllowed {
        title_type: String,
        allowed: Vec<String>,
    },

    #[error("Scope '{scope}' is not allowed. Allowed scopes: [{}]", .allowed.join(", "))]
    ScopeNotAllowed { scope: String, allowed: Vec<String> },

    #[error("Scope pattern '{pattern}' is not a valid regular expression: {source}")]
    InvalidScopePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl TitleValidatorError {
    /// Returns `true` when the error describes the title itself rather than the
    /// environment or the configuration the check was run with.
    pub fn is_title_violation(&self) -> bool {
        matches!(
            self,
            TitleValidatorError::MissingSeparator(_)
                | TitleValidatorError::MissingType(_)
                | TitleValidatorError::TypeNotAllowed { .. }
                | TitleValidatorError::ScopeNotAllowed { .. }
        )
    }
}
