//! # Rule Validation
//!
//! Checks the parsed components of a title against the configured allow-lists.
//!
//! Types are compared by exact, case-sensitive equality. Scopes are matched
//! against regex patterns, case-insensitively and anchored at the end of the
//! scope, so `api` accepts both `api` and `public-api`.
//!
//! Neither check knows about "no restriction". Skipping the scope check when
//! no patterns are configured is up to the caller.

use regex::Regex;
use tracing::{debug, error};

use crate::errors::TitleValidatorError;

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;

/// Checks that `title_type` is one of `allowed_types`.
///
/// # Errors
///
/// [`TitleValidatorError::TypeNotAllowed`] if no entry is exactly equal to `title_type`.
///
/// # Examples
///
/// ```
/// use pr_title_validator_core::checks::rules::validate_type;
///
/// let allowed = vec!["feat".to_string(), "fix".to_string()];
/// assert!(validate_type("feat", &allowed).is_ok());
/// assert!(validate_type("FEAT", &allowed).is_err());
/// ```
pub fn validate_type(
    title_type: &str,
    allowed_types: &[String],
) -> Result<(), TitleValidatorError> {
    if allowed_types.iter().any(|allowed| allowed == title_type) {
        return Ok(());
    }

    error!(
        title_type = title_type,
        allowed_types = ?allowed_types,
        "Type not allowed by the convention"
    );
    Err(TitleValidatorError::TypeNotAllowed {
        title_type: title_type.to_string(),
        allowed: allowed_types.to_vec(),
    })
}

/// Checks that `scope` ends with a match of one of `allowed_patterns`.
///
/// Each pattern is compiled as `(?i)<pattern>$`. Patterns are tried in order
/// and the first match wins. An empty pattern list matches nothing, not even
/// an empty scope.
///
/// # Errors
///
/// * [`TitleValidatorError::ScopeNotAllowed`] if no pattern matches
/// * [`TitleValidatorError::InvalidScopePattern`] if a pattern tried before a
///   match is not a valid regular expression
///
/// # Examples
///
/// ```
/// use pr_title_validator_core::checks::rules::validate_scope;
///
/// let allowed = vec!["package/.+".to_string()];
/// assert!(validate_scope("package/utils", &allowed).is_ok());
/// assert!(validate_scope("utils", &allowed).is_err());
/// assert!(validate_scope("", &[]).is_err());
/// ```
pub fn validate_scope(
    scope: &str,
    allowed_patterns: &[String],
) -> Result<(), TitleValidatorError> {
    for pattern in allowed_patterns {
        if scope_pattern_regex(pattern)?.is_match(scope) {
            debug!(scope = scope, pattern = %pattern, "Scope matched an allowed pattern");
            return Ok(());
        }
    }

    Err(TitleValidatorError::ScopeNotAllowed {
        scope: scope.to_string(),
        allowed: allowed_patterns.to_vec(),
    })
}

/// Compiles a configured scope pattern into its case-insensitive, end-anchored form.
fn scope_pattern_regex(pattern: &str) -> Result<Regex, TitleValidatorError> {
    Regex::new(&format!("(?i){}$", pattern)).map_err(|e| {
        error!(pattern = pattern, error = %e, "Invalid scope pattern");
        TitleValidatorError::InvalidScopePattern {
            pattern: pattern.to_string(),
            source: e,
        }
    })
}
