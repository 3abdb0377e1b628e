//! # Title Parsing
//!
//! This module splits pull request titles into the components of the
//! convention `<type>(optional: <scope>): <message>`.
//!
//! Parsing only fails when the title has no `:` separator or no type in front
//! of it.
//! Whether a type or scope is acceptable is decided by the `rules` module.

use tracing::{debug, error};

use crate::config::{DESIRED_FORMAT, SCOPE_REGEX};
use crate::errors::TitleValidatorError;
use crate::models::TitleComponents;

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;

/// Splits a pull request title into its type, scope and message.
///
/// # Format
///
/// The format is: `<type>(<scope>): <message>` where:
/// - **type**: everything before the first `(`, or the whole prefix if there
///   is no scope
/// - **scope**: (optional) the content of the first non-empty parenthetical
/// - **message**: everything after the first `:`, trimmed. Further colons
///   belong to the message.
///
/// A prefix with an unclosed parenthetical, such as `feat(api`, is not treated
/// as having a scope. The whole prefix becomes the type.
///
/// # Errors
///
/// * [`TitleValidatorError::MissingSeparator`] if the title contains no `:`
/// * [`TitleValidatorError::MissingType`] if nothing precedes the scope or separator
///
/// # Examples
///
/// ```
/// use pr_title_validator_core::checks::title::parse_title;
///
/// let components = parse_title("feat(api): add new endpoint").unwrap();
/// assert_eq!(components.title_type, "feat");
/// assert_eq!(components.scope, "api");
/// assert_eq!(components.message, "add new endpoint");
///
/// assert!(parse_title("no colon here").is_err());
/// ```
pub fn parse_title(title: &str) -> Result<TitleComponents, TitleValidatorError> {
    let Some((prefix, message)) = title.split_once(':') else {
        error!(
            desired_format = DESIRED_FORMAT,
            title = title,
            "Title must include a message after the colon"
        );
        return Err(TitleValidatorError::MissingSeparator(title.to_string()));
    };

    let (title_type, scope) = extract_type_and_scope(prefix);
    if title_type.is_empty() {
        error!(
            desired_format = DESIRED_FORMAT,
            title = title,
            "Title must include a type"
        );
        return Err(TitleValidatorError::MissingType(title.to_string()));
    }

    let components = TitleComponents {
        title_type,
        scope,
        message: message.trim().to_string(),
    };
    debug!(
        title_type = %components.title_type,
        scope = %components.scope,
        "Parsed the pull request title"
    );

    Ok(components)
}

/// Splits the part of a title before the separator into type and scope.
fn extract_type_and_scope(prefix: &str) -> (String, String) {
    let prefix = prefix.trim();

    if prefix.contains('(') && prefix.contains(')') {
        if let Some(captures) = SCOPE_REGEX.captures(prefix) {
            let scope = captures[1].to_string();
            let title_type = prefix
                .split('(')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            return (title_type, scope);
        }
    }

    (prefix.to_string(), String::new())
}
