//! Configuration settings for the pull request title validator.
//!
//! This module centralizes the built-in defaults and turns the raw,
//! comma-separated inputs of a run into the lists the checks work with.
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Template shown to users whose title does not follow the convention
pub const DESIRED_FORMAT: &str = "<type>(optional: <scope>): <message>";

/// Types allowed when no custom list is configured
pub const DEFAULT_CONVENTION_TYPES: [&str; 9] = [
    "fix", "feat", "chore", "docs", "build", "ci", "refactor", "perf", "test",
];

lazy_static! {
    /// Pre-compiled regex that captures the content of the first non-empty
    /// parenthetical in a title prefix
    pub static ref SCOPE_REGEX: Regex =
        Regex::new(r"\(([^)]+)\)").expect("Failed to compile scope regex");
}

/// Runtime configuration for a single validation run.
///
/// Built once from the raw inputs and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Types a title may use. Compared by exact, case-sensitive equality.
    pub allowed_types: Vec<String>,

    /// Regex patterns a scope must match at its end. Empty means any scope,
    /// including none, is accepted.
    pub allowed_scopes: Vec<String>,
}

impl ValidationConfig {
    /// Builds the configuration from the raw comma-separated inputs.
    ///
    /// An empty or missing type list falls back to [`DEFAULT_CONVENTION_TYPES`].
    /// An empty or missing scope list means the scope is not restricted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pr_title_validator_core::config::ValidationConfig;
    ///
    /// let config = ValidationConfig::from_inputs(Some("fix, feat"), None);
    /// assert_eq!(config.allowed_types, vec!["fix", "feat"]);
    /// assert!(config.allowed_scopes.is_empty());
    /// ```
    pub fn from_inputs(types: Option<&str>, scopes: Option<&str>) -> Self {
        Self {
            allowed_types: parse_types(types.unwrap_or_default()),
            allowed_scopes: parse_scopes(scopes.unwrap_or_default()),
        }
    }

    /// Returns `true` when the configuration restricts the scope of a title.
    pub fn restricts_scope(&self) -> bool {
        !self.allowed_scopes.is_empty()
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_types: default_convention_types(),
            allowed_scopes: Vec::new(),
        }
    }
}

fn default_convention_types() -> Vec<String> {
    DEFAULT_CONVENTION_TYPES
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn parse_types(input: &str) -> Vec<String> {
    if input.is_empty() {
        warn!("No custom list of commit types passed, using fallback");
        return default_convention_types();
    }

    let types = parse_comma_separated_list(input);
    debug!(count = types.len(), "Parsed the custom list of commit types");
    types
}

fn parse_scopes(input: &str) -> Vec<String> {
    if input.is_empty() {
        warn!("No custom list of commit scopes passed, using fallback");
        return Vec::new();
    }

    let scopes = parse_comma_separated_list(input);
    debug!(count = scopes.len(), "Parsed the custom list of commit scopes");
    scopes
}

/// Splits `input` on `,` and trims every element.
///
/// Order and empty elements are preserved and nothing is deduplicated, so an
/// empty input yields a single empty element. Callers that want a fallback for
/// an empty input have to check for it before calling this.
///
/// # Examples
///
/// ```
/// use pr_title_validator_core::config::parse_comma_separated_list;
///
/// assert_eq!(parse_comma_separated_list(" fix , feat,,fix"), vec!["fix", "feat", "", "fix"]);
/// assert_eq!(parse_comma_separated_list(""), vec![""]);
/// ```
pub fn parse_comma_separated_list(input: &str) -> Vec<String> {
    input.split(',').map(|item| item.trim().to_string()).collect()
}
