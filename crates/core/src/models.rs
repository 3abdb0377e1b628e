//! # Models
//!
//! This module contains the data models the validator reads from its
//! environment: the kind of event that triggered the run and the parts of the
//! event payload that the title check needs.
//!
//! The payload models only declare the fields that are read. Everything else
//! GitHub sends is ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TitleValidatorError;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// The kinds of events a title check may be run for.
///
/// # Examples
///
/// ```
/// use pr_title_validator_core::models::EventKind;
///
/// let kind: EventKind = "pull_request_target".parse().unwrap();
/// assert_eq!(kind, EventKind::PullRequestTarget);
/// assert!("push".parse::<EventKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A `pull_request` event
    PullRequest,

    /// A `pull_request_target` event
    PullRequestTarget,
}

impl EventKind {
    /// The event name as GitHub reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestTarget => "pull_request_target",
        }
    }
}

impl FromStr for EventKind {
    type Err = TitleValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pull_request" => Ok(EventKind::PullRequest),
            "pull_request_target" => Ok(EventKind::PullRequestTarget),
            other => Err(TitleValidatorError::InvalidEventKind(other.to_string())),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the pull request section of an event payload.
///
/// # Examples
///
/// ```
/// use pr_title_validator_core::models::PullRequest;
///
/// let pr = PullRequest {
///     title: "feat(auth): add GitHub login".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequest {
    /// The title of the pull request
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// The payload of a `pull_request` or `pull_request_target` event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// The pull request the event was raised for
    #[serde(default, deserialize_with = "null_as_default")]
    pub pull_request: PullRequest,
}

/// Deserializes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The parts of a pull request title.
///
/// Produced by [`crate::checks::title::parse_title`]. The type is never empty,
/// the scope is empty when the title has no parenthetical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleComponents {
    /// The category of the change, e.g. `feat`
    #[serde(rename = "type")]
    pub title_type: String,

    /// The optional qualifier between parentheses, e.g. `api`
    pub scope: String,

    /// The free text after the `:` separator, trimmed
    pub message: String,
}
