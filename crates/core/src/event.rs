//! # Event Loading
//!
//! Reads the pull request title from the payload of the event that triggered
//! the run.

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::errors::TitleValidatorError;
use crate::models::PullRequestEvent;

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// Loads the pull request title from the event payload stored at `path`.
///
/// Only `pull_request.title` is read. A payload without a pull request section
/// yields an empty title, which the title parser then rejects.
///
/// # Errors
///
/// * [`TitleValidatorError::PayloadReadFailure`] if the file cannot be read
/// * [`TitleValidatorError::PayloadParseFailure`] if the file is not a valid payload
pub fn load_pull_request_title<P: AsRef<Path>>(path: P) -> Result<String, TitleValidatorError> {
    let path_ref = path.as_ref();
    debug!(path = %path_ref.display(), "Reading the event payload");

    let content = fs::read_to_string(path_ref).map_err(|e| {
        error!(
            path = %path_ref.display(),
            error = %e,
            "Problem reading the event JSON file"
        );
        TitleValidatorError::PayloadReadFailure {
            path: path_ref.display().to_string(),
            source: e,
        }
    })?;

    parse_pull_request_title(&content)
}

/// Extracts the pull request title from an event payload.
pub fn parse_pull_request_title(content: &str) -> Result<String, TitleValidatorError> {
    let event: PullRequestEvent = serde_json::from_str(content).map_err(|e| {
        error!(error = %e, "Failed to parse the event JSON");
        TitleValidatorError::PayloadParseFailure(e)
    })?;

    Ok(event.pull_request.title)
}
