//! # Validation Checks
//!
//! This module contains the checks that are performed on pull request titles.
//!
//! The checks are organized into submodules:
//! - `title`: Splits a title into its type, scope and message
//! - `rules`: Checks the type and scope against the configured allow-lists
//!
//! These checks are used by the `TitleValidator` to determine if a title
//! follows the convention.

pub mod rules;
pub mod title;
