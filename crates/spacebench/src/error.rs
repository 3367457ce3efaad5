//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`], the crate-wide [Result] alias, and
//! [`ValidationError`], which the validator returns on its own so callers can surface
//! the message without unwrapping a larger enum.
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Family;

pub type Result<T> = std::result::Result<T, Error>;

/// A user-correctable configuration problem. Blocks the run before any file is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Family whose rule failed; `None` for scene-wide rules.
    pub family: Option<Family>,
    /// Message intended to be shown to the user verbatim.
    pub message: String,
}

impl ValidationError {
    pub fn new(family: Family, message: impl Into<String>) -> Self {
        Self {
            family: Some(family),
            message: message.into(),
        }
    }

    pub fn scene(message: impl Into<String>) -> Self {
        Self {
            family: None,
            message: message.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("malformed options line {line}: '{content}' (expected 'key,value')")]
    MalformedOptionsLine { line: usize, content: String },

    #[error("invalid value '{value}' for option '{key}' on line {line}")]
    InvalidOptionValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error(
        "{family}: only {produced} of {requested} unique shapes after {attempts} attempts"
    )]
    ResampleBudgetExhausted {
        family: Family,
        requested: usize,
        produced: usize,
        attempts: usize,
    },

    #[error("failed to write {family} datafile '{}': {source}", .path.display())]
    Write {
        family: Family,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message_verbatim() {
        let err = ValidationError::new(Family::Points, "Points file must contain at least 1 element");
        assert_eq!(err.to_string(), "Points file must contain at least 1 element");
        assert_eq!(err.family, Some(Family::Points));
    }

    #[test]
    fn validation_error_converts_into_crate_error() {
        let err: Error = ValidationError::scene("Scene length has to be > 0").into();
        assert!(matches!(err, Error::Validation(ref v) if v.family.is_none()));
    }

    #[test]
    fn write_error_names_family_and_path() {
        let err = Error::Write {
            family: Family::Squares,
            path: PathBuf::from("out/Squares.txt"),
            source: std::io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("squares"));
        assert!(msg.contains("out/Squares.txt"));
        assert!(msg.contains("disk full"));
    }
}
