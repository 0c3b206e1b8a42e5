//! Error types for configuration failures, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - C001: `WordlistNotFile` (word-list path is not a regular file)
//! - C002: `WordlistUnreadable` (word-list file could not be read)
//!
//! Configuration errors are fatal: they are detected before any search runs,
//! printed to stderr in detailed form, and terminate the process with exit
//! code 1. An empty search result is *not* an error.

use std::io;

/// Custom error type for configuration problems surfaced by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("--wordlist \"{path}\" is not a file")]
    WordlistNotFile { path: String },

    #[error("failed to read --wordlist \"{path}\": {source}")]
    WordlistUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::WordlistNotFile { .. } => "C001",
            ConfigError::WordlistUnreadable { .. } => "C002",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::WordlistNotFile { .. } => {
                Some("Pass -w/--wordlist with the path of an existing word-list file (whitespace-separated words)")
            }
            ConfigError::WordlistUnreadable { .. } => {
                Some("Check that the word-list file is readable and valid UTF-8")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
