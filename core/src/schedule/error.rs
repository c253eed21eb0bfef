//! Error types for configuration parsing

use thiserror::Error;

/// A configuration token that matches neither the fixed nor the range grammar.
///
/// Parsing is all-or-nothing: when this is returned no stages are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid stage format: {offending_token}")]
pub struct FormatError {
    pub offending_token: String,
}

impl FormatError {
    pub fn new(offending_token: impl Into<String>) -> Self {
        Self {
            offending_token: offending_token.into(),
        }
    }
}
