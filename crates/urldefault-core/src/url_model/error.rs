//! Error type for URL parsing and merging.

use std::fmt;
use thiserror::Error;

/// Which of the two merge inputs a [`ParseError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The candidate URL whose parts take precedence.
    Primary,
    /// The fallback URL supplying missing parts.
    Defaults,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRole::Primary => write!(f, "primary"),
            InputRole::Defaults => write!(f, "defaults"),
        }
    }
}

/// An input string failed URL syntax validation.
///
/// This is the only failure a merge can produce. The underlying parser
/// diagnostic is kept unchanged as the error source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {role} URL {input:?}: {source}")]
pub struct ParseError {
    pub role: InputRole,
    pub input: String,
    #[source]
    pub source: url::ParseError,
}

impl ParseError {
    pub(crate) fn new(role: InputRole, input: &str, source: url::ParseError) -> Self {
        Self {
            role,
            input: input.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_role_and_input() {
        let err = ParseError::new(
            InputRole::Defaults,
            "http://[::1",
            url::ParseError::InvalidIpv6Address,
        );
        let msg = err.to_string();
        assert!(msg.starts_with("invalid defaults URL \"http://[::1\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
