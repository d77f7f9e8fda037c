//! Error type shared by version and constraint parsing

use thiserror::Error;

/// Errors raised while parsing versions or constraint expressions.
///
/// Comparing versions and checking constraints never fails; every error is
/// reported when the text is parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Could not parse version constraint \"{constraint}\": {reason}")]
    InvalidConstraint { constraint: String, reason: String },
}

impl Error {
    pub(crate) fn constraint(constraint: &str, reason: impl Into<String>) -> Self {
        Error::InvalidConstraint {
            constraint: constraint.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from an unparsable version string
    pub fn is_invalid_version(&self) -> bool {
        matches!(self, Error::InvalidVersion(_))
    }

    /// Check if this error came from a malformed constraint expression
    pub fn is_invalid_constraint(&self) -> bool {
        matches!(self, Error::InvalidConstraint { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_message() {
        let err = Error::InvalidVersion("1.0".to_string());
        assert_eq!(err.to_string(), "Invalid version string \"1.0\"");
        assert!(err.is_invalid_version());
        assert!(!err.is_invalid_constraint());
    }

    #[test]
    fn test_invalid_constraint_wraps_reason() {
        let inner = Error::InvalidVersion("bar".to_string());
        let err = Error::constraint(">= bar", inner.to_string());
        assert_eq!(
            err.to_string(),
            "Could not parse version constraint \">= bar\": Invalid version string \"bar\""
        );
        assert!(err.is_invalid_constraint());
    }
}
