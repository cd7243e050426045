//! Domain error types.

/// Domain-level errors for validation and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A clock time could not be parsed
    #[error("invalid time: {0}")]
    InvalidTime(&'static str),

    /// A rule profile name was not recognised
    #[error("unknown profile '{0}' (expected 'detailed' or 'compact')")]
    UnknownProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidTime("hour must be 0-23");
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");

        let err = DomainError::UnknownProfile("fancy".into());
        assert_eq!(
            err.to_string(),
            "unknown profile 'fancy' (expected 'detailed' or 'compact')"
        );
    }
}
