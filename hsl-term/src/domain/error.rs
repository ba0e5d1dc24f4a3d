//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Search term is shorter than the upstream search accepts
    #[error("search term too short: {0:?} (need more than {min} characters)", min = super::search::MIN_SEARCH_CHARS)]
    SearchTermTooShort(String),

    /// Stop identifier is empty or contains whitespace
    #[error("invalid stop id: {0:?}")]
    InvalidStopId(String),

    /// Service time cannot be represented as an instant
    #[error("invalid service time: service day {service_day}, offset {offset}")]
    InvalidServiceTime { service_day: i64, offset: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::SearchTermTooShort("ab".into());
        assert_eq!(
            err.to_string(),
            "search term too short: \"ab\" (need more than 3 characters)"
        );

        let err = DomainError::InvalidStopId(String::new());
        assert_eq!(err.to_string(), "invalid stop id: \"\"");

        let err = DomainError::InvalidServiceTime {
            service_day: 1_700_000_000,
            offset: -5,
        };
        assert_eq!(
            err.to_string(),
            "invalid service time: service day 1700000000, offset -5"
        );
    }
}
