//! Domain error types.
//!
//! These errors represent malformed caller input. They are raised before
//! the catalog is touched.

use super::InvalidLocation;

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Origin or destination name is missing or blank
    #[error(transparent)]
    Location(#[from] InvalidLocation),

    /// Cost is negative or does not fit the catalog's integer width
    #[error("invalid cost {0}: must be a non-negative integer")]
    InvalidCost(i64),

    /// Duration is negative or does not fit the catalog's integer width
    #[error("invalid duration {0}: must be a non-negative number of minutes")]
    InvalidDuration(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidCost(-5);
        assert_eq!(
            err.to_string(),
            "invalid cost -5: must be a non-negative integer"
        );

        let err = DomainError::InvalidDuration(-1);
        assert_eq!(
            err.to_string(),
            "invalid duration -1: must be a non-negative number of minutes"
        );

        let err: DomainError = Location::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid location: name must not be empty");
    }
}
