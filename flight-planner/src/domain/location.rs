//! Location identifier type.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid location name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// A location (city) name.
///
/// Names are opaque: matching is exact and case-sensitive, and nothing is
/// trimmed or folded. The only requirement is that the name contains at
/// least one non-whitespace character.
///
/// Cloning is cheap; the name is shared.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Location;
///
/// let pune = Location::parse("Pune").unwrap();
/// assert_eq!(pune.as_str(), "Pune");
///
/// // Matching is case-sensitive
/// assert_ne!(pune, Location::parse("pune").unwrap());
///
/// // Empty names are rejected
/// assert!(Location::parse("").is_err());
/// assert!(Location::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(Arc<str>);

impl Location {
    /// Parse a location name.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        if s.is_empty() {
            return Err(InvalidLocation {
                reason: "name must not be empty",
            });
        }

        if s.chars().all(char::is_whitespace) {
            return Err(InvalidLocation {
                reason: "name must not be blank",
            });
        }

        Ok(Location(Arc::from(s)))
    }

    /// Returns the location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(Location::parse("Pune").is_ok());
        assert!(Location::parse("New Delhi").is_ok());
        assert!(Location::parse("X").is_ok());
        assert!(Location::parse("São Paulo").is_ok());
    }

    #[test]
    fn reject_empty_and_blank() {
        assert!(Location::parse("").is_err());
        assert!(Location::parse(" ").is_err());
        assert!(Location::parse("\t\n").is_err());
    }

    #[test]
    fn no_canonicalization() {
        let padded = Location::parse(" Pune ").unwrap();
        assert_eq!(padded.as_str(), " Pune ");
        assert_ne!(padded, Location::parse("Pune").unwrap());
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(
            Location::parse("Mumbai").unwrap(),
            Location::parse("MUMBAI").unwrap()
        );
    }

    #[test]
    fn display() {
        let loc = Location::parse("Chennai").unwrap();
        assert_eq!(format!("{}", loc), "Chennai");
    }

    #[test]
    fn debug() {
        let loc = Location::parse("Delhi").unwrap();
        assert_eq!(format!("{:?}", loc), "Location(Delhi)");
    }

    #[test]
    fn error_display() {
        let err = Location::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid location: name must not be empty");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Location::parse("Pune").unwrap());
        assert!(set.contains(&Location::parse("Pune").unwrap()));
        assert!(!set.contains(&Location::parse("Goa").unwrap()));
    }
}
