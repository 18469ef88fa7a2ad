//! Connection (flight leg) types.

use super::{DomainError, Location};

/// A directed, scheduled connection out of some origin location.
///
/// The origin is implicit: connections are stored under their origin in the
/// [`Catalog`](crate::catalog::Catalog). Parallel connections between the same
/// pair of locations are allowed, even with the same operator, so equality
/// compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Operating airline
    pub operator: String,
    /// Where the connection arrives
    pub destination: Location,
    /// Fare in whole currency units
    pub cost: u32,
    /// Flight time in minutes
    pub minutes: u32,
    /// External identifier (flight number), used for exact-match removal
    pub flight_no: String,
}

impl Connection {
    /// Creates a connection from already-validated parts.
    pub fn new(
        operator: impl Into<String>,
        destination: Location,
        cost: u32,
        minutes: u32,
        flight_no: impl Into<String>,
    ) -> Self {
        Self {
            operator: operator.into(),
            destination,
            cost,
            minutes,
            flight_no: flight_no.into(),
        }
    }
}

/// An unvalidated connection tuple, as supplied by a caller.
///
/// This is the shape taken by both admission and removal. Nothing here has
/// been checked yet; [`ConnectionRequest::validate`] turns it into an origin
/// and a [`Connection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    pub origin: String,
    pub destination: String,
    pub operator: String,
    pub cost: i64,
    pub minutes: i64,
    pub flight_no: String,
}

impl ConnectionRequest {
    /// Create a new request.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        operator: impl Into<String>,
        cost: i64,
        minutes: i64,
        flight_no: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            operator: operator.into(),
            cost,
            minutes,
            flight_no: flight_no.into(),
        }
    }

    /// Validate the request.
    ///
    /// Returns the origin and the connection to store under it.
    ///
    /// # Errors
    ///
    /// - either location name is empty or blank
    /// - cost or duration is negative (or wider than `u32`)
    pub fn validate(&self) -> Result<(Location, Connection), DomainError> {
        let origin = Location::parse(&self.origin)?;
        let destination = Location::parse(&self.destination)?;

        let cost = u32::try_from(self.cost).map_err(|_| DomainError::InvalidCost(self.cost))?;
        let minutes =
            u32::try_from(self.minutes).map_err(|_| DomainError::InvalidDuration(self.minutes))?;

        Ok((
            origin,
            Connection::new(
                self.operator.clone(),
                destination,
                cost,
                minutes,
                self.flight_no.clone(),
            ),
        ))
    }
}
