//! Connection catalog.
//!
//! The catalog is the authoritative store of admitted connections, keyed by
//! origin. Connections only get in through [`Catalog::admit`], which asks a
//! [`SafetyGate`] about both endpoints first, and only leave through
//! [`Catalog::remove`].

mod restricted;

pub use restricted::RestrictedLocations;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::{Connection, ConnectionRequest, DomainError, Location};
use crate::gate::{SafetyGate, Verdict};

/// Error from catalog admission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    /// The request itself is malformed
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// An endpoint was previously flagged for rescheduling
    #[error("no flights available at {0}: location is restricted due to bad weather")]
    Restricted(Location),
}

/// Outcome of a well-formed admission attempt.
///
/// A dropped connection is not an error: the gate simply did not clear both
/// ends. Any endpoint that came back [`Verdict::Reschedule`] has been added
/// to the restricted set by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The connection was appended to its origin's list.
    Admitted,
    /// The connection was not stored.
    Dropped {
        origin: Verdict,
        destination: Verdict,
    },
}

impl Admission {
    /// Returns true if the connection was stored.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Directed multigraph of connections, keyed by origin.
///
/// Each origin's connections keep their insertion order. A location with no
/// entry has no outgoing connections.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    connections: HashMap<Location, Vec<Connection>>,
    restricted: RestrictedLocations,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a connection if the gate clears both endpoints.
    ///
    /// A connection is stored only if both verdicts are [`Verdict::Safe`]; a
    /// [`Verdict::Reschedule`] endpoint is flagged as restricted, and
    /// [`Verdict::Unknown`] just drops the connection. If one endpoint is
    /// already flagged the request is refused, but the gate is still asked
    /// about the other one so a bad-weather endpoint is flagged either way.
    ///
    /// # Errors
    ///
    /// - [`AdmissionError::Invalid`] for malformed input (nothing is touched)
    /// - [`AdmissionError::Restricted`] if either endpoint is already flagged
    pub fn admit<G: SafetyGate>(
        &mut self,
        request: &ConnectionRequest,
        gate: &G,
    ) -> Result<Admission, AdmissionError> {
        let (origin, connection) = request.validate()?;

        let refused = [&origin, &connection.destination]
            .into_iter()
            .find(|endpoint| self.restricted.contains(endpoint))
            .cloned();

        if let Some(refused) = refused {
            // The other end still gets its verdict recorded
            for endpoint in [&origin, &connection.destination] {
                if !self.restricted.contains(endpoint) {
                    self.flag_if_rescheduled(endpoint, gate.verdict(endpoint));
                }
            }
            return Err(AdmissionError::Restricted(refused));
        }

        let origin_verdict = gate.verdict(&origin);
        let destination_verdict = gate.verdict(&connection.destination);

        if origin_verdict.is_safe() && destination_verdict.is_safe() {
            debug!(
                origin = %origin,
                destination = %connection.destination,
                flight_no = %connection.flight_no,
                "Admitted connection"
            );
            self.connections.entry(origin).or_default().push(connection);
            return Ok(Admission::Admitted);
        }

        self.flag_if_rescheduled(&origin, origin_verdict);
        self.flag_if_rescheduled(&connection.destination, destination_verdict);

        debug!(
            origin = %origin,
            destination = %connection.destination,
            flight_no = %connection.flight_no,
            origin_verdict = %origin_verdict,
            destination_verdict = %destination_verdict,
            "Dropped connection"
        );

        Ok(Admission::Dropped {
            origin: origin_verdict,
            destination: destination_verdict,
        })
    }

    fn flag_if_rescheduled(&mut self, location: &Location, verdict: Verdict) {
        if verdict == Verdict::Reschedule && self.restricted.flag(location.clone()) {
            info!(location = %location, "Location restricted: flights may be rescheduled");
        }
    }

    /// Remove every connection matching the request's full tuple.
    ///
    /// Returns how many were removed. Zero matches is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the request is malformed; nothing is removed.
    pub fn remove(&mut self, request: &ConnectionRequest) -> Result<usize, DomainError> {
        let (origin, target) = request.validate()?;

        let Some(outgoing) = self.connections.get_mut(&origin) else {
            return Ok(0);
        };

        let before = outgoing.len();
        outgoing.retain(|connection| connection != &target);
        let removed = before - outgoing.len();

        if outgoing.is_empty() {
            self.connections.remove(&origin);
        }

        debug!(
            origin = %origin,
            destination = %target.destination,
            flight_no = %target.flight_no,
            removed,
            "Removed connections"
        );

        Ok(removed)
    }

    /// Connections from `origin` straight to `destination`, in insertion order.
    ///
    /// An empty list means there is no direct connection.
    pub fn direct_connections(&self, origin: &Location, destination: &Location) -> Vec<&Connection> {
        self.outgoing(origin)
            .iter()
            .filter(|connection| &connection.destination == destination)
            .collect()
    }

    /// All connections leaving `origin`, in insertion order.
    pub fn outgoing(&self, origin: &Location) -> &[Connection] {
        self.connections
            .get(origin)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Locations with at least one outgoing connection.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.connections.keys()
    }

    /// Total number of stored connections.
    pub fn connection_count(&self) -> usize {
        self.connections.values().map(Vec::len).sum()
    }

    /// Returns true if no connections are stored.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Locations flagged for rescheduling.
    pub fn restricted(&self) -> &RestrictedLocations {
        &self.restricted
    }

    /// Returns true if `location` is flagged for rescheduling.
    pub fn is_restricted(&self, location: &Location) -> bool {
        self.restricted.contains(location)
    }

    /// Unflag one location. Returns true if it was flagged.
    pub fn lift_restriction(&mut self, location: &Location) -> bool {
        self.restricted.lift(location)
    }

    /// Unflag every location.
    pub fn reset_restrictions(&mut self) {
        self.restricted.clear();
    }
}
