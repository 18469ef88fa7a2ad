//! Locations blocked after a "reschedule" verdict.

use std::collections::BTreeSet;

use crate::domain::Location;

/// The set of locations the safety gate has flagged for rescheduling.
///
/// Membership only grows during admission. Nothing expires on its own; a
/// caller has to [`lift`](Self::lift) a location or [`clear`](Self::clear)
/// the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedLocations {
    locations: BTreeSet<Location>,
}

impl RestrictedLocations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a location. Returns true if it was not already flagged.
    pub fn flag(&mut self, location: Location) -> bool {
        self.locations.insert(location)
    }

    /// Returns true if `location` is flagged.
    pub fn contains(&self, location: &Location) -> bool {
        self.locations.contains(location)
    }

    /// Unflag one location. Returns true if it was flagged.
    pub fn lift(&mut self, location: &Location) -> bool {
        self.locations.remove(location)
    }

    /// Unflag everything.
    pub fn clear(&mut self) {
        self.locations.clear();
    }

    /// Iterates over flagged locations in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Returns the number of flagged locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if nothing is flagged.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
