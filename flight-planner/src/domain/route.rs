//! Route types.
//!
//! A `Route` is a complete trip from an origin to a destination as an ordered
//! list of connections, with running totals.

use super::{Connection, Location};

/// A route from an origin through zero or more connections.
///
/// Each leg departs from the previous leg's destination (or from the origin,
/// for the first leg); this holds by construction since routes are only built
/// by walking the catalog.
///
/// # Invariants
///
/// - `total_cost` is the sum of the legs' costs
/// - `total_minutes` is the sum of the legs' flight times (no layover time)
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{Connection, Location, Route};
///
/// let pune = Location::parse("Pune").unwrap();
/// let hyd = Location::parse("Hyderabad").unwrap();
/// let chennai = Location::parse("Chennai").unwrap();
///
/// let route = Route::from_legs(
///     pune,
///     vec![
///         Connection::new("Spice Jet", hyd, 5000, 120, "SG805"),
///         Connection::new("Indigo", chennai.clone(), 2000, 45, "6E809"),
///     ],
/// );
///
/// assert_eq!(route.destination(), &chennai);
/// assert_eq!(route.total_cost(), 7000);
/// assert_eq!(route.total_minutes(), 165);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    origin: Location,
    legs: Vec<Connection>,
    total_cost: u64,
    total_minutes: u64,
}

impl Route {
    /// The zero-length route that stays at `origin`.
    pub fn empty(origin: Location) -> Self {
        Self {
            origin,
            legs: Vec::new(),
            total_cost: 0,
            total_minutes: 0,
        }
    }

    /// Builds a route from its legs, computing the totals.
    pub fn from_legs(origin: Location, legs: Vec<Connection>) -> Self {
        let total_cost = legs.iter().map(|leg| u64::from(leg.cost)).sum();
        let total_minutes = legs.iter().map(|leg| u64::from(leg.minutes)).sum();

        Self {
            origin,
            legs,
            total_cost,
            total_minutes,
        }
    }

    /// Returns a copy of this route with `leg` appended.
    pub fn extended(&self, leg: &Connection) -> Self {
        let mut legs = Vec::with_capacity(self.legs.len() + 1);
        legs.extend_from_slice(&self.legs);
        legs.push(leg.clone());

        Self {
            origin: self.origin.clone(),
            legs,
            total_cost: self.total_cost + u64::from(leg.cost),
            total_minutes: self.total_minutes + u64::from(leg.minutes),
        }
    }

    /// Returns the starting location.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns where the route currently ends.
    pub fn destination(&self) -> &Location {
        self.legs
            .last()
            .map(|leg| &leg.destination)
            .unwrap_or(&self.origin)
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Connection] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if the route has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of leg costs.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Sum of leg flight times, in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.total_minutes
    }

    /// Iterates over the legs paired with the location each departs from.
    pub fn hops(&self) -> impl Iterator<Item = (&Location, &Connection)> {
        let departures =
            std::iter::once(&self.origin).chain(self.legs.iter().map(|leg| &leg.destination));
        departures.zip(self.legs.iter())
    }
}
