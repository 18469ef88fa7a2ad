//! Optimisation criteria.

use std::fmt;

use crate::domain::{Connection, Route};

/// Which total a search minimises or ranks by.
///
/// The other total is still accumulated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Sum of fares
    Cost,
    /// Sum of flight times
    Time,
}

impl Criterion {
    /// The weight of a single connection under this criterion.
    pub fn weight(self, connection: &Connection) -> u64 {
        match self {
            Criterion::Cost => u64::from(connection.cost),
            Criterion::Time => u64::from(connection.minutes),
        }
    }

    /// The total of a route under this criterion.
    pub fn total(self, route: &Route) -> u64 {
        match self {
            Criterion::Cost => route.total_cost(),
            Criterion::Time => route.total_minutes(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Cost => f.write_str("cost"),
            Criterion::Time => f.write_str("time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    #[test]
    fn weights_and_totals() {
        let b = Location::parse("B").unwrap();
        let leg = Connection::new("Op", b, 100, 60, "F1");
        let route = Route::from_legs(Location::parse("A").unwrap(), vec![leg.clone()]);

        assert_eq!(Criterion::Cost.weight(&leg), 100);
        assert_eq!(Criterion::Time.weight(&leg), 60);
        assert_eq!(Criterion::Cost.total(&route), 100);
        assert_eq!(Criterion::Time.total(&route), 60);
    }

    #[test]
    fn display() {
        assert_eq!(Criterion::Cost.to_string(), "cost");
        assert_eq!(Criterion::Time.to_string(), "time");
    }
}
