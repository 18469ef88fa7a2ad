//! Exhaustive simple-route enumeration.
//!
//! Depth-first search with explicit backtracking: the current path and the
//! set of locations on it are pushed on the way down and popped on the way
//! back up, so a location used on one branch is free again for its siblings.
//!
//! The number of simple routes grows exponentially with fan-out. This is fine
//! for a network of tens of cities; use `max_legs` beyond that.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{Connection, Location, Route};

/// Every simple route from `origin` to `destination`, in discovery order.
///
/// Routes end at their first arrival at `destination`. With `max_legs`,
/// branches are not expanded beyond that many legs.
pub fn simple_routes(
    catalog: &Catalog,
    origin: &Location,
    destination: &Location,
    max_legs: Option<usize>,
) -> Vec<Route> {
    let mut walk = Enumeration {
        catalog,
        origin,
        destination,
        max_legs,
        on_path: HashSet::new(),
        path: Vec::new(),
        found: Vec::new(),
        expanded: 0,
    };

    walk.visit(origin);

    debug!(
        routes = walk.found.len(),
        expanded = walk.expanded,
        "Route enumeration complete"
    );

    walk.found
}

/// Per-query DFS state.
struct Enumeration<'a> {
    catalog: &'a Catalog,
    origin: &'a Location,
    destination: &'a Location,
    max_legs: Option<usize>,
    /// Locations on the current branch.
    on_path: HashSet<&'a Location>,
    /// Connections on the current branch.
    path: Vec<&'a Connection>,
    found: Vec<Route>,
    expanded: usize,
}

impl<'a> Enumeration<'a> {
    fn visit(&mut self, current: &'a Location) {
        if current == self.destination {
            let legs = self.path.iter().map(|&leg| leg.clone()).collect();
            self.found.push(Route::from_legs(self.origin.clone(), legs));
            return;
        }

        if self.max_legs.is_some_and(|limit| self.path.len() >= limit) {
            return;
        }

        self.expanded += 1;
        self.on_path.insert(current);

        let catalog = self.catalog;
        for connection in catalog.outgoing(current) {
            if self.on_path.contains(&connection.destination) {
                continue;
            }

            self.path.push(connection);
            self.visit(&connection.destination);
            self.path.pop();
        }

        self.on_path.remove(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionRequest;
    use crate::gate::StaticGate;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn catalog(edges: &[(&str, &str, i64, i64)]) -> Catalog {
        let gate = StaticGate::all_safe();
        let mut catalog = Catalog::new();
        for (i, (from, to, cost, minutes)) in edges.iter().enumerate() {
            let req = ConnectionRequest::new(*from, *to, "Test Air", *cost, *minutes, format!("F{i}"));
            catalog.admit(&req, &gate).unwrap();
        }
        catalog
    }

    fn ids(route: &Route) -> Vec<&str> {
        route.legs().iter().map(|c| c.flight_no.as_str()).collect()
    }

    #[test]
    fn discovery_order_follows_insertion_order() {
        let catalog = catalog(&[("A", "B", 100, 60), ("A", "C", 50, 90), ("C", "B", 30, 30)]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("B"), None);

        assert_eq!(routes.len(), 2);
        assert_eq!(ids(&routes[0]), vec!["F0"]);
        assert_eq!(ids(&routes[1]), vec!["F1", "F2"]);
    }

    #[test]
    fn cycles_are_not_followed() {
        let catalog = catalog(&[("A", "B", 1, 1), ("B", "A", 1, 1), ("B", "C", 1, 1)]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("C"), None);

        assert_eq!(routes.len(), 1);
        assert_eq!(ids(&routes[0]), vec!["F0", "F2"]);
    }

    #[test]
    fn siblings_can_reuse_a_location() {
        // Diamond: A->B->D and A->C->D, then D->E
        let catalog = catalog(&[
            ("A", "B", 1, 1),
            ("A", "C", 1, 1),
            ("B", "D", 1, 1),
            ("C", "D", 1, 1),
            ("D", "E", 1, 1),
        ]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("E"), None);

        assert_eq!(routes.len(), 2);
        assert_eq!(ids(&routes[0]), vec!["F0", "F2", "F4"]);
        assert_eq!(ids(&routes[1]), vec!["F1", "F3", "F4"]);
    }

    #[test]
    fn parallel_edges_give_distinct_routes() {
        let catalog = catalog(&[("A", "B", 10, 60), ("A", "B", 20, 60)]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("B"), None);

        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn stops_at_first_arrival() {
        let catalog = catalog(&[("A", "B", 1, 1), ("B", "C", 1, 1), ("C", "B", 1, 1)]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("B"), None);

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].leg_count(), 1);
    }

    #[test]
    fn origin_is_destination() {
        let catalog = catalog(&[("A", "B", 1, 1), ("B", "A", 1, 1)]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("A"), None);

        assert_eq!(routes.len(), 1);
        assert!(routes[0].is_empty());
    }

    #[test]
    fn max_legs_prunes_long_branches() {
        let catalog = catalog(&[("A", "B", 1, 1), ("B", "C", 1, 1), ("A", "C", 5, 5)]);

        let routes = simple_routes(&catalog, &loc("A"), &loc("C"), Some(1));

        assert_eq!(routes.len(), 1);
        assert_eq!(ids(&routes[0]), vec!["F2"]);
    }

    #[test]
    fn unreachable_is_empty() {
        let catalog = catalog(&[("A", "B", 1, 1)]);
        assert!(simple_routes(&catalog, &loc("B"), &loc("A"), None).is_empty());
    }
}
