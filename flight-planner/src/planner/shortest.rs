//! Single best route by one criterion.
//!
//! Dijkstra over the catalog, keyed on the minimised total. Partial routes
//! ride along in the frontier so both totals are available on arrival. The
//! first time the destination is popped its route is optimal, since all
//! weights are non-negative.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use super::criterion::Criterion;
use crate::catalog::Catalog;
use crate::domain::{Location, Route};

/// Find the route from `origin` to `destination` minimising `criterion`.
///
/// Returns `None` if the destination is unreachable. `origin == destination`
/// yields the empty route.
pub fn shortest_route(
    catalog: &Catalog,
    origin: &Location,
    destination: &Location,
    criterion: Criterion,
) -> Option<Route> {
    let mut best: HashMap<Location, u64> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut popped = 0usize;

    best.insert(origin.clone(), 0);
    frontier.push(FrontierEntry::new(0, seq, Route::empty(origin.clone())));

    while let Some(entry) = frontier.pop() {
        popped += 1;
        let current = entry.route.destination();

        if current == destination {
            debug!(
                criterion = %criterion,
                total = entry.key,
                legs = entry.route.leg_count(),
                popped,
                "Shortest route found"
            );
            return Some(entry.route);
        }

        // A cheaper route to this location was pushed after this one
        if best.get(current).is_some_and(|&known| known < entry.key) {
            continue;
        }

        for connection in catalog.outgoing(current) {
            let candidate = entry.key + criterion.weight(connection);
            let improves = best
                .get(&connection.destination)
                .is_none_or(|&known| candidate < known);
            if !improves {
                continue;
            }

            trace!(
                from = %current,
                to = %connection.destination,
                flight_no = %connection.flight_no,
                candidate,
                "Relaxed connection"
            );

            best.insert(connection.destination.clone(), candidate);
            seq += 1;
            frontier.push(FrontierEntry::new(
                candidate,
                seq,
                entry.route.extended(connection),
            ));
        }
    }

    debug!(criterion = %criterion, popped, "No route");
    None
}

/// Frontier entry ordered as a min-heap on `key`, first-in-first-out among ties.
#[derive(Debug)]
struct FrontierEntry {
    key: u64,
    seq: u64,
    route: Route,
}

impl FrontierEntry {
    fn new(key: u64, seq: u64, route: Route) -> Self {
        Self { key, seq, route }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest key, then the oldest entry.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
