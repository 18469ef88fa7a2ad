//! Plain-text rendering of query results.
//!
//! Each report is a small borrowing struct implementing `Display`, so the
//! caller decides whether to print it or collect it into a string.

use std::fmt;

use crate::domain::{Connection, Location, Route};
use crate::planner::{Criterion, RouteQuery};

/// Heading printed before a weather summary when a query is refused.
const REFUSED_HEADING: &str =
    "Sorry no flights available due to bad weather. Details of the weather are as follows: ";

fn write_legs(f: &mut fmt::Formatter<'_>, route: &Route) -> fmt::Result {
    writeln!(f, "Flights to take:")?;
    for (from, leg) in route.hops() {
        writeln!(
            f,
            "Airline: {}, From: {}, To: {}, Cost: {}, Time: {} minutes.",
            leg.operator, from, leg.destination, leg.cost, leg.minutes
        )?;
    }
    Ok(())
}

/// The cheapest or fastest route, or the lack of one.
pub struct BestRouteReport<'a> {
    pub query: &'a RouteQuery,
    pub criterion: Criterion,
    pub route: Option<&'a Route>,
}

impl fmt::Display for BestRouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(route) = self.route else {
            return writeln!(
                f,
                "No route available from {} to {}",
                self.query.origin, self.query.destination
            );
        };

        match self.criterion {
            Criterion::Cost => writeln!(
                f,
                "Minimum cost to {} is {} with time {} minutes.",
                self.query.destination,
                route.total_cost(),
                route.total_minutes()
            )?,
            Criterion::Time => writeln!(
                f,
                "Minimum time to {} is {} minutes with cost {}",
                self.query.destination,
                route.total_minutes(),
                route.total_cost()
            )?,
        }
        write_legs(f, route)
    }
}

/// Every route between two locations, in ranked order.
pub struct RankedRoutesReport<'a> {
    pub query: &'a RouteQuery,
    pub criterion: Criterion,
    pub routes: &'a [Route],
}

impl fmt::Display for RankedRoutesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RouteQuery {
            origin,
            destination,
        } = self.query;

        if self.routes.is_empty() {
            return writeln!(f, "No routes available from {origin} to {destination}");
        }

        writeln!(
            f,
            "All possible routes from {origin} to {destination} sorted by {}:",
            self.criterion
        )?;
        for route in self.routes {
            match self.criterion {
                Criterion::Cost => writeln!(
                    f,
                    "Total cost: {}, Total time: {} minutes",
                    route.total_cost(),
                    route.total_minutes()
                )?,
                Criterion::Time => writeln!(
                    f,
                    "Total time: {} minutes, Total cost: {}",
                    route.total_minutes(),
                    route.total_cost()
                )?,
            }
            write_legs(f, route)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Direct connections between two locations.
pub struct DirectReport<'a> {
    pub query: &'a RouteQuery,
    pub connections: &'a [&'a Connection],
}

impl fmt::Display for DirectReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connections.is_empty() {
            return writeln!(
                f,
                "No direct flight between {} and {}",
                self.query.origin, self.query.destination
            );
        }

        for connection in self.connections {
            writeln!(
                f,
                "Direct flight found: Airline: {}, Cost: {}, Time: {} minutes.",
                connection.operator, connection.cost, connection.minutes
            )?;
        }
        Ok(())
    }
}

/// A query refused because a location is restricted.
pub struct RefusedReport<'a> {
    pub location: &'a Location,
    /// Weather line for the location, if one was gathered.
    pub summary: Option<&'a str>,
}

impl fmt::Display for RefusedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REFUSED_HEADING}")?;
        match self.summary {
            Some(summary) => writeln!(f, "{summary}"),
            None => writeln!(f, "No weather details available for {}.", self.location),
        }
    }
}
