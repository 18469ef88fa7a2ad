//! Route queries over a catalog.
//!
//! [`Planner`] is the query surface: it validates a [`RouteQuery`] against
//! the catalog's restricted locations and then runs one of the search
//! algorithms. "Not found" is always a value (`None` or an empty list),
//! never an error.

use tracing::debug;

use super::config::SearchConfig;
use super::criterion::Criterion;
use super::enumerate::simple_routes;
use super::rank::rank_routes;
use super::shortest::shortest_route;
use crate::catalog::Catalog;
use crate::domain::{Connection, DomainError, Location, Route};

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid query input
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Origin or destination is flagged for rescheduling
    #[error("no flights available at {0}: location is restricted due to bad weather")]
    Restricted(Location),
}

/// An origin/destination pair to search between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Where the route starts.
    pub origin: Location,

    /// Where the route must end.
    pub destination: Location,
}

impl RouteQuery {
    /// Create a query from validated locations.
    pub fn new(origin: Location, destination: Location) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Create a query from raw location names.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Invalid`] if either name is empty or blank.
    pub fn parse(origin: &str, destination: &str) -> Result<Self, SearchError> {
        let origin = Location::parse(origin).map_err(DomainError::from)?;
        let destination = Location::parse(destination).map_err(DomainError::from)?;
        Ok(Self::new(origin, destination))
    }
}

/// Route planner over a catalog snapshot.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a Catalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Cheapest route, or `None` if the destination is unreachable.
    pub fn cheapest(&self, query: &RouteQuery) -> Result<Option<Route>, SearchError> {
        self.best(query, Criterion::Cost)
    }

    /// Fastest route, or `None` if the destination is unreachable.
    pub fn fastest(&self, query: &RouteQuery) -> Result<Option<Route>, SearchError> {
        self.best(query, Criterion::Time)
    }

    /// The single route minimising `criterion`.
    ///
    /// The other total is accumulated along the way but plays no part in
    /// the choice; among equally good routes the first one reached wins.
    pub fn best(
        &self,
        query: &RouteQuery,
        criterion: Criterion,
    ) -> Result<Option<Route>, SearchError> {
        self.check(query)?;
        Ok(shortest_route(
            self.catalog,
            &query.origin,
            &query.destination,
            criterion,
        ))
    }

    /// All simple routes, cheapest first.
    pub fn all_by_cost(&self, query: &RouteQuery) -> Result<Vec<Route>, SearchError> {
        self.all_routes(query, Criterion::Cost)
    }

    /// All simple routes, fastest first.
    pub fn all_by_time(&self, query: &RouteQuery) -> Result<Vec<Route>, SearchError> {
        self.all_routes(query, Criterion::Time)
    }

    /// All simple routes ranked by `criterion`.
    ///
    /// Equal totals keep the order the depth-first walk found them in. An
    /// empty list means no route is available.
    pub fn all_routes(
        &self,
        query: &RouteQuery,
        criterion: Criterion,
    ) -> Result<Vec<Route>, SearchError> {
        self.check(query)?;

        let routes = simple_routes(
            self.catalog,
            &query.origin,
            &query.destination,
            self.config.max_legs,
        );
        let mut routes = rank_routes(routes, criterion);

        if let Some(limit) = self.config.max_routes {
            routes.truncate(limit);
        }

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            criterion = %criterion,
            routes = routes.len(),
            "Ranked all routes"
        );

        Ok(routes)
    }

    /// Connections going straight from origin to destination.
    ///
    /// An empty list means there is no direct connection.
    pub fn direct(&self, query: &RouteQuery) -> Result<Vec<&'a Connection>, SearchError> {
        self.check(query)?;
        Ok(self
            .catalog
            .direct_connections(&query.origin, &query.destination))
    }

    /// Reject queries touching a restricted location, origin first.
    fn check(&self, query: &RouteQuery) -> Result<(), SearchError> {
        for location in [&query.origin, &query.destination] {
            if self.catalog.is_restricted(location) {
                debug!(location = %location, "Query refused: location restricted");
                return Err(SearchError::Restricted(location.clone()));
            }
        }
        Ok(())
    }
}
