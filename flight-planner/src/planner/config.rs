//! Search configuration for the route planner.

/// Configuration parameters for route search.
///
/// Both limits only affect the all-routes enumeration; the single best
/// route searches ignore them.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Maximum number of ranked routes to return.
    /// `None` returns every simple route found.
    pub max_routes: Option<usize>,

    /// Maximum number of legs in an enumerated route.
    /// Branches longer than this are pruned during the search, which bounds
    /// the otherwise exponential enumeration on densely connected networks.
    pub max_legs: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_routes: Option<usize>, max_legs: Option<usize>) -> Self {
        Self {
            max_routes,
            max_legs,
        }
    }

    /// Limit the number of ranked routes returned.
    pub fn with_max_routes(mut self, n: usize) -> Self {
        self.max_routes = Some(n);
        self
    }

    /// Limit the number of legs per enumerated route.
    pub fn with_max_legs(mut self, n: usize) -> Self {
        self.max_legs = Some(n);
        self
    }
}
