//! Route ranking for search results.

use super::criterion::Criterion;
use crate::domain::Route;

/// Rank routes by a criterion, smallest total first.
///
/// The sort is stable: routes with equal totals keep the order they were
/// found in.
pub fn rank_routes(mut routes: Vec<Route>, criterion: Criterion) -> Vec<Route> {
    routes.sort_by_key(|route| criterion.total(route));
    routes
}
