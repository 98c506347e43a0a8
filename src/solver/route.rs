use std::collections::HashMap;

use crate::core::Position;
use crate::error::SolveError;
use crate::solver::models::{Path, Plan};
use crate::solver::path_search::PathSearch;

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
struct PathKey {
    from: Position,
    to: Position,
    forbidden: Vec<Position>,
}

impl PathKey {
    fn new(from: Position, to: Position, forbidden: &[Position]) -> Self {
        let mut forbidden = forbidden.to_vec();
        forbidden.sort_unstable();
        PathKey { from, to, forbidden }
    }
}

struct Route {
    path: Path,
    order: Vec<Position>,
}

impl Route {
    fn len(&self) -> usize {
        self.path.len()
    }
}

/// Branch-and-bound over gold bag orderings.
///
/// For each remaining bag the optimizer takes the shortest path to it that
/// avoids every other remaining bag, then recurses from there. Totals are
/// compared strictly, so among equally short plans the first ordering in
/// discovery order wins.
pub struct RouteOptimizer<'g> {
    search: PathSearch<'g>,
    cache: Option<HashMap<PathKey, Option<Path>>>,
    exit: Position,
}

impl<'g> RouteOptimizer<'g> {
    pub fn new(search: PathSearch<'g>, exit: Position) -> Self {
        RouteOptimizer {
            search,
            cache: None,
            exit,
        }
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(HashMap::new);
        self
    }

    pub fn expansions(&self) -> usize {
        self.search.expansions()
    }

    /// `Ok(None)` when no ordering reaches every bag and then the exit.
    pub fn optimize(
        &mut self,
        start: Position,
        gold_bags: &[Position],
    ) -> Result<Option<Plan>, SolveError> {
        let route = self.best_route(start, gold_bags, None)?;
        Ok(route.map(|route| Plan::new(route.path, route.order)))
    }

    fn path(
        &mut self,
        from: Position,
        to: Position,
        forbidden: &[Position],
    ) -> Result<Option<Path>, SolveError> {
        let Some(cache) = &self.cache else {
            return self.search.find(from, to, forbidden);
        };
        let key = PathKey::new(from, to, forbidden);
        if let Some(hit) = cache.get(&key) {
            return Ok(hit.clone());
        }
        let found = self.search.find(from, to, forbidden)?;
        if let Some(cache) = &mut self.cache {
            cache.insert(key, found.clone());
        }
        Ok(found)
    }

    /// Best route from `from` through `remaining` to the exit, strictly
    /// shorter than `limit` when one is given.
    fn best_route(
        &mut self,
        from: Position,
        remaining: &[Position],
        limit: Option<usize>,
    ) -> Result<Option<Route>, SolveError> {
        if remaining.is_empty() {
            let Some(path) = self.path(from, self.exit, &[])? else {
                return Ok(None);
            };
            if limit.is_some_and(|l| path.len() >= l) {
                return Ok(None);
            }
            return Ok(Some(Route {
                path,
                order: Vec::new(),
            }));
        }

        let mut best: Option<Route> = None;
        for (index, &gold_bag) in remaining.iter().enumerate() {
            let others: Vec<Position> = remaining
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, &p)| p)
                .collect();

            let limit_here = match (limit, best.as_ref().map(Route::len)) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };

            let Some(segment) = self.path(from, gold_bag, &others)? else {
                continue;
            };
            if limit_here.is_some_and(|l| segment.len() >= l) {
                continue;
            }
            let rest_limit = limit_here.map(|l| l - segment.len());
            let Some(rest) = self.best_route(gold_bag, &others, rest_limit)? else {
                continue;
            };

            let mut path = segment;
            path.extend(rest.path);
            let mut order = Vec::with_capacity(remaining.len());
            order.push(gold_bag);
            order.extend(rest.order);
            best = Some(Route { path, order });
        }
        Ok(best)
    }
}
