mod config;
mod models;
mod path_search;
mod route;
mod validate;

pub use config::SolverConfig;
pub use models::{Path, Plan};
pub use path_search::{find_path, PathSearch};
pub use route::RouteOptimizer;
pub use validate::{replay_plan, ReplayError};

use log::{debug, info};

use crate::core::{Level, Position};
use crate::error::SolveError;
use crate::reach_graph::{get_graph_info, ReachGraph, ReachNetwork};

#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Builds the reachability graph for a prepared level and plans it.
    pub fn solve_level(&self, level: &Level) -> Result<Plan, SolveError> {
        let graph = ReachGraph::build(&level.board);
        debug!("{}", get_graph_info(&graph));
        self.solve(&graph, level.start, &level.gold_bags, level.exit)
    }

    pub fn solve(
        &self,
        graph: &ReachGraph,
        start: Position,
        gold_bags: &[Position],
        exit: Position,
    ) -> Result<Plan, SolveError> {
        let network = (self.config.distance_pruning || self.config.connectivity_check)
            .then(|| ReachNetwork::new(graph));

        if self.config.connectivity_check {
            if let Some(network) = &network {
                let unreachable = unreachable_targets(network, start, gold_bags, exit);
                if !unreachable.is_empty() {
                    return Err(SolveError::Unsolvable { unreachable });
                }
            }
        }

        let mut search =
            PathSearch::new(graph).with_max_expansions(self.config.max_expansions);
        if self.config.distance_pruning {
            if let Some(network) = &network {
                search = search.with_network(network);
            }
        }
        let mut optimizer =
            RouteOptimizer::new(search, exit).with_cache(self.config.cache_paths);

        match optimizer.optimize(start, gold_bags)? {
            Some(plan) if !plan.is_empty() => {
                info!(
                    "plan of {} moves through {} gold bags ({} expansions)",
                    plan.len(),
                    plan.visit_order().len(),
                    optimizer.expansions()
                );
                Ok(plan)
            }
            _ => {
                let unreachable = match &network {
                    Some(network) => unreachable_targets(network, start, gold_bags, exit),
                    None => unreachable_targets(&ReachNetwork::new(graph), start, gold_bags, exit),
                };
                Err(SolveError::Unsolvable { unreachable })
            }
        }
    }
}

/// Gold bags, then the exit, that have no connection from `start` at all.
fn unreachable_targets(
    network: &ReachNetwork,
    start: Position,
    gold_bags: &[Position],
    exit: Position,
) -> Vec<Position> {
    gold_bags
        .iter()
        .chain(std::iter::once(&exit))
        .copied()
        .filter(|&target| !network.is_connected(start, target))
        .collect()
}

/// Plans with the default configuration.
pub fn solve(
    graph: &ReachGraph,
    start: Position,
    gold_bags: &[Position],
    exit: Position,
) -> Result<Plan, SolveError> {
    Solver::default().solve(graph, start, gold_bags, exit)
}
