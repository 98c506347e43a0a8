use bimap::BiMap;
use petgraph::algo::{dijkstra, has_path_connecting};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{NodeFiltered, Reversed};

use crate::core::{BoundedGrid, BoundsOriginRoot, Direction, Position};
use crate::reach_graph::ReachGraph;

/// petgraph view of a [`ReachGraph`], used for connectivity checks and
/// distance bounds. Enumeration order is never taken from here.
pub struct ReachNetwork {
    graph: DiGraph<Position, Direction>,
    nodes: BiMap<Position, NodeIndex>,
    bounds: BoundsOriginRoot,
}

impl ReachNetwork {
    pub fn new(reach: &ReachGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = BiMap::new();
        for (pos, _) in reach.cells() {
            let index = graph.add_node(pos);
            nodes.insert(pos, index);
        }
        for (pos, _) in reach.cells() {
            let Some(&from) = nodes.get_by_left(&pos) else {
                continue;
            };
            for (direction, next) in reach.neighbors(pos) {
                if let Some(&to) = nodes.get_by_left(&next) {
                    graph.add_edge(from, to, direction);
                }
            }
        }
        ReachNetwork {
            graph,
            nodes,
            bounds: reach.bounds(),
        }
    }

    pub fn graph(&self) -> &DiGraph<Position, Direction> {
        &self.graph
    }

    pub fn node(&self, pos: &Position) -> Option<NodeIndex> {
        self.nodes.get_by_left(pos).copied()
    }

    pub fn position(&self, node: NodeIndex) -> Option<Position> {
        self.nodes.get_by_right(&node).copied()
    }

    pub fn is_connected(&self, from: Position, to: Position) -> bool {
        match (self.node(&from), self.node(&to)) {
            (Some(a), Some(b)) => has_path_connecting(&self.graph, a, b, None),
            _ => false,
        }
    }

    /// Fewest moves from every cell to `end` without entering `forbidden`
    /// cells. `None` where `end` cannot be reached at all.
    pub fn distances_to(&self, end: Position, forbidden: &[Position]) -> BoundedGrid<Option<usize>> {
        let mut result = BoundedGrid::new(self.bounds, None);
        let Some(end_node) = self.node(&end) else {
            return result;
        };

        let allowed = NodeFiltered::from_fn(Reversed(&self.graph), |node: NodeIndex| {
            let pos = self.graph[node];
            pos == end || !forbidden.contains(&pos)
        });
        let costs = dijkstra(&allowed, end_node, None, |_| 1usize);

        for (node, cost) in costs {
            if let Some(pos) = self.position(node) {
                result[&pos] = Some(cost);
            }
        }
        result
    }
}
