use crate::core::DirectionSet;
use crate::reach_graph::ReachGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphInfo {
    pub cells: usize,
    pub edges: usize,
    pub dead_ends: usize,
}

impl GraphInfo {
    pub fn new(graph: &ReachGraph) -> Self {
        let cells = graph.cells().count();
        let edges = graph.edge_count();
        let dead_ends = graph
            .cells()
            .filter(|(_, set)| *set == DirectionSet::empty())
            .count();
        Self {
            cells,
            edges,
            dead_ends,
        }
    }

    pub fn percent_dead_ends(&self) -> f64 {
        if self.cells == 0 {
            0.0
        } else {
            (self.dead_ends as f64 / self.cells as f64) * 100.0
        }
    }

    pub fn to_human_string(&self) -> String {
        format!(
            "Graph has {} cells, {} legal moves, {} dead ends ({:.1}%).",
            self.cells,
            self.edges,
            self.dead_ends,
            self.percent_dead_ends()
        )
    }
}

pub fn get_graph_info(graph: &ReachGraph) -> String {
    GraphInfo::new(graph).to_human_string()
}
