use log::debug;

use crate::core::{BoundedGrid, Direction, DirectionSet, Move, Position};
use crate::error::SolveError;
use crate::reach_graph::{ReachGraph, ReachNetwork};
use crate::solver::models::Path;

/// One level of the explicit depth-first stack.
struct Frame {
    position: Position,
    next: usize,
}

impl Frame {
    fn new(position: Position) -> Self {
        Frame { position, next: 0 }
    }

    fn next_direction(&mut self, allowed: DirectionSet) -> Option<Direction> {
        while let Some(&direction) = Direction::ALL.get(self.next) {
            self.next += 1;
            if allowed.has(direction) {
                return Some(direction);
            }
        }
        None
    }
}

/// Shortest simple path search over a [`ReachGraph`].
///
/// The result is the first minimal-length path in Up, Left, Down, Right
/// enumeration order. Pruning only discards branches that cannot produce a
/// strictly shorter path, so it never changes which path is returned.
pub struct PathSearch<'g> {
    graph: &'g ReachGraph,
    network: Option<&'g ReachNetwork>,
    max_expansions: Option<usize>,
    expansions: usize,
}

impl<'g> PathSearch<'g> {
    pub fn new(graph: &'g ReachGraph) -> Self {
        PathSearch {
            graph,
            network: None,
            max_expansions: None,
            expansions: 0,
        }
    }

    /// Enables distance pruning.
    pub fn with_network(mut self, network: &'g ReachNetwork) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Expansions so far, across every query made with this search.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn find(
        &mut self,
        from: Position,
        to: Position,
        forbidden: &[Position],
    ) -> Result<Option<Path>, SolveError> {
        if from == to {
            return Ok(Some(Path::empty(from)));
        }
        if forbidden.contains(&from) || !self.graph.contains(&from) || !self.graph.contains(&to) {
            return Ok(None);
        }

        let bound = self.network.map(|n| n.distances_to(to, forbidden));
        let floor = match &bound {
            Some(bound) => match bound[&from] {
                Some(distance) => Some(distance),
                None => return Ok(None),
            },
            None => None,
        };

        let expansions_before = self.expansions;
        let mut visited = BoundedGrid::new(self.graph.bounds(), false);
        let mut moves: Vec<Move> = Vec::new();
        let mut best: Option<Vec<Move>> = None;
        let mut stack = vec![Frame::new(from)];
        visited[&from] = true;

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let position = frame.position;
            let Some(direction) = frame.next_direction(self.graph.directions(&position)) else {
                stack.pop();
                visited[&position] = false;
                moves.pop();
                continue;
            };

            let next = position.step(direction);
            if visited[&next] {
                continue;
            }
            let depth = moves.len() + 1;
            let best_len = best.as_ref().map(Vec::len);
            if best_len.is_some_and(|len| depth >= len) {
                continue;
            }

            if next == to {
                let mut found = moves.clone();
                found.push(Move::new(position, direction));
                best = Some(found);
                if floor == Some(depth) {
                    break;
                }
                continue;
            }
            if forbidden.contains(&next) {
                continue;
            }
            if let Some(bound) = &bound {
                match bound[&next] {
                    None => continue,
                    Some(remaining) if best_len.is_some_and(|len| depth + remaining >= len) => {
                        continue;
                    }
                    Some(_) => {}
                }
            }

            self.expansions += 1;
            if self.max_expansions.is_some_and(|limit| self.expansions > limit) {
                return Err(SolveError::SearchBudgetExhausted {
                    expansions: self.expansions,
                });
            }
            moves.push(Move::new(position, direction));
            visited[&next] = true;
            stack.push(Frame::new(next));
        }

        debug!(
            "path {} -> {} avoiding {} cells: {} after {} expansions",
            from,
            to,
            forbidden.len(),
            best.as_ref()
                .map_or("no route".to_string(), |m| format!("{} moves", m.len())),
            self.expansions - expansions_before
        );
        Ok(best.map(|moves| Path::new(from, moves)))
    }
}

/// Unbounded search without distance pruning.
pub fn find_path(
    graph: &ReachGraph,
    from: Position,
    to: Position,
    forbidden: &[Position],
) -> Option<Path> {
    PathSearch::new(graph).find(from, to, forbidden).ok().flatten()
}
