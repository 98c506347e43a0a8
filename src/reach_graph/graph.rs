use crate::core::{
    legal_directions, Board, BoundedGrid, BoundsOriginRoot, Direction, DirectionSet, Position,
};

/// Legal outgoing directions for every cell of a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachGraph {
    directions: BoundedGrid<DirectionSet>,
}

impl ReachGraph {
    pub fn build(board: &Board) -> Self {
        let mut directions = BoundedGrid::new(board.bounds(), DirectionSet::empty());
        for pos in board.bounds().positions() {
            directions[&pos] = legal_directions(board, pos);
        }
        ReachGraph { directions }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.directions.size()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.directions.contains(pos)
    }

    /// Empty for cells outside the board.
    pub fn directions(&self, pos: &Position) -> DirectionSet {
        self.directions
            .get(pos)
            .copied()
            .unwrap_or(DirectionSet::empty())
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> {
        self.directions(&pos)
            .directions()
            .map(move |d| (d, pos.step(d)))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, DirectionSet)> + '_ {
        self.directions.iter().map(|(pos, set)| (pos, *set))
    }

    pub fn edge_count(&self) -> usize {
        self.cells().map(|(_, set)| set.bits().count_ones() as usize).sum()
    }
}
