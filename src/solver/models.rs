use crate::core::{Direction, Move, Position};

/// Ordered moves between two cells. A path with no moves is a valid
/// result when start and end coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    start: Position,
    moves: Vec<Move>,
}

impl Path {
    pub fn empty(start: Position) -> Path {
        Path {
            start,
            moves: Vec::new(),
        }
    }

    /// `moves` must be contiguous and begin at `start`.
    pub fn new(start: Position, moves: Vec<Move>) -> Path {
        debug_assert!(moves.first().is_none_or(|m| m.from == start));
        debug_assert!(moves.windows(2).all(|w| w[0].to() == w[1].from));
        Path { start, moves }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.moves.last().map_or(self.start, Move::to)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().map(|m| m.direction)
    }

    /// Every cell occupied, start through end.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.start).chain(self.moves.iter().map(Move::to))
    }

    /// Appends `next`, which must start where this path ends.
    pub fn extend(&mut self, next: Path) {
        debug_assert_eq!(self.end(), next.start);
        self.moves.extend(next.moves);
    }
}

/// Solution for one level: every gold bag, then the exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    path: Path,
    visit_order: Vec<Position>,
}

impl Plan {
    pub fn new(path: Path, visit_order: Vec<Position>) -> Plan {
        Plan { path, visit_order }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn moves(&self) -> &[Move] {
        self.path.moves()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn start(&self) -> Position {
        self.path.start()
    }

    pub fn end(&self) -> Position {
        self.path.end()
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.path.directions()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.path.positions()
    }

    /// Gold bags in the order they are collected.
    pub fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }
}
