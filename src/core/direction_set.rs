use bitflags::bitflags;

use crate::core::models::Direction;

bitflags! {
    /// Set of legal outgoing directions from one cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        const UP = 1 << 0;
        const LEFT = 1 << 1;
        const DOWN = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl DirectionSet {
    pub fn of(direction: Direction) -> DirectionSet {
        match direction {
            Direction::Up => DirectionSet::UP,
            Direction::Left => DirectionSet::LEFT,
            Direction::Down => DirectionSet::DOWN,
            Direction::Right => DirectionSet::RIGHT,
        }
    }

    pub fn has(self, direction: Direction) -> bool {
        self.contains(DirectionSet::of(direction))
    }

    /// Members in Up, Left, Down, Right order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.has(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::empty(), |set, d| set | DirectionSet::of(d))
    }
}
