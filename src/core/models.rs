use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::InvalidDirection;

/// Classification of a single level cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty,
    Brick,
    Ladder,
    Rope,
    Player,
    GoldBag,
    Exit,
}

impl Tile {
    /// Total over every character: anything unknown is empty space.
    pub fn classify(symbol: char) -> Tile {
        match symbol {
            '#' => Tile::Brick,
            'H' => Tile::Ladder,
            '-' => Tile::Rope,
            '&' => Tile::Player,
            '$' => Tile::GoldBag,
            'S' => Tile::Exit,
            _ => Tile::Empty,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Brick => '#',
            Tile::Ladder => 'H',
            Tile::Rope => '-',
            Tile::Player => '&',
            Tile::GoldBag => '$',
            Tile::Exit => 'S',
        }
    }

    pub fn is_brick(self) -> bool {
        self == Tile::Brick
    }

    pub fn is_ladder(self) -> bool {
        self == Tile::Ladder
    }

    pub fn is_rope(self) -> bool {
        self == Tile::Rope
    }
}

/// A cell on the board. Row 0 is the top text row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn step(self, direction: Direction) -> Position {
        self + direction.delta()
    }

    /// Harness coordinates share the board orientation: `x` is the column and
    /// `y` the row counted from the top. Negative or oversized values have no
    /// board cell.
    pub fn from_external(x: i64, y: i64) -> Option<Position> {
        let row = i32::try_from(y).ok().filter(|r| *r >= 0)?;
        let col = i32::try_from(x).ok().filter(|c| *c >= 0)?;
        Some(Position { row, col })
    }

    pub fn to_external(self) -> (i64, i64) {
        (i64::from(self.col), i64::from(self.row))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.row, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Position {
        Position {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}

/// Movement direction. The discriminants are the wire identifiers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Direction {
    Up = 1,
    Left = 2,
    Down = 3,
    Right = 4,
}

impl Direction {
    /// Enumeration order used everywhere a stable order matters.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Direction> {
        match id {
            1 => Some(Direction::Up),
            2 => Some(Direction::Left),
            3 => Some(Direction::Down),
            4 => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(self) -> Offset {
        match self {
            Direction::Up => Offset { row: -1, col: 0 },
            Direction::Left => Offset { row: 0, col: -1 },
            Direction::Down => Offset { row: 1, col: 0 },
            Direction::Right => Offset { row: 0, col: 1 },
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Left => '<',
            Direction::Down => 'v',
            Direction::Right => '>',
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction.id()
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(id: u8) -> Result<Direction, InvalidDirection> {
        Direction::from_id(id).ok_or(InvalidDirection(id))
    }
}

/// One step of a path: the cell left and the direction taken.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Position,
    pub direction: Direction,
}

impl Move {
    pub fn new(from: Position, direction: Direction) -> Move {
        Move { from, direction }
    }

    pub fn to(&self) -> Position {
        self.from.step(self.direction)
    }
}
