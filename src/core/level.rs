use crate::core::board::Board;
use crate::core::models::{Position, Tile};
use crate::error::LevelError;

/// A board ready for graph building, with its landmarks extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// The start cell has been cleared to [`Tile::Empty`].
    pub board: Board,
    pub start: Position,
    pub exit: Position,
    /// Discovery order: bottom row first, left to right.
    pub gold_bags: Vec<Position>,
}

impl Level {
    pub fn from_board(mut board: Board) -> Result<Level, LevelError> {
        let mut start: Option<Position> = None;
        let mut exit: Option<Position> = None;
        let mut gold_bags = Vec::new();

        for row in (0..board.height()).rev() {
            for col in 0..board.width() {
                let pos = Position::new(row, col);
                match board[&pos] {
                    Tile::Player => {
                        if let Some(first) = start {
                            return Err(LevelError::DuplicatePlayer { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    Tile::Exit => {
                        if let Some(first) = exit {
                            return Err(LevelError::DuplicateExit { first, second: pos });
                        }
                        exit = Some(pos);
                    }
                    Tile::GoldBag => gold_bags.push(pos),
                    _ => {}
                }
            }
        }

        let start = start.ok_or(LevelError::MissingPlayer)?;
        let exit = exit.ok_or(LevelError::MissingExit)?;
        board.set(&start, Tile::Empty);

        Ok(Level {
            board,
            start,
            exit,
            gold_bags,
        })
    }
}

pub fn parse_level(text: &str) -> Result<Level, LevelError> {
    Level::from_board(Board::parse(text)?)
}
