use serde::{Deserialize, Serialize};

use crate::core::{Direction, Position};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Move,
    /// Part of the harness vocabulary; plans never contain it.
    Dig,
}

/// `{"event": "move", "direction": 1}`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub event: Event,
    pub direction: Direction,
}

impl Command {
    pub fn move_in(direction: Direction) -> Command {
        Command {
            event: Event::Move,
            direction,
        }
    }
}

/// Runner position as reported by the harness.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalPosition {
    pub x: i64,
    pub y: i64,
}

impl ExternalPosition {
    pub fn to_board(self) -> Option<Position> {
        Position::from_external(self.x, self.y)
    }
}

impl From<Position> for ExternalPosition {
    fn from(pos: Position) -> Self {
        let (x, y) = pos.to_external();
        ExternalPosition { x, y }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Runner {
    pub position: ExternalPosition,
}

/// `{"runner": {"position": {"x": .., "y": ..}}}`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunnerState {
    pub runner: Runner,
}

impl RunnerState {
    pub fn at(position: ExternalPosition) -> Self {
        RunnerState {
            runner: Runner { position },
        }
    }
}
