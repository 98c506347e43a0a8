use thiserror::Error;

use crate::core::Position;

/// The level text cannot be turned into a playable board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no player tile '&'")]
    MissingPlayer,
    #[error("level has no exit tile 'S'")]
    MissingExit,
    #[error("level has a second player tile at {second} (first at {first})")]
    DuplicatePlayer { first: Position, second: Position },
    #[error("level has a second exit tile at {second} (first at {first})")]
    DuplicateExit { first: Position, second: Position },
}

/// No complete plan could be produced for a level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("level is unsolvable (unreachable targets: {unreachable:?})")]
    Unsolvable { unreachable: Vec<Position> },
    #[error("search gave up after {expansions} expansions")]
    SearchBudgetExhausted { expansions: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelStartError {
    #[error("malformed level: {0}")]
    Malformed(#[from] LevelError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// A turn was requested while no plan is being played.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("turn requested before a level was started")]
    NoPlan,
    #[error("turn requested after the plan for level {level} was exhausted")]
    PlanExhausted { level: usize },
}

#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("bad turn payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("direction identifier {0} is not in 1..=4")]
pub struct InvalidDirection(pub u8);
