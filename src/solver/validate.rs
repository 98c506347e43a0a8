use thiserror::Error;

use crate::core::{step, Board, Direction, Position, StepResult};
use crate::solver::models::Path;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("path starts at {found}, runner is at {expected}")]
    WrongStart { expected: Position, found: Position },
    #[error("move {index} ({direction:?} from {from}) is not legal")]
    IllegalMove {
        index: usize,
        from: Position,
        direction: Direction,
    },
    #[error("move {index} claims to leave {claimed}, runner is at {actual}")]
    Discontinuous {
        index: usize,
        claimed: Position,
        actual: Position,
    },
}

/// Re-applies every move through the legality rules and returns the final
/// cell, or the first move that could not be made.
pub fn replay_plan(board: &Board, start: Position, path: &Path) -> Result<Position, ReplayError> {
    if path.start() != start {
        return Err(ReplayError::WrongStart {
            expected: start,
            found: path.start(),
        });
    }
    let mut runner = start;
    for (index, mv) in path.moves().iter().enumerate() {
        if mv.from != runner {
            return Err(ReplayError::Discontinuous {
                index,
                claimed: mv.from,
                actual: runner,
            });
        }
        runner = match step(board, runner, mv.direction) {
            StepResult::Moved(next) => next,
            StepResult::Blocked => {
                return Err(ReplayError::IllegalMove {
                    index,
                    from: runner,
                    direction: mv.direction,
                });
            }
        };
    }
    Ok(runner)
}
