use log::{trace, warn};

use crate::core::Position;
use crate::error::SequenceError;
use crate::player::protocol::Command;
use crate::solver::Plan;

/// What a turn did to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Advanced(Command),
    /// The runner was not where the plan expected; the previous command is
    /// sent again and the cursor stays put.
    Reissued(Command),
}

impl TurnOutcome {
    pub fn command(self) -> Command {
        match self {
            TurnOutcome::Advanced(command) | TurnOutcome::Reissued(command) => command,
        }
    }
}

/// Replays a [`Plan`] one command per turn.
#[derive(Clone, Debug)]
pub struct PlanPlayer {
    plan: Plan,
    cursor: usize,
    last_command: Option<Command>,
}

impl PlanPlayer {
    pub fn new(plan: Plan) -> Self {
        PlanPlayer {
            plan,
            cursor: 0,
            last_command: None,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.plan.len()
    }

    /// Where the runner should be before the next command is applied.
    pub fn expected_position(&self) -> Option<Position> {
        self.plan.moves().get(self.cursor).map(|mv| mv.from)
    }

    /// `observed` is `None` when the reported position has no board cell.
    pub fn next_command(
        &mut self,
        observed: Option<Position>,
        level: usize,
    ) -> Result<TurnOutcome, SequenceError> {
        let Some(&mv) = self.plan.moves().get(self.cursor) else {
            return Err(SequenceError::PlanExhausted { level });
        };

        if observed != Some(mv.from) {
            match self.last_command {
                Some(last) => {
                    warn!(
                        "runner at {:?}, expected {}; resubmitting {:?}",
                        observed, mv.from, last
                    );
                    return Ok(TurnOutcome::Reissued(last));
                }
                None => warn!(
                    "runner at {:?} before the first move, expected {}; following the plan",
                    observed, mv.from
                ),
            }
        }

        let command = Command::move_in(mv.direction);
        self.cursor += 1;
        self.last_command = Some(command);
        trace!("turn {}/{}: {:?}", self.cursor, self.plan.len(), command);
        Ok(TurnOutcome::Advanced(command))
    }
}
