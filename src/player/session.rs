use log::{debug, error, info, log_enabled};

use crate::console_interface::render_board_with_ruler;
use crate::core::{parse_level, Level, Position};
use crate::error::{LevelStartError, SequenceError, TurnError};
use crate::player::plan_player::{PlanPlayer, TurnOutcome};
use crate::player::protocol::{Command, ExternalPosition, RunnerState};
use crate::solver::{Plan, Solver, SolverConfig};

/// Harness-facing state: one level's plan and the cursor into it.
///
/// Calls alternate strictly: [`Session::on_level_start`], then one
/// [`Session::on_turn`] per move until the plan is exhausted, then the next
/// level.
#[derive(Debug, Default)]
pub struct Session {
    solver: Solver,
    level: Option<Level>,
    player: Option<PlanPlayer>,
    levels_started: usize,
    turns: usize,
}

impl Session {
    pub fn new(config: SolverConfig) -> Self {
        Session {
            solver: Solver::new(config),
            ..Session::default()
        }
    }

    pub fn on_level_start(&mut self, level_text: &str) -> Result<&Plan, LevelStartError> {
        self.levels_started += 1;
        self.turns = 0;
        self.level = None;
        self.player = None;
        let number = self.levels_started;

        let level = parse_level(level_text).inspect_err(|err| {
            error!("level {number} rejected: {err}");
        })?;
        if log_enabled!(log::Level::Debug) {
            debug!("level {number}:\n{}", render_board_with_ruler(&level.board));
        }

        let plan = self.solver.solve_level(&level).inspect_err(|err| {
            error!("failed to find a solution for level {number}: {err}");
        })?;
        info!(
            "level {number}: {} gold bags, plan of {} moves",
            level.gold_bags.len(),
            plan.len()
        );

        self.level = Some(level);
        let player = self.player.insert(PlanPlayer::new(plan));
        Ok(player.plan())
    }

    /// Panics when no plan is being played: turns outside a level are a
    /// caller bug.
    pub fn on_turn(&mut self, observed: ExternalPosition) -> Command {
        match self.try_on_turn(observed) {
            Ok(command) => command,
            Err(err) => panic!("sequencing violation: {err}"),
        }
    }

    pub fn try_on_turn(&mut self, observed: ExternalPosition) -> Result<Command, SequenceError> {
        self.turn(observed).map(TurnOutcome::command)
    }

    pub fn turn(&mut self, observed: ExternalPosition) -> Result<TurnOutcome, SequenceError> {
        let level = self.levels_started;
        let player = self.player.as_mut().ok_or(SequenceError::NoPlan)?;
        let outcome = player.next_command(observed.to_board(), level)?;
        self.turns += 1;
        if player.is_exhausted() {
            info!("level {level}: plan finished after {} turns", self.turns);
        }
        Ok(outcome)
    }

    /// Wire form of [`Session::try_on_turn`]: a `RunnerState` payload in, a
    /// `Command` out.
    pub fn on_turn_json(&mut self, state: &str) -> Result<String, TurnError> {
        let state: RunnerState = serde_json::from_str(state)?;
        let command = self.try_on_turn(state.runner.position)?;
        Ok(serde_json::to_string(&command)?)
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.player.as_ref().map(PlanPlayer::plan)
    }

    /// 1-based number of the most recent level start.
    pub fn level_number(&self) -> usize {
        self.levels_started
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn cursor(&self) -> Option<usize> {
        self.player.as_ref().map(PlanPlayer::cursor)
    }

    pub fn expected_position(&self) -> Option<Position> {
        self.player.as_ref().and_then(PlanPlayer::expected_position)
    }

    pub fn is_exhausted(&self) -> bool {
        self.player.as_ref().is_none_or(PlanPlayer::is_exhausted)
    }
}
