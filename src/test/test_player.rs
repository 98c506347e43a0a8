#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::error::{LevelError, LevelStartError, SequenceError, SolveError, TurnError};
    use crate::player::*;
    use crate::solver::SolverConfig;
    use crate::test::test_util::{DEMO_LADDER, DIRECT_EXIT, WALLED_EXIT};

    fn at(row: i32, col: i32) -> ExternalPosition {
        Position::new(row, col).into()
    }

    fn started(text: &str) -> Session {
        let mut session = Session::new(SolverConfig::default());
        session.on_level_start(text).unwrap();
        session
    }

    #[test]
    fn commands_follow_the_plan_while_in_sync() {
        let mut session = started(DIRECT_EXIT);
        for col in 0..5 {
            assert_eq!(session.expected_position(), Some(Position::new(0, col)));
            assert_eq!(session.on_turn(at(0, col)), Command::move_in(Direction::Right));
        }
        assert!(session.is_exhausted());
        assert_eq!(session.turns(), 5);
        assert_eq!(session.expected_position(), None);
    }

    #[test]
    fn replaying_commands_reaches_the_exit() {
        let mut session = started(DEMO_LADDER);
        let level = session.level().unwrap().clone();
        let mut runner = level.start;
        while !session.is_exhausted() {
            let command = session.on_turn(runner.into());
            runner = match step(&level.board, runner, command.direction) {
                StepResult::Moved(next) => next,
                StepResult::Blocked => panic!("illegal {command:?} at {runner}"),
            };
        }
        assert_eq!(runner, level.exit);
        assert_eq!(session.turns(), 30);
    }

    #[test]
    fn desync_reissues_the_last_command() {
        let mut session = started(DIRECT_EXIT);
        assert_eq!(
            session.turn(at(0, 0)),
            Ok(TurnOutcome::Advanced(Command::move_in(Direction::Right)))
        );
        // the runner did not move
        assert_eq!(
            session.turn(at(0, 0)),
            Ok(TurnOutcome::Reissued(Command::move_in(Direction::Right)))
        );
        assert_eq!(session.cursor(), Some(1));
        assert_eq!(session.turns(), 2);

        assert_eq!(
            session.turn(at(0, 1)),
            Ok(TurnOutcome::Advanced(Command::move_in(Direction::Right)))
        );
        assert_eq!(session.cursor(), Some(2));
    }

    #[test]
    fn off_board_position_counts_as_desync() {
        let mut session = started(DIRECT_EXIT);
        session.on_turn(at(0, 0));
        let outcome = session.turn(ExternalPosition { x: -1, y: 0 }).unwrap();
        assert_eq!(outcome, TurnOutcome::Reissued(Command::move_in(Direction::Right)));
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn first_turn_desync_still_follows_the_plan() {
        let mut session = started(DIRECT_EXIT);
        let outcome = session.turn(at(0, 3)).unwrap();
        assert_eq!(outcome, TurnOutcome::Advanced(Command::move_in(Direction::Right)));
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn turns_after_the_plan_are_rejected() {
        let mut session = started(DIRECT_EXIT);
        for col in 0..5 {
            session.on_turn(at(0, col));
        }
        assert_eq!(
            session.try_on_turn(at(0, 5)),
            Err(SequenceError::PlanExhausted { level: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "sequencing violation")]
    fn turn_without_a_level_panics() {
        let mut session = Session::default();
        session.on_turn(at(0, 0));
    }

    #[test]
    fn turn_without_a_level_is_no_plan() {
        let mut session = Session::default();
        assert_eq!(session.try_on_turn(at(0, 0)), Err(SequenceError::NoPlan));
        assert!(session.is_exhausted());
    }

    #[test]
    fn new_level_resets_the_cursor() {
        let mut session = started(DIRECT_EXIT);
        session.on_turn(at(0, 0));
        session.on_turn(at(0, 1));

        let plan = session.on_level_start(DEMO_LADDER).unwrap();
        assert_eq!(plan.len(), 30);
        assert_eq!(session.level_number(), 2);
        assert_eq!(session.turns(), 0);
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.expected_position(), Some(Position::new(5, 11)));
    }

    #[test]
    fn failed_level_start_leaves_no_plan() {
        let mut session = started(DIRECT_EXIT);
        let err = session.on_level_start("   S\n####").unwrap_err();
        assert_eq!(err, LevelStartError::Malformed(LevelError::MissingPlayer));
        assert_eq!(session.level_number(), 2);
        assert!(session.plan().is_none());
        assert!(session.level().is_none());
        assert_eq!(session.try_on_turn(at(0, 0)), Err(SequenceError::NoPlan));
    }

    #[test]
    fn unsolvable_level_start_reports_targets() {
        let mut session = Session::default();
        let err = session.on_level_start(WALLED_EXIT).unwrap_err();
        assert_eq!(
            err,
            LevelStartError::Solve(SolveError::Unsolvable {
                unreachable: vec![Position::new(0, 5)],
            })
        );
    }

    #[test]
    fn json_turns_round_trip() {
        let mut session = started(DIRECT_EXIT);
        let reply = session
            .on_turn_json(r#"{"runner": {"position": {"x": 0, "y": 0}}}"#)
            .unwrap();
        assert_eq!(reply, r#"{"event":"move","direction":4}"#);
    }

    #[test]
    fn bad_json_payload_is_an_error() {
        let mut session = started(DIRECT_EXIT);
        assert!(matches!(session.on_turn_json("{}"), Err(TurnError::Payload(_))));
        assert_eq!(session.cursor(), Some(0));

        let mut idle = Session::default();
        assert!(matches!(
            idle.on_turn_json(r#"{"runner": {"position": {"x": 0, "y": 0}}}"#),
            Err(TurnError::Sequence(SequenceError::NoPlan))
        ));
    }

    #[test]
    fn runner_state_uses_harness_layout() {
        let state = RunnerState::at(at(2, 7));
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"runner":{"position":{"x":7,"y":2}}}"#
        );
        assert_eq!(state.runner.position.to_board(), Some(Position::new(2, 7)));
    }

    #[test]
    fn dig_serializes_but_unknown_directions_do_not_parse() {
        let dig = Command {
            event: Event::Dig,
            direction: Direction::Down,
        };
        assert_eq!(serde_json::to_string(&dig).unwrap(), r#"{"event":"dig","direction":3}"#);

        let err = serde_json::from_str::<Command>(r#"{"event":"move","direction":5}"#).unwrap_err();
        assert!(err.to_string().contains("direction identifier 5"), "{err}");
        assert_eq!(Direction::try_from(0), Err(crate::error::InvalidDirection(0)));
    }

    #[test]
    fn plan_player_reports_progress() {
        let session = started(DIRECT_EXIT);
        let plan = session.plan().unwrap().clone();
        let mut player = PlanPlayer::new(plan);
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.last_command(), None);

        let outcome = player.next_command(Some(Position::new(0, 0)), 1).unwrap();
        assert_eq!(outcome.command(), Command::move_in(Direction::Right));
        assert_eq!(player.last_command(), Some(Command::move_in(Direction::Right)));
        assert!(!player.is_exhausted());
    }
}
