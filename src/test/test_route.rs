#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::error::SolveError;
    use crate::solver::*;
    use crate::test::test_util::*;

    fn plan_for(game: &LevelTestState, config: SolverConfig) -> Result<Plan, SolveError> {
        Solver::new(config).solve_level(&game.level)
    }

    #[test]
    fn one_floor_collects_the_near_side_first() {
        let game = LevelTestState::new(SCENARIO_ONE_FLOOR);
        assert_eq!(game.level.start, Position::new(0, 15));
        assert_eq!(game.level.exit, Position::new(0, 27));

        let plan = plan_for(&game, SolverConfig::default()).unwrap();
        assert_eq!(
            direction_digits(plan.directions()),
            "222222222222444444444444444444444444"
        );
        assert_eq!(
            plan.visit_order(),
            &[Position::new(0, 8), Position::new(0, 3), Position::new(0, 19)]
        );
        game.assert_plan_valid(&plan);
    }

    #[test]
    fn demo_level_climbs_then_sweeps_left() {
        let game = LevelTestState::new(DEMO_LADDER);
        let plan = plan_for(&game, SolverConfig::default()).unwrap();
        assert_eq!(direction_digits(plan.directions()), "444444441112222222222222222222");
        assert_eq!(
            plan.visit_order(),
            &[Position::new(2, 12), Position::new(2, 8), Position::new(2, 6)]
        );
        game.assert_plan_valid(&plan);

        let expected = concat!(
            "                          \n",
            "                          \n",
            "S<<<<<<<<<<<<<<<<<<<      \n",
            "###################^      \n",
            "                   ^      \n",
            "           >>>>>>>>^      \n",
            "##########################\n",
        );
        let overlay = crate::console_interface::render_plan_overlay(game.board(), plan.path());
        assert_eq_text!(expected, overlay.as_str());
    }

    #[test]
    fn open_ladder_field_finds_the_shortest_tour() {
        let mut rows = vec![vec!['H'; 20]; 12];
        rows[11][2] = '&';
        rows[0][17] = 'S';
        rows[3][5] = '$';
        rows[8][14] = '$';
        rows[1][9] = '$';
        let mut text: Vec<String> = rows.iter().map(|row| row.iter().collect()).collect();
        text.push("#".repeat(20));
        let game = LevelTestState::new(&text.join("\n"));

        let plan = plan_for(&game, SolverConfig::default()).unwrap();
        assert_eq!(plan.len(), 40);
        game.assert_plan_valid(&plan);

        let overlay = crate::console_interface::render_plan_overlay(game.board(), plan.path());
        assert_eq!(overlay.lines().count(), 13);
    }

    #[test]
    fn rope_crossing_uses_the_rope() {
        let game = LevelTestState::new(ROPE_CROSSING);
        let plan = plan_for(&game, SolverConfig::default()).unwrap();
        assert_eq!(direction_digits(plan.directions()), "41114443422332211144444444");
        assert_eq!(plan.visit_order(), &[Position::new(2, 5)]);
        game.assert_plan_valid(&plan);
    }

    #[test]
    fn no_gold_walks_straight_to_the_exit() {
        let game = LevelTestState::new(DIRECT_EXIT);
        let plan = plan_for(&game, SolverConfig::default()).unwrap();
        assert_eq!(direction_digits(plan.directions()), "44444");
        assert!(plan.visit_order().is_empty());
        assert_eq!(plan.start(), game.level.start);
        assert_eq!(plan.end(), game.level.exit);
    }

    #[test]
    fn walled_exit_is_reported_unreachable() {
        let game = LevelTestState::new(WALLED_EXIT);
        let expected = SolveError::Unsolvable {
            unreachable: vec![Position::new(0, 5)],
        };
        assert_eq!(plan_for(&game, SolverConfig::default()), Err(expected.clone()));
        assert_eq!(plan_for(&game, SolverConfig::exhaustive()), Err(expected));
    }

    #[test]
    fn gold_in_a_pit_fails_without_unreachable_targets() {
        let game = LevelTestState::new(GOLD_IN_PIT);
        let expected = SolveError::Unsolvable {
            unreachable: Vec::new(),
        };
        assert_eq!(plan_for(&game, SolverConfig::default()), Err(expected.clone()));
        assert_eq!(plan_for(&game, SolverConfig::exhaustive()), Err(expected));
    }

    #[test]
    fn helpers_never_change_the_chosen_plan() {
        for text in [SCENARIO_ONE_FLOOR, DEMO_LADDER, ROPE_CROSSING, DIRECT_EXIT] {
            let game = LevelTestState::new(text);
            let fast = plan_for(&game, SolverConfig::default()).unwrap();
            let plain = plan_for(&game, SolverConfig::exhaustive()).unwrap();
            assert_eq!(fast, plain);
        }
    }

    #[test]
    fn path_cache_saves_repeated_searches() {
        let game = LevelTestState::new(SCENARIO_ONE_FLOOR);
        let mut cached = RouteOptimizer::new(PathSearch::new(&game.graph), game.level.exit)
            .with_cache(true);
        let mut uncached = RouteOptimizer::new(PathSearch::new(&game.graph), game.level.exit)
            .with_cache(false);

        let a = cached.optimize(game.level.start, &game.level.gold_bags).unwrap();
        let b = uncached.optimize(game.level.start, &game.level.gold_bags).unwrap();
        assert_eq!(a, b);
        assert!(cached.expansions() <= uncached.expansions());
    }

    #[test]
    fn expansion_budget_surfaces_as_an_error() {
        let game = LevelTestState::new(DEMO_LADDER);
        let config = SolverConfig {
            max_expansions: Some(3),
            ..SolverConfig::default()
        };
        assert!(matches!(
            plan_for(&game, config),
            Err(SolveError::SearchBudgetExhausted { .. })
        ));
    }

    #[test]
    fn free_solve_uses_the_default_config() {
        let game = LevelTestState::new(ROPE_CROSSING);
        let plan = solve(&game.graph, game.level.start, &game.level.gold_bags, game.level.exit).unwrap();
        assert_eq!(Ok(plan), plan_for(&game, SolverConfig::default()));
    }

    #[test]
    fn solver_keeps_its_config() {
        let solver = Solver::new(SolverConfig::exhaustive());
        assert_eq!(solver.config(), &SolverConfig::exhaustive());
        assert!(!solver.config().distance_pruning);
        assert_eq!(Solver::default().config(), &SolverConfig::default());
    }

    #[test]
    fn config_loads_from_partial_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"cache_paths": false}"#).unwrap();
        assert_eq!(
            config,
            SolverConfig {
                cache_paths: false,
                ..SolverConfig::default()
            }
        );
        let empty: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SolverConfig::default());
        assert_eq!(empty.max_expansions, MAX_EXPANSIONS);
    }
}
