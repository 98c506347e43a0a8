// Offline runner solver.
// Usage: runner_solver [solve|graph|replay] [level file] [config json]
// Tiles: '#' brick, '&' runner, '$' gold bag, 'H' ladder, '-' rope, 'S' exit, ' ' empty.

use anyhow::{Context, Result, anyhow};
use log::info;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::error::Error;
use std::io::Stdout;

use runner_solver::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_board_with_ruler, render_plan_overlay,
    render_replay, restore_after, setup_terminal,
};
use runner_solver::core::{Board, Position, parse_level};
use runner_solver::models::ReplayRenderState;
use runner_solver::player::{Command, Session};
use runner_solver::reach_graph::{ReachGraph, get_graph_info, get_json_data};
use runner_solver::solver::SolverConfig;

const DEMO_LEVEL: &str = concat!(
    "                          \n",
    "                          \n",
    "S     $ $   $      H      \n",
    "###################H      \n",
    "                   H      \n",
    "           &       H      \n",
    "##########################\n",
);

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or("solve".to_string());
    let level_text = match args.next() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("while reading level file {path}"))?,
        None => DEMO_LEVEL.to_string(),
    };
    let config = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("while reading config file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("while parsing config {path}"))?
        }
        None => SolverConfig::default(),
    };
    info!("mode {mode}, config {config:?}");

    match mode.as_str() {
        "solve" => run_solve(&level_text, config),
        "graph" => run_graph(&level_text),
        "replay" => run_replay(&level_text, config),
        _ => {
            println!("Unknown mode: {}. Use 'solve', 'graph' or 'replay'. defaulting to solve", mode);
            run_solve(&level_text, config)
        }
    }
}

fn run_solve(level_text: &str, config: SolverConfig) -> Result<()> {
    let mut session = Session::new(config);
    let plan = session.on_level_start(level_text)?.clone();
    let level = session
        .level()
        .ok_or_else(|| anyhow!("session lost its level"))?;

    println!("{}", render_board_with_ruler(&level.board));
    println!("{}", render_plan_overlay(&level.board, plan.path()));
    println!(
        "{} moves, gold bags collected in order {:?}",
        plan.len(),
        plan.visit_order()
    );

    let commands: Vec<Command> = plan.directions().map(Command::move_in).collect();
    println!("{}", serde_json::to_string(&commands)?);
    Ok(())
}

fn run_graph(level_text: &str) -> Result<()> {
    let level = parse_level(level_text)?;
    let graph = ReachGraph::build(&level.board);
    println!("{}", get_json_data(&graph, &level.board)?);
    eprintln!("{}", get_graph_info(&graph));
    Ok(())
}

fn run_replay(level_text: &str, config: SolverConfig) -> Result<()> {
    let mut session = Session::new(config);
    let plan_len = session.on_level_start(level_text)?.len();
    let level = session
        .level()
        .ok_or_else(|| anyhow!("session lost its level"))?
        .clone();

    let mut terminal = setup_terminal().map_err(|e| anyhow!("{e}"))?;
    restore_after(
        || replay_loop(&mut terminal, &mut session, &level.board, level.start, plan_len),
        cleanup_terminal,
    )
    .map_err(|e| anyhow!("{e}"))
}

fn replay_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
    board: &Board,
    start: Position,
    plan_len: usize,
) -> Result<(), Box<dyn Error>> {
    let mut runner = start;
    let mut last_command = None;

    loop {
        let state = ReplayRenderState {
            board,
            runner,
            turn: session.turns(),
            plan_len,
            last_command,
            finished: session.is_exhausted(),
        };
        render_replay(terminal, &state)?;

        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Step if !session.is_exhausted() => {
                let command = session.on_turn(runner.into());
                runner = runner.step(command.direction);
                last_command = Some(command);
            }
            ConsoleInput::Step | ConsoleInput::Unknown if session.is_exhausted() => break,
            _ => {}
        }
    }
    Ok(())
}
