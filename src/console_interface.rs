use crate::core::{Board, Position, Tile};
use crate::models::ReplayRenderState;
use crate::solver::Path;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::collections::HashMap;
use std::error::Error;
use std::io;

pub fn render_board(board: &Board) -> String {
    render_board_with(board, |_, tile| tile.symbol())
}

/// Board dump with row indices on the left and a column ruler underneath.
pub fn render_board_with_ruler(board: &Board) -> String {
    let label_width = board.height().saturating_sub(1).to_string().len();
    let mut result = String::new();
    for row in 0..board.height() {
        result.push_str(&format!("{:>label_width$}", row));
        result.extend(board.row(row).map(Tile::symbol));
        result.push('\n');
    }
    result.push_str(&" ".repeat(label_width));
    result.extend((0..board.width()).map(|col| {
        char::from_digit((col % 10) as u32, 10).unwrap_or('?')
    }));
    result.push('\n');
    result
}

/// Board with each cell the path leaves marked by the arrow taken.
pub fn render_plan_overlay(board: &Board, path: &Path) -> String {
    let mut arrows = HashMap::new();
    for mv in path.moves() {
        arrows.insert(mv.from, mv.direction.arrow());
    }
    render_board_with(board, |pos, tile| {
        arrows.get(&pos).copied().unwrap_or(tile.symbol())
    })
}

pub fn render_board_with_runner(board: &Board, runner: Position) -> String {
    render_board_with(board, |pos, tile| {
        if pos == runner { Tile::Player.symbol() } else { tile.symbol() }
    })
}

fn render_board_with<F>(board: &Board, get_char: F) -> String
where
    F: Fn(Position, Tile) -> char,
{
    let mut result = String::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            let pos = Position::new(row, col);
            result.push(get_char(pos, board[&pos]));
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `body`, then `restore` whether or not `body` failed. The body's error
/// wins when both fail.
pub fn restore_after<T>(
    body: impl FnOnce() -> Result<T, Box<dyn Error>>,
    restore: impl FnOnce() -> Result<(), Box<dyn Error>>,
) -> Result<T, Box<dyn Error>> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

pub fn render_replay(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &ReplayRenderState,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let level_text = render_board_with_runner(state.board, state.runner);
        let level_paragraph = Paragraph::new(level_text)
            .block(Block::default().borders(Borders::ALL).title("Runner"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(level_paragraph, chunks[0]);

        let status = if state.finished {
            format!("Plan finished in {} moves. Press any key to quit.", state.plan_len)
        } else {
            format!(
                "Move {}/{} | Space or Enter to step, Q to quit",
                state.turn, state.plan_len
            )
        };
        let status = match &state.last_command {
            Some(command) => format!("{} | Last: {:?}", status, command.direction),
            None => status,
        };

        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Plan"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Step,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right => ConsoleInput::Step,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
