use crate::core::board::Board;
use crate::core::direction_set::DirectionSet;
use crate::core::models::{Direction, Position, Tile};

// Boundary checks always run before a neighbour is indexed.

pub fn can_move_up(board: &Board, pos: Position) -> bool {
    pos.row > 0
        && board[&pos].is_ladder()
        && !board[&pos.step(Direction::Up)].is_brick()
}

pub fn can_move_down(board: &Board, pos: Position) -> bool {
    pos.row < board.height() - 1 && !board[&pos.step(Direction::Down)].is_brick()
}

pub fn can_move_left(board: &Board, pos: Position) -> bool {
    pos.col > 0 && can_move_sideways(board, pos, Direction::Left)
}

pub fn can_move_right(board: &Board, pos: Position) -> bool {
    pos.col < board.width() - 1 && can_move_sideways(board, pos, Direction::Right)
}

fn can_move_sideways(board: &Board, pos: Position, direction: Direction) -> bool {
    if board[&pos.step(direction)].is_brick() {
        return false;
    }
    let here = board[&pos];
    if here.is_ladder() || here.is_rope() {
        return true;
    }
    // otherwise the runner needs something solid underneath
    pos.row < board.height() - 1 && is_support(board[&pos.step(Direction::Down)])
}

fn is_support(tile: Tile) -> bool {
    tile.is_brick() || tile.is_ladder()
}

pub fn can_move(board: &Board, pos: Position, direction: Direction) -> bool {
    if !board.contains(&pos) {
        return false;
    }
    match direction {
        Direction::Up => can_move_up(board, pos),
        Direction::Left => can_move_left(board, pos),
        Direction::Down => can_move_down(board, pos),
        Direction::Right => can_move_right(board, pos),
    }
}

pub fn legal_directions(board: &Board, pos: Position) -> DirectionSet {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(board, pos, d))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved(Position),
    Blocked,
}

pub fn step(board: &Board, pos: Position, direction: Direction) -> StepResult {
    if can_move(board, pos, direction) {
        StepResult::Moved(pos.step(direction))
    } else {
        StepResult::Blocked
    }
}
