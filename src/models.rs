use crate::core::{Board, Position};
use crate::player::Command;

pub struct ReplayRenderState<'a> {
    pub board: &'a Board,
    pub runner: Position,
    pub turn: usize,
    pub plan_len: usize,
    pub last_command: Option<Command>,
    pub finished: bool,
}
