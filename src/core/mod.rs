mod board;
mod bounded_grid;
mod bounds;
mod consts;
mod direction_set;
mod legality;
mod level;
mod models;

pub use board::Board;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use direction_set::DirectionSet;
pub use legality::{
    can_move, can_move_down, can_move_left, can_move_right, can_move_up, legal_directions, step,
    StepResult,
};
pub use level::{parse_level, Level};
pub use models::{Direction, Move, Offset, Position, Tile};
