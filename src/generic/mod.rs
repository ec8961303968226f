mod board;
mod cell;
mod connect4;
mod game_data;
mod gamestate;
mod r#move;
mod player;

pub use board::Board;
pub use cell::Cell;
pub use connect4::Connect4;
pub use game_data::GameSnapshot;
pub use gamestate::GameStatus;
pub use player::Player;
pub use r#move::{Coordinates, InvalidMove, MoveOutcome};
