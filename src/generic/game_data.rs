use crate::{Cell, Coordinates, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// A read-only copy of everything a client needs to render a game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub status: GameStatus,
    pub valid_moves: Vec<usize>,
    pub move_count: usize,
    pub winning_positions: Vec<Coordinates>,
}
