use crate::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// `(row, col)`, row 0 is the top of the board.
pub type Coordinates = (usize, usize);

/// The result of a piece that was accepted by the game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub col: usize,
    /// the player who made this move
    pub player: Player,
    pub status: GameStatus,
    /// only set while the game continues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_player: Option<Player>,
    /// only set when this move won the game
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub winning_positions: Vec<Coordinates>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum InvalidMove {
    #[error("Game is over")]
    GameOver,
    #[error("Invalid column")]
    InvalidColumn,
    #[error("Column is full")]
    ColumnFull,
}

impl InvalidMove {
    pub fn category(&self) -> &'static str {
        match self {
            InvalidMove::GameOver => "game_over",
            InvalidMove::InvalidColumn => "invalid_column",
            InvalidMove::ColumnFull => "column_full",
        }
    }
}
