use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    RedWins,
    YellowWins,
    Draw,
}

impl GameStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Red => GameStatus::RedWins,
            Player::Yellow => GameStatus::YellowWins,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::RedWins => Some(Player::Red),
            GameStatus::YellowWins => Some(Player::Yellow),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::RedWins => write!(f, "red_wins"),
            GameStatus::YellowWins => write!(f, "yellow_wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
