mod factory;
mod providers;

pub use factory::DataProviderFactory;
pub use providers::*;

use crate::{GameSnapshot, InvalidMove, MoveOutcome};
use core::fmt::{Debug, Display};

/// DataProvider is the interface the transport layer talks to. It owns a game
/// and guards it against concurrent access, the operator of this trait doesn't
/// care how that is done.
pub trait DataProvider: Send + Sync + Clone {
    type Args: Clone;
    type ErrorKind: Debug + Clone + PartialEq + Eq + Display;

    fn new(args: Self::Args) -> Result<Self, Self::ErrorKind>
    where
        Self: Sized;

    /// returns a snapshot of the whole game.
    fn get_game_state(&self) -> Result<GameSnapshot, Self::ErrorKind>;

    /// returns the columns that can still take a piece, in ascending order.
    fn get_valid_moves(&self) -> Result<Vec<usize>, Self::ErrorKind>;

    /// drops a piece for the current player.
    ///
    /// The outer result reports failures of the provider itself, the inner one
    /// whether the game accepted the move.
    fn drop_piece(
        &self,
        column: i64,
    ) -> Result<Result<MoveOutcome, InvalidMove>, Self::ErrorKind>;

    /// starts over with an empty board.
    fn reset(&self) -> Result<(), Self::ErrorKind>;
}
