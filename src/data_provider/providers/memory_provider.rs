use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::{Board, Connect4, DataProvider, GameSnapshot, InvalidMove, MoveOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryProviderArgs {
    pub rows: usize,
    pub cols: usize,
}

impl Default for MemoryProviderArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProviderArgs {
    const DEFAULT_ROWS: usize = Board::DEFAULT_SIZE.0;
    const DEFAULT_COLS: usize = Board::DEFAULT_SIZE.1;

    pub fn new() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        Self {
            rows: Self::read_dimension("BOARD_ROWS", Self::DEFAULT_ROWS),
            cols: Self::read_dimension("BOARD_COLS", Self::DEFAULT_COLS),
        }
    }

    fn read_dimension(key: &str, default: usize) -> usize {
        match std::env::var(key) {
            Err(_) => default,
            Ok(value) => value.parse::<usize>().unwrap_or_else(|_| {
                warn!("could not parse {}={:?}, using {}", key, value, default);
                default
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryProviderErrorKind {
    #[error("could not acquire lock on the game")]
    LockError,
    #[error("a board needs at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Keeps a single game in memory. Clones share the same game.
///
/// Moves and resets hold the write lock, so only one of them is applied at a
/// time. Snapshots hold the read lock and can run side by side.
#[derive(Clone, Debug)]
pub struct MemoryProvider {
    pub game: Arc<RwLock<Connect4>>,
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self {
            game: Arc::new(RwLock::new(Connect4::default())),
        }
    }
}

impl MemoryProvider {
    fn read(&self) -> Result<RwLockReadGuard<'_, Connect4>, MemoryProviderErrorKind> {
        self.game
            .read()
            .map_err(|_| MemoryProviderErrorKind::LockError)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Connect4>, MemoryProviderErrorKind> {
        self.game
            .write()
            .map_err(|_| MemoryProviderErrorKind::LockError)
    }
}

impl DataProvider for MemoryProvider {
    type Args = MemoryProviderArgs;
    type ErrorKind = MemoryProviderErrorKind;

    fn new(args: Self::Args) -> Result<Self, Self::ErrorKind>
    where
        Self: Sized,
    {
        if args.rows == 0 || args.cols == 0 {
            return Err(MemoryProviderErrorKind::InvalidDimensions {
                rows: args.rows,
                cols: args.cols,
            });
        }
        debug!("creating a {}x{} game", args.rows, args.cols);
        Ok(Self {
            game: Arc::new(RwLock::new(Connect4::new(args.rows, args.cols))),
        })
    }

    fn get_game_state(&self) -> Result<GameSnapshot, Self::ErrorKind> {
        Ok(self.read()?.get_game_state())
    }

    fn get_valid_moves(&self) -> Result<Vec<usize>, Self::ErrorKind> {
        Ok(self.read()?.get_valid_moves())
    }

    fn drop_piece(
        &self,
        column: i64,
    ) -> Result<Result<MoveOutcome, InvalidMove>, Self::ErrorKind> {
        Ok(self.write()?.drop_piece(column))
    }

    fn reset(&self) -> Result<(), Self::ErrorKind> {
        self.write()?.reset();
        Ok(())
    }
}
