use log::{debug, info};

use crate::{Board, Coordinates, GameSnapshot, GameStatus, InvalidMove, MoveOutcome, Player};

/// A single game of connect four.
///
/// Red always starts. Once the game reached a terminal status every further
/// move is rejected until [`Connect4::reset`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect4 {
    board: Board,
    current_player: Player,
    move_count: usize,
    status: GameStatus,
    winning_positions: Vec<Coordinates>,
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new(Board::DEFAULT_SIZE.0, Board::DEFAULT_SIZE.1)
    }
}

impl Connect4 {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            board: Board::new(rows, cols),
            current_player: Player::Red,
            move_count: 0,
            status: GameStatus::InProgress,
            winning_positions: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Once the game is over this is the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_positions(&self) -> &[Coordinates] {
        &self.winning_positions
    }

    /// Drops a piece of the current player into `column`.
    ///
    /// Rejected moves leave the game untouched.
    pub fn drop_piece(&mut self, column: i64) -> Result<MoveOutcome, InvalidMove> {
        let col = match self.validate_move(column) {
            Ok(col) => col,
            Err(err) => {
                debug!("rejected move in column {}: {}", column, err);
                return Err(err);
            }
        };

        let player = self.current_player;
        let row = self
            .board
            .place(col, player)
            .ok_or(InvalidMove::ColumnFull)?;
        self.move_count += 1;
        debug!(
            "{} dropped a piece at ({}, {}), move {}:\n{}",
            player, row, col, self.move_count, self.board
        );

        if let Some(line) = self.board.winning_line(row, col) {
            self.status = GameStatus::won_by(player);
            self.winning_positions = line;
            info!("{} wins after {} moves", player, self.move_count);
        } else if self.move_count == self.board.rows() * self.board.cols() {
            self.status = GameStatus::Draw;
            info!("the board is full, the game is a draw");
        } else {
            self.current_player = player.other();
        }

        Ok(MoveOutcome {
            row,
            col,
            player,
            status: self.status,
            next_player: self.status.is_in_progress().then_some(self.current_player),
            winning_positions: self.winning_positions.clone(),
        })
    }

    /// Checks are made in a fixed order, the first failing one is reported.
    fn validate_move(&self, column: i64) -> Result<usize, InvalidMove> {
        // GameOver
        if !self.status.is_in_progress() {
            return Err(InvalidMove::GameOver);
        }
        // InvalidColumn
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < self.board.cols())
            .ok_or(InvalidMove::InvalidColumn)?;
        // ColumnFull
        if self.board.is_column_full(col) {
            return Err(InvalidMove::ColumnFull);
        }
        Ok(col)
    }

    pub fn get_valid_moves(&self) -> Vec<usize> {
        self.board.valid_columns()
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.board.rows(), self.board.cols());
        debug!("game reset");
    }

    pub fn get_game_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_rows(),
            current_player: self.current_player,
            status: self.status,
            valid_moves: self.get_valid_moves(),
            move_count: self.move_count,
            winning_positions: self.winning_positions.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Cell;

    fn play(game: &mut Connect4, columns: &[i64]) -> Vec<MoveOutcome> {
        columns
            .iter()
            .enumerate()
            .map(|(move_index, column)| {
                game.drop_piece(*column).unwrap_or_else(|err| {
                    panic!(
                        "expected move {} (column {}) to be valid, got {:?}",
                        move_index, column, err
                    )
                })
            })
            .collect()
    }

    /// Fills a 6x7 board without anyone connecting four.
    fn drawn_game() -> Vec<i64> {
        let mut columns = Vec::new();
        for (left, right) in [(0, 1), (2, 3), (4, 5)] {
            for _ in 0..3 {
                columns.extend([left, right]);
            }
            for _ in 0..3 {
                columns.extend([right, left]);
            }
        }
        columns.extend([6; 6]);
        columns
    }

    #[test]
    fn initial_state() {
        let game = Connect4::default();
        let state = game.get_game_state();
        assert_eq!(state.board, vec![vec![Cell::Empty; 7]; 6]);
        assert_eq!(state.current_player, Player::Red);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.valid_moves, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(state.move_count, 0);
        assert!(state.winning_positions.is_empty());
    }

    #[test]
    fn first_piece_lands_on_the_bottom() {
        let mut game = Connect4::default();
        let outcome = game.drop_piece(0).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome {
                row: 5,
                col: 0,
                player: Player::Red,
                status: GameStatus::InProgress,
                next_player: Some(Player::Yellow),
                winning_positions: vec![],
            }
        );
        assert_eq!(game.board().get(5, 0), Some(Cell::Red));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn players_alternate() {
        let mut game = Connect4::default();
        let outcomes = play(&mut game, &[0, 1, 2, 3, 4, 5, 6, 0]);
        let expected = [Player::Red, Player::Yellow].repeat(4);
        for (outcome, player) in outcomes.iter().zip(expected) {
            assert_eq!(outcome.player, player);
            assert_eq!(outcome.next_player, Some(player.other()));
        }
        assert_eq!(game.current_player(), Player::Red);
    }

    #[test]
    fn invalid_columns_change_nothing() {
        let mut game = Connect4::default();
        play(&mut game, &[3]);
        let before = game.clone();
        for column in [-1, -100, 7, 8, i64::MAX, i64::MIN] {
            assert_eq!(game.drop_piece(column), Err(InvalidMove::InvalidColumn));
            assert_eq!(game, before);
        }
    }

    #[test]
    fn full_column_is_rejected() {
        let mut game = Connect4::default();
        play(&mut game, &[0; 6]);
        let before = game.clone();
        assert_eq!(game.drop_piece(0), Err(InvalidMove::ColumnFull));
        assert_eq!(game, before);
        assert_eq!(game.get_valid_moves(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn horizontal_win_on_the_bottom_row() {
        let mut game = Connect4::default();
        let outcomes = play(&mut game, &[3, 3, 4, 4, 5, 5, 6]);
        let last = outcomes.last().unwrap();

        assert_eq!((last.row, last.col), (5, 6));
        assert_eq!(last.player, Player::Red);
        assert_eq!(last.status, GameStatus::RedWins);
        assert_eq!(last.next_player, None);
        let mut line = last.winning_positions.clone();
        line.sort();
        assert_eq!(line, vec![(5, 3), (5, 4), (5, 5), (5, 6)]);

        assert_eq!(game.status(), GameStatus::RedWins);
        assert_eq!(game.current_player(), Player::Red);
        assert_eq!(game.winning_positions(), last.winning_positions.as_slice());
    }

    #[test]
    fn vertical_win_for_yellow() {
        let mut game = Connect4::default();
        let outcomes = play(&mut game, &[3, 4, 3, 4, 3, 4, 6, 4]);
        let last = outcomes.last().unwrap();
        assert_eq!(last.status, GameStatus::YellowWins);
        assert_eq!(last.player, Player::Yellow);
        assert_eq!(
            last.winning_positions,
            vec![(2, 4), (3, 4), (4, 4), (5, 4)]
        );
        assert_eq!(game.current_player(), Player::Yellow);
    }

    #[test]
    fn diagonal_wins() {
        let mut game = Connect4::default();
        let outcomes = play(&mut game, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        let last = outcomes.last().unwrap();
        assert_eq!(last.status, GameStatus::RedWins);
        assert_eq!(
            last.winning_positions,
            vec![(2, 3), (3, 2), (4, 1), (5, 0)]
        );

        let mut game = Connect4::default();
        let outcomes = play(&mut game, &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3]);
        let last = outcomes.last().unwrap();
        assert_eq!(last.status, GameStatus::RedWins);
        assert_eq!(
            last.winning_positions,
            vec![(2, 3), (3, 4), (4, 5), (5, 6)]
        );
    }

    #[test]
    fn draw() {
        let mut game = Connect4::default();
        let columns = drawn_game();
        let outcomes = play(&mut game, &columns);

        let (last, rest) = outcomes.split_last().unwrap();
        assert!(rest
            .iter()
            .all(|outcome| outcome.status == GameStatus::InProgress));
        assert_eq!(last.status, GameStatus::Draw);
        assert_eq!((last.row, last.col), (0, 6));
        assert_eq!(last.player, Player::Yellow);
        assert_eq!(last.next_player, None);
        assert!(last.winning_positions.is_empty());

        assert_eq!(game.move_count(), 42);
        assert_eq!(game.current_player(), Player::Yellow);
        assert!(game.get_valid_moves().is_empty());
    }

    #[test]
    fn draw_on_a_small_board() {
        let mut game = Connect4::new(2, 3);
        let outcomes = play(&mut game, &[0, 0, 1, 1, 2, 2]);
        assert_eq!(outcomes.last().unwrap().status, GameStatus::Draw);
    }

    #[test]
    fn finished_games_reject_moves() {
        let mut game = Connect4::default();
        play(&mut game, &[3, 3, 4, 4, 5, 5, 6]);
        let before = game.clone();
        // game over is checked before the column
        for column in [0, 6, -1, 7] {
            assert_eq!(game.drop_piece(column), Err(InvalidMove::GameOver));
        }
        assert_eq!(game, before);

        let mut game = Connect4::default();
        play(&mut game, &drawn_game());
        assert_eq!(game.drop_piece(0), Err(InvalidMove::GameOver));
    }

    #[test]
    fn reset() {
        let mut game = Connect4::default();
        play(&mut game, &[3, 3, 4, 4, 5, 5, 6]);
        game.reset();
        assert_eq!(game, Connect4::default());

        game.reset();
        assert_eq!(game, Connect4::default());
        assert_eq!(game.get_game_state(), Connect4::default().get_game_state());

        let mut small = Connect4::new(4, 4);
        play(&mut small, &[0, 1]);
        small.reset();
        assert_eq!(small, Connect4::new(4, 4));
    }

    #[test]
    fn state_serialization() {
        let mut game = Connect4::default();
        play(&mut game, &[3, 3, 4, 4, 5, 5, 6]);
        let json = serde_json::to_value(game.get_game_state()).unwrap();

        assert_eq!(json["board"][5][3], "RED");
        assert_eq!(json["board"][4][3], "YELLOW");
        assert_eq!(json["board"][0][0], "EMPTY");
        assert_eq!(json["current_player"], "RED");
        assert_eq!(json["status"], "red_wins");
        assert_eq!(json["valid_moves"], serde_json::json!([0, 1, 2, 3, 4, 5, 6]));
        assert_eq!(json["move_count"], 7);
        assert_eq!(json["winning_positions"].as_array().unwrap().len(), 4);
        assert_eq!(json["winning_positions"][0], serde_json::json!([5, 6]));
    }
}
