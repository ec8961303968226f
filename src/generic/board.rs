use itertools::Itertools;
use ndarray::Array2;
use std::{fmt::Display, iter::successors};

use crate::{Cell, Coordinates, Player};

/// A connect four grid. Row 0 is the top, pieces fall towards the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub data: Array2<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE.0, Self::DEFAULT_SIZE.1)
    }
}

impl Board {
    pub const DEFAULT_SIZE: Coordinates = (6, 7);
    pub const WIN_LENGTH: usize = 4;

    /// horizontal, vertical, diagonal, anti-diagonal. The order decides which
    /// line is reported when one move completes several.
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), Cell::Empty),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns `None` outside of the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.data.get((row, col)).copied()
    }

    /// A column outside of the board counts as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col).map_or(true, |cell| !cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        (0..self.cols()).all(|col| self.is_column_full(col))
    }

    /// The lowest empty row of a column
    pub fn available_row(&self, col: usize) -> Option<usize> {
        (0..self.rows())
            .rev()
            .find(|&row| self.get(row, col) == Some(Cell::Empty))
    }

    /// Drops a piece into `col` and returns the row it landed in.
    pub fn place(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.available_row(col)?;
        self.data[(row, col)] = Cell::from(player);
        Some(row)
    }

    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols())
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Checks whether the piece at `(row, col)` is part of a line of at least
    /// [`Board::WIN_LENGTH`] pieces of the same colour.
    ///
    /// Only the lines through this cell are checked, so this is meant to be
    /// called with the cell that was filled last. The whole contiguous run is
    /// returned, starting with the given cell, then walking in the positive
    /// direction and finally in the negative direction.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<Vec<Coordinates>> {
        let cell = self.get(row, col).filter(|cell| !cell.is_empty())?;

        Self::DIRECTIONS.iter().find_map(|&(d_row, d_col)| {
            let mut line = vec![(row, col)];
            line.extend(self.run((row, col), (d_row, d_col), cell));
            line.extend(self.run((row, col), (-d_row, -d_col), cell));
            (line.len() >= Self::WIN_LENGTH).then_some(line)
        })
    }

    /// all cells equal to `cell` following `from` in one direction, stopping at
    /// the first other cell or the edge of the board
    fn run(&self, from: Coordinates, direction: (isize, isize), cell: Cell) -> Vec<Coordinates> {
        successors(Self::step(from, direction), |&current| {
            Self::step(current, direction)
        })
        .take_while(|&(row, col)| self.get(row, col) == Some(cell))
        .collect()
    }

    fn step((row, col): Coordinates, (d_row, d_col): (isize, isize)) -> Option<Coordinates> {
        Some((row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .data
            .rows()
            .into_iter()
            .map(|row| row.iter().join(" "))
            .join("\n");
        write!(f, "{}", rendered)
    }
}
