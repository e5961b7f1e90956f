//! Board module - the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or filled with a color.
//! Uses a flat array for cache locality; cloning a board is a single memcpy.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::error::RulesError;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

/// Returns a fresh board with every cell empty
pub fn create_empty_board() -> Board {
    Board::new()
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Build a board from nested rows.
    ///
    /// Fails unless there are exactly `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, RulesError> {
        let bad_dimensions = |width: usize| RulesError::BoardDimensions {
            expected_width: WIDTH,
            expected_height: HEIGHT,
            width,
            height: rows.len(),
        };

        if rows.len() != HEIGHT {
            let width = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(bad_dimensions(width));
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != WIDTH {
                return Err(bad_dimensions(row.len()));
            }
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_filled())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_filled()))
    }

    /// Row `y` as a slice, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < HEIGHT).then(|| &self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Height of the stack in column `x`: rows from the topmost filled cell
    /// to the floor, 0 for an empty column
    pub fn column_height(&self, x: usize) -> usize {
        if x >= WIDTH {
            return 0;
        }
        (0..HEIGHT)
            .find(|&y| self.cells[y * WIDTH + x].is_filled())
            .map_or(0, |top| HEIGHT - top)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Nested copy of the cells, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_filled() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Outcome of [`clear_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearResult {
    pub board: Board,
    pub lines_cleared: u32,
    /// Indices of the removed rows in the input board, top to bottom
    pub cleared_rows: ArrayVec<u8, HEIGHT>,
}

/// Remove every full row and pad with empty rows at the top.
///
/// Surviving rows keep their relative order and the input is left untouched.
/// Uses a two-pointer compaction on a copy of the board.
pub fn clear_lines(board: &Board) -> ClearResult {
    let mut cells = board.cells;
    let mut cleared_rows = ArrayVec::new();
    let mut write_y = HEIGHT;

    // Scan from bottom to top
    for read_y in (0..HEIGHT).rev() {
        if board.is_row_full(read_y) {
            cleared_rows.push(read_y as u8);
        } else {
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * WIDTH;
                cells.copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
            }
        }
    }

    // Everything above the last written row is new empty space
    cells[..write_y * WIDTH].fill(Cell::EMPTY);

    cleared_rows.reverse();
    ClearResult {
        board: Board { cells },
        lines_cleared: cleared_rows.len() as u32,
        cleared_rows,
    }
}
