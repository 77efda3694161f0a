// Conversions between UI grid coordinates (row 0 = rank 8, col 0 = file a)
// and algebraic square names

use cozy_chess::{File, Rank, Square};
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Zero-based UI coordinate: row 0 is the top rank (8), col 0 is file 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Algebraic name of this coordinate, or `None` when it is off the board.
    pub fn notation(self) -> Option<String> {
        try_to_notation(self.row, self.col)
    }
}

/// Convert a grid coordinate to a cozy_chess::Square
pub fn square_at(row: usize, col: usize) -> Option<Square> {
    let file = File::try_index(col)?;
    let rank = Rank::try_index((BOARD_SIZE - 1).checked_sub(row)?)?;
    Some(Square::new(file, rank))
}

/// Convert a cozy_chess::Square to its grid coordinate
pub fn coord_of(sq: Square) -> GridCoord {
    GridCoord {
        row: BOARD_SIZE - 1 - sq.rank() as usize,
        col: sq.file() as usize,
    }
}

/// Format a grid coordinate as a square name like "e2".
///
/// # Panics
///
/// Panics if `row` or `col` is outside `0..8`. Use [`try_to_notation`] for
/// input that has not been bounded by the board.
pub fn to_notation(row: usize, col: usize) -> String {
    match try_to_notation(row, col) {
        Some(name) => name,
        None => panic!("grid coordinate out of range: row {row}, col {col}"),
    }
}

/// Checked variant of [`to_notation`]
pub fn try_to_notation(row: usize, col: usize) -> Option<String> {
    square_at(row, col).map(|sq| sq.to_string())
}

/// Parse a square string like "e2" (or "E2") to its grid coordinate
pub fn from_notation(s: &str) -> Option<GridCoord> {
    let s = s.trim();
    if s.len() != 2 {
        return None;
    }

    s.to_ascii_lowercase().parse::<Square>().ok().map(coord_of)
}

/// Join two square names into the "<from>-<to>" move label
pub fn format_move(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}
