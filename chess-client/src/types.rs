//! Normalized board model handed to the presentation layer

use chess_common::{GridCoord, PieceColor, PieceKind, BOARD_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: PieceColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub piece: Option<Piece>,
}

/// Snapshot of a game as last read from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: PieceColor,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl BoardState {
    /// A board with no pieces, white to move, no check.
    pub fn empty() -> Self {
        Self {
            squares: [[Square::default(); BOARD_SIZE]; BOARD_SIZE],
            current_player: PieceColor::White,
            is_check: false,
            is_checkmate: false,
        }
    }

    pub fn piece_at(&self, coord: GridCoord) -> Option<Piece> {
        self.squares
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .and_then(|sq| sq.piece)
    }

    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| sq.piece.is_some())
            .count()
    }
}

/// A move expressed in UI grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl MoveRequest {
    pub fn new(from: GridCoord, to: GridCoord) -> Self {
        Self {
            from_row: from.row,
            from_col: from.col,
            to_row: to.row,
            to_col: to.col,
        }
    }

    pub fn from_square(&self) -> GridCoord {
        GridCoord::new(self.from_row, self.from_col)
    }

    pub fn to_square(&self) -> GridCoord {
        GridCoord::new(self.to_row, self.to_col)
    }
}

/// Outcome of a submitted move. `board` is only set when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub valid: bool,
    pub message: String,
    pub board: Option<BoardState>,
    #[serde(rename = "move")]
    pub notation: String,
}
