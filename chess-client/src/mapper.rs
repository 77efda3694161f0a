//! Conversion from remote game records to the local board model

use crate::error::{ClientError, ClientResult};
use crate::remote::{RemoteGame, RemotePiece};
use crate::types::{BoardState, Piece};
use chess_common::{PieceColor, PieceKind, BOARD_SIZE};

const STATUS_CHECK: &str = "CHECK";
const STATUS_CHECKMATE: &str = "CHECKMATE";

/// Build a fresh [`BoardState`] from a remote game record.
///
/// A record without board data (or without its `squares`) maps to an empty
/// grid. A grid of the wrong shape, or an unrecognised piece, turn or color,
/// is reported as [`ClientError::InvalidData`].
pub fn board_from_remote(game: &RemoteGame) -> ClientResult<BoardState> {
    let mut board = BoardState::empty();

    if let Some(rows) = game.board.as_ref().and_then(|b| b.squares.as_ref()) {
        if rows.len() != BOARD_SIZE {
            return Err(ClientError::InvalidData(format!(
                "board has {} rows, expected {}",
                rows.len(),
                BOARD_SIZE
            )));
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(ClientError::InvalidData(format!(
                    "board row {} has {} squares, expected {}",
                    row,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            for (col, cell) in cells.iter().enumerate() {
                board.squares[row][col].piece = cell.as_ref().map(piece_from_remote).transpose()?;
            }
        }
    }

    let turn = game.current_turn.as_deref().map(str::trim);
    if let Some(turn) = turn.filter(|t| !t.is_empty()) {
        board.current_player = turn
            .parse()
            .map_err(|_| ClientError::InvalidData(format!("unknown turn color: {}", turn)))?;
    }

    let status = game.status.as_deref().map(str::to_ascii_uppercase);
    let status_checkmate = status.as_deref() == Some(STATUS_CHECKMATE);
    let status_check = status_checkmate || status.as_deref() == Some(STATUS_CHECK);

    board.is_check = game.in_check.unwrap_or(status_check);
    board.is_checkmate = game.checkmate.unwrap_or(status_checkmate);

    Ok(board)
}

fn piece_from_remote(piece: &RemotePiece) -> ClientResult<Piece> {
    let kind: PieceKind = piece
        .kind
        .parse()
        .map_err(|_| ClientError::InvalidData(format!("unknown piece type: {}", piece.kind)))?;
    let color: PieceColor = piece
        .color
        .parse()
        .map_err(|_| ClientError::InvalidData(format!("unknown piece color: {}", piece.color)))?;
    Ok(Piece { kind, color })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteBoard;
    use chess_common::GridCoord;

    fn grid_with(row: usize, col: usize, piece: RemotePiece) -> Vec<Vec<Option<RemotePiece>>> {
        let mut squares = vec![vec![None; BOARD_SIZE]; BOARD_SIZE];
        squares[row][col] = Some(piece);
        squares
    }

    fn remote_piece(kind: &str, color: &str) -> RemotePiece {
        RemotePiece {
            kind: kind.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_missing_board_is_empty() {
        let game = RemoteGame {
            id: Some("g1".to_string()),
            ..Default::default()
        };
        let board = board_from_remote(&game).unwrap();
        assert_eq!(board, BoardState::empty());
        assert_eq!(board.current_player, PieceColor::White);
        assert!(!board.is_check);
        assert!(!board.is_checkmate);
    }

    #[test]
    fn test_board_without_squares_is_empty() {
        let game = RemoteGame {
            board: Some(RemoteBoard { squares: None }),
            ..Default::default()
        };
        assert_eq!(board_from_remote(&game).unwrap().piece_count(), 0);
    }

    #[test]
    fn test_piece_names_are_normalized() {
        let game = RemoteGame {
            board: Some(RemoteBoard {
                squares: Some(grid_with(6, 4, remote_piece("PAWN", "WHITE"))),
            }),
            ..Default::default()
        };
        let board = board_from_remote(&game).unwrap();
        assert_eq!(
            board.piece_at(GridCoord::new(6, 4)),
            Some(Piece {
                kind: PieceKind::Pawn,
                color: PieceColor::White,
            })
        );
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_turn_and_flags() {
        let game = RemoteGame {
            current_turn: Some("BLACK".to_string()),
            in_check: Some(true),
            checkmate: Some(false),
            ..Default::default()
        };
        let board = board_from_remote(&game).unwrap();
        assert_eq!(board.current_player, PieceColor::Black);
        assert!(board.is_check);
        assert!(!board.is_checkmate);
    }

    #[test]
    fn test_flags_from_status() {
        let check = RemoteGame {
            status: Some("CHECK".to_string()),
            ..Default::default()
        };
        let board = board_from_remote(&check).unwrap();
        assert!(board.is_check);
        assert!(!board.is_checkmate);

        let mate = RemoteGame {
            status: Some("checkmate".to_string()),
            ..Default::default()
        };
        let board = board_from_remote(&mate).unwrap();
        assert!(board.is_check);
        assert!(board.is_checkmate);

        let stalemate = RemoteGame {
            status: Some("STALEMATE".to_string()),
            ..Default::default()
        };
        let board = board_from_remote(&stalemate).unwrap();
        assert!(!board.is_check);
        assert!(!board.is_checkmate);
    }

    #[test]
    fn test_explicit_flags_win_over_status() {
        let game = RemoteGame {
            status: Some("CHECK".to_string()),
            in_check: Some(false),
            ..Default::default()
        };
        assert!(!board_from_remote(&game).unwrap().is_check);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let game = RemoteGame {
            board: Some(RemoteBoard {
                squares: Some(vec![vec![None; BOARD_SIZE]; 7]),
            }),
            ..Default::default()
        };
        assert!(matches!(
            board_from_remote(&game),
            Err(ClientError::InvalidData(_))
        ));

        let mut squares = vec![vec![None; BOARD_SIZE]; BOARD_SIZE];
        squares[3].pop();
        let game = RemoteGame {
            board: Some(RemoteBoard {
                squares: Some(squares),
            }),
            ..Default::default()
        };
        assert!(board_from_remote(&game).is_err());
    }

    #[test]
    fn test_unknown_piece_is_rejected() {
        let game = RemoteGame {
            board: Some(RemoteBoard {
                squares: Some(grid_with(0, 0, remote_piece("DRAGON", "WHITE"))),
            }),
            ..Default::default()
        };
        assert!(matches!(
            board_from_remote(&game),
            Err(ClientError::InvalidData(_))
        ));
    }

    #[test]
    fn test_unknown_turn_is_rejected() {
        let game = RemoteGame {
            current_turn: Some("GREEN".to_string()),
            ..Default::default()
        };
        assert!(board_from_remote(&game).is_err());
    }

    #[test]
    fn test_blank_turn_defaults_to_white() {
        for turn in ["", "   "] {
            let game = RemoteGame {
                current_turn: Some(turn.to_string()),
                ..Default::default()
            };
            let board = board_from_remote(&game).unwrap();
            assert_eq!(board.current_player, PieceColor::White);
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let game = RemoteGame {
            board: Some(RemoteBoard {
                squares: Some(grid_with(0, 4, remote_piece("King", "Black"))),
            }),
            current_turn: Some("white".to_string()),
            ..Default::default()
        };
        assert_eq!(
            board_from_remote(&game).unwrap(),
            board_from_remote(&game).unwrap()
        );
    }
}
