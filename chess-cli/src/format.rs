use chess_client::{BoardState, Piece};
use chess_common::{to_notation, GridCoord, PieceColor};

/// White pieces upper-case, black lower-case, empty squares '.'
pub fn piece_char(piece: Option<Piece>) -> char {
    match piece {
        Some(p) if p.color == PieceColor::White => p.kind.to_char_upper(),
        Some(p) => p.kind.to_char_lower(),
        None => '.',
    }
}

/// Board as text, rank 8 at the top, with file and rank labels.
pub fn format_board(board: &BoardState) -> String {
    let mut out = String::new();

    for (row, squares) in board.squares.iter().enumerate() {
        out.push_str(&format!("{} ", 8 - row));
        for sq in squares {
            out.push(' ');
            out.push(piece_char(sq.piece));
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");

    let mut status = format!("{} to move", board.current_player);
    if board.is_checkmate {
        status.push_str(" - checkmate");
    } else if board.is_check {
        status.push_str(" - check");
    }
    out.push_str(&status);
    out
}

pub fn format_squares(coords: &[GridCoord]) -> String {
    coords
        .iter()
        .map(|c| to_notation(c.row, c.col))
        .collect::<Vec<_>>()
        .join(" ")
}
