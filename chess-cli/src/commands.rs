// Parsing of the line commands read from stdin

use chess_client::MoveRequest;
use chess_common::{from_notation, GridCoord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Board,
    Move(MoveRequest),
    ValidMoves(GridCoord),
    History,
    Reset,
    Info,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  board                 show the current board
  move <from> <to>      e.g. `move e2 e4`, or `move 6 4 4 4` (row col row col)
  moves <square>        squares the piece on <square> can move to
  history               moves played so far
  reset                 start a new game
  info                  server status
  help                  this text
  quit                  exit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Err("empty command".to_string());
    };
    let args: Vec<&str> = words.collect();

    match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("board" | "b", []) => Ok(Command::Board),
        ("move" | "m", [from, to]) => Ok(Command::Move(MoveRequest::new(
            parse_square(from)?,
            parse_square(to)?,
        ))),
        ("move" | "m", [from_row, from_col, to_row, to_col]) => Ok(Command::Move(MoveRequest {
            from_row: parse_index(from_row)?,
            from_col: parse_index(from_col)?,
            to_row: parse_index(to_row)?,
            to_col: parse_index(to_col)?,
        })),
        ("moves", [square]) => Ok(Command::ValidMoves(parse_square(square)?)),
        ("history" | "h", []) => Ok(Command::History),
        ("reset", []) => Ok(Command::Reset),
        ("info", []) => Ok(Command::Info),
        ("help" | "?", []) => Ok(Command::Help),
        ("quit" | "exit" | "q", []) => Ok(Command::Quit),
        _ => Err(format!("unrecognised command: {}", line.trim())),
    }
}

fn parse_square(s: &str) -> Result<GridCoord, String> {
    from_notation(s).ok_or_else(|| format!("not a square: {}", s))
}

fn parse_index(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(i) if i < 8 => Ok(i),
        _ => Err(format!("not a board index (0-7): {}", s)),
    }
}
