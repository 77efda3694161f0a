//! Wire types for the remote chess REST service.
//!
//! Every payload is decoded into these structs at the boundary. Fields the
//! service may omit are `Option`s; unknown fields are ignored so the service
//! can grow its records without breaking the client.

use crate::error::{ClientError, ClientResult};
use chess_common::{from_notation, to_notation, GridCoord};
use serde::{Deserialize, Serialize};

/// A game record as returned by `POST /games` and `GET /games/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGame {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub board: Option<RemoteBoard>,
    #[serde(default)]
    pub current_turn: Option<String>,
    #[serde(default)]
    pub in_check: Option<bool>,
    #[serde(default)]
    pub checkmate: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteBoard {
    #[serde(default)]
    pub squares: Option<Vec<Vec<Option<RemotePiece>>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePiece {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

/// Body of `POST /games/{id}/moves`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBody {
    pub from: String,
    pub to: String,
}

/// One entry of `GET /games/{id}/moves`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteMove {
    pub from: RemoteSquare,
    pub to: RemoteSquare,
}

/// A square reference. The service emits either an algebraic name or a
/// `{row, col}` position object depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteSquare {
    Notation(String),
    Grid { row: usize, col: usize },
}

impl RemoteGame {
    /// Session identifier of a freshly created game.
    pub fn session_id(&self) -> ClientResult<String> {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id.to_string()),
            _ => Err(ClientError::InvalidData(
                "game record is missing an id".to_string(),
            )),
        }
    }
}

impl RemoteMove {
    /// "<from>-<to>" label for the move history.
    pub fn label(&self) -> ClientResult<String> {
        Ok(chess_common::format_move(
            &self.from.notation()?,
            &self.to.notation()?,
        ))
    }
}

impl RemoteSquare {
    pub fn notation(&self) -> ClientResult<String> {
        let coord = self.coord()?;
        Ok(to_notation(coord.row, coord.col))
    }

    pub fn coord(&self) -> ClientResult<GridCoord> {
        match self {
            Self::Notation(name) => from_notation(name)
                .ok_or_else(|| ClientError::InvalidData(format!("invalid square: {}", name))),
            Self::Grid { row, col } => {
                let coord = GridCoord::new(*row, *col);
                if coord.is_on_board() {
                    Ok(coord)
                } else {
                    Err(ClientError::InvalidData(format!(
                        "square off board: row {}, col {}",
                        row, col
                    )))
                }
            }
        }
    }
}
