//! ChessApi trait abstraction over the remote game service

use crate::error::ClientResult;
use crate::remote::{MoveBody, RemoteGame, RemoteMove, RemoteSquare};
use async_trait::async_trait;

/// Remote game service interface
/// Implemented by both HttpChessApi and MockChessApi
#[async_trait]
pub trait ChessApi: Send + Sync {
    /// Status text from the API root
    async fn service_info(&self) -> ClientResult<String>;

    /// Create a new game; the returned record carries its id
    async fn create_game(&self) -> ClientResult<RemoteGame>;

    /// Fetch the full game record
    async fn get_game(&self, game_id: &str) -> ClientResult<RemoteGame>;

    /// Destroy a game
    async fn delete_game(&self, game_id: &str) -> ClientResult<()>;

    /// Submit a move in algebraic notation
    async fn make_move(&self, game_id: &str, mv: &MoveBody) -> ClientResult<()>;

    /// Moves played so far, oldest first
    async fn get_moves(&self, game_id: &str) -> ClientResult<Vec<RemoteMove>>;

    /// Destination squares reachable from `square`
    async fn get_valid_moves(&self, game_id: &str, square: &str)
        -> ClientResult<Vec<RemoteSquare>>;
}
