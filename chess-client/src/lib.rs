//! Chess game session client library
//!
//! Keeps a local view of a chess game in sync with a remote REST game
//! service, translating between UI grid coordinates and algebraic notation.
//!
//! # Example
//!
//! ```no_run
//! use chess_client::{GameSessionClient, MoveRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = GameSessionClient::connect("http://localhost:8080/api/chess")?;
//!     let board = client.fetch_board().await?;
//!     println!("{} to move", board.current_player);
//!
//!     let result = client
//!         .submit_move(MoveRequest { from_row: 6, from_col: 4, to_row: 4, to_col: 4 })
//!         .await?;
//!     println!("{}: {}", result.notation, result.message);
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
mod error;
mod http;
mod mapper;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod remote;
mod session;
mod traits;
mod types;

pub use client::GameSessionClient;
pub use error::{ClientError, ClientResult};
pub use http::HttpChessApi;
pub use mapper::board_from_remote;
#[cfg(any(test, feature = "mock"))]
pub use mock::{standard_game, MockCall, MockChessApi};
pub use session::SessionManager;
pub use traits::ChessApi;
pub use types::{BoardState, MoveRequest, MoveResult, Piece, Square};

// Re-export shared types for convenience
pub use chess_common::{GridCoord, PieceColor, PieceKind};
