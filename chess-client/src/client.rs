//! Game session client: the operations the presentation layer calls

use crate::error::{ClientError, ClientResult};
use crate::http::HttpChessApi;
use crate::mapper::board_from_remote;
use crate::remote::MoveBody;
use crate::session::SessionManager;
use crate::traits::ChessApi;
use crate::types::{BoardState, MoveRequest, MoveResult};
use chess_common::{format_move, GridCoord};

const MOVE_OK: &str = "Move successful";
const MOVE_REJECTED: &str = "Invalid move";

/// Keeps a local view of one remote game in sync with the server.
///
/// Every board returned is built from a fresh server read; nothing is cached
/// between calls apart from the session id.
pub struct GameSessionClient<A: ChessApi> {
    api: A,
    session: SessionManager,
}

impl GameSessionClient<HttpChessApi> {
    /// Client for the REST service at `base_url` (including the API prefix).
    ///
    /// Only plain `http://` URLs are accepted; there is no TLS connector, so
    /// an `https://` URL fails with [`ClientError::InvalidAddress`].
    pub fn connect(base_url: &str) -> ClientResult<Self> {
        Ok(Self::new(HttpChessApi::new(base_url)?))
    }
}

impl<A: ChessApi> GameSessionClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: SessionManager::new(),
        }
    }

    /// Id of the active game, if one has been created
    pub fn session_id(&self) -> Option<&str> {
        self.session.current()
    }

    /// Fetch the current board, creating a game first if none exists.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_board(&mut self) -> ClientResult<BoardState> {
        let session_id = self.session.ensure(&self.api).await?;
        self.read_board(&session_id).await
    }

    /// Submit a move.
    ///
    /// Fails with [`ClientError::NoActiveSession`] before any request when no
    /// game exists. Rejections by the server come back as a [`MoveResult`]
    /// with `valid: false`, not as an error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn submit_move(&mut self, request: MoveRequest) -> ClientResult<MoveResult> {
        let session_id = self
            .session
            .current()
            .ok_or(ClientError::NoActiveSession)?
            .to_string();

        let from = notation(request.from_square())?;
        let to = notation(request.to_square())?;
        let label = format_move(&from, &to);

        let body = MoveBody { from, to };
        let outcome = match self.api.make_move(&session_id, &body).await {
            Ok(()) => self.read_board(&session_id).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(board) => {
                tracing::info!(%session_id, mv = %label, "Move accepted");
                Ok(MoveResult {
                    valid: true,
                    message: MOVE_OK.to_string(),
                    board: Some(board),
                    notation: label,
                })
            }
            Err(e) => {
                tracing::warn!(%session_id, mv = %label, "Move rejected: {}", e);
                Ok(MoveResult {
                    valid: false,
                    message: e.server_message().unwrap_or(MOVE_REJECTED).to_string(),
                    board: None,
                    notation: label,
                })
            }
        }
    }

    /// Discard the current game (if any) and start a new one.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn reset_game(&mut self) -> ClientResult<BoardState> {
        let session_id = self.session.reset(&self.api).await?;
        self.read_board(&session_id).await
    }

    /// Moves played in the current game as "<from>-<to>", oldest first.
    /// Empty when no game exists.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_move_history(&self) -> ClientResult<Vec<String>> {
        let Some(session_id) = self.session.current() else {
            return Ok(Vec::new());
        };

        self.api
            .get_moves(session_id)
            .await?
            .iter()
            .map(|mv| mv.label())
            .collect()
    }

    /// Squares the piece at (`row`, `col`) may move to. Empty when no game
    /// exists.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_valid_moves(&self, row: usize, col: usize) -> ClientResult<Vec<GridCoord>> {
        let Some(session_id) = self.session.current() else {
            return Ok(Vec::new());
        };
        let square = notation(GridCoord::new(row, col))?;

        self.api
            .get_valid_moves(session_id, &square)
            .await?
            .iter()
            .map(|sq| sq.coord())
            .collect()
    }

    /// Status text reported by the service. Does not need a game.
    pub async fn service_info(&self) -> ClientResult<String> {
        self.api.service_info().await
    }

    /// Destroy the current game, if any.
    pub async fn end_session(&mut self) -> ClientResult<()> {
        self.session.destroy(&self.api).await
    }

    async fn read_board(&self, session_id: &str) -> ClientResult<BoardState> {
        let game = self.api.get_game(session_id).await?;
        board_from_remote(&game)
    }
}

fn notation(coord: GridCoord) -> ClientResult<String> {
    coord.notation().ok_or(ClientError::InvalidCoordinate {
        row: coord.row,
        col: coord.col,
    })
}
