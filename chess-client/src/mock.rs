//! Mock ChessApi implementation for testing

use crate::error::{ClientError, ClientResult};
use crate::remote::{MoveBody, RemoteBoard, RemoteGame, RemoteMove, RemotePiece, RemoteSquare};
use crate::traits::ChessApi;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Responder<T> = Box<dyn Fn() -> ClientResult<T> + Send>;
type IdResponder<T> = Box<dyn Fn(&str) -> ClientResult<T> + Send>;

/// Mock service for testing - only compiled in test mode or with mock feature.
/// Clones share responses and the call log.
#[derive(Clone)]
pub struct MockChessApi {
    responses: Arc<Mutex<MockResponses>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Default)]
struct MockResponses {
    service_info: Option<Responder<String>>,
    create_game: Option<Responder<RemoteGame>>,
    get_game: Option<IdResponder<RemoteGame>>,
    delete_game: Option<IdResponder<()>>,
    make_move: Option<Box<dyn Fn(&str, &MoveBody) -> ClientResult<()> + Send>>,
    get_moves: Option<IdResponder<Vec<RemoteMove>>>,
    get_valid_moves: Option<Box<dyn Fn(&str, &str) -> ClientResult<Vec<RemoteSquare>> + Send>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ServiceInfo,
    CreateGame,
    GetGame { game_id: String },
    DeleteGame { game_id: String },
    MakeMove { game_id: String, from: String, to: String },
    GetMoves { game_id: String },
    GetValidMoves { game_id: String, square: String },
}

impl Default for MockChessApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChessApi {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(MockResponses::default())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure service_info response
    pub fn with_service_info_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<String> + Send + 'static,
    {
        self.responses.lock().unwrap().service_info = Some(Box::new(f));
        self
    }

    /// Configure create_game response
    pub fn with_create_game_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<RemoteGame> + Send + 'static,
    {
        self.responses.lock().unwrap().create_game = Some(Box::new(f));
        self
    }

    /// Configure get_game response
    pub fn with_get_game_response<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> ClientResult<RemoteGame> + Send + 'static,
    {
        self.responses.lock().unwrap().get_game = Some(Box::new(f));
        self
    }

    /// Configure delete_game response
    pub fn with_delete_game_response<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> ClientResult<()> + Send + 'static,
    {
        self.responses.lock().unwrap().delete_game = Some(Box::new(f));
        self
    }

    /// Configure make_move response
    pub fn with_make_move_response<F>(self, f: F) -> Self
    where
        F: Fn(&str, &MoveBody) -> ClientResult<()> + Send + 'static,
    {
        self.responses.lock().unwrap().make_move = Some(Box::new(f));
        self
    }

    /// Configure get_moves response
    pub fn with_moves_response<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> ClientResult<Vec<RemoteMove>> + Send + 'static,
    {
        self.responses.lock().unwrap().get_moves = Some(Box::new(f));
        self
    }

    /// Configure get_valid_moves response
    pub fn with_valid_moves_response<F>(self, f: F) -> Self
    where
        F: Fn(&str, &str) -> ClientResult<Vec<RemoteSquare>> + Send + 'static,
    {
        self.responses.lock().unwrap().get_valid_moves = Some(Box::new(f));
        self
    }

    /// Pre-configure a server that hands out "game-1", "game-2", ... and
    /// serves the starting position for any id.
    pub fn with_standard_game(self) -> Self {
        let counter = AtomicUsize::new(0);
        self.with_create_game_response(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(standard_game(&format!("game-{}", n)))
        })
        .with_get_game_response(|id| Ok(standard_game(id)))
    }

    /// Get recorded calls for verification
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear call history
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    fn record(&self, call: MockCall) {
        self.call_log.lock().unwrap().push(call);
    }
}

/// Starting position in the shape the game service sends it: upper-case
/// names, white to move.
pub fn standard_game(id: &str) -> RemoteGame {
    const BACK_RANK: [&str; 8] = [
        "ROOK", "KNIGHT", "BISHOP", "QUEEN", "KING", "BISHOP", "KNIGHT", "ROOK",
    ];

    let piece = |kind: &str, color: &str| {
        Some(RemotePiece {
            kind: kind.to_string(),
            color: color.to_string(),
        })
    };

    let mut squares = vec![vec![None; 8]; 8];
    for (col, kind) in BACK_RANK.iter().enumerate() {
        squares[0][col] = piece(kind, "BLACK");
        squares[1][col] = piece("PAWN", "BLACK");
        squares[6][col] = piece("PAWN", "WHITE");
        squares[7][col] = piece(kind, "WHITE");
    }

    RemoteGame {
        id: Some(id.to_string()),
        board: Some(RemoteBoard {
            squares: Some(squares),
        }),
        current_turn: Some("WHITE".to_string()),
        in_check: None,
        checkmate: None,
        status: Some("ACTIVE".to_string()),
    }
}

#[async_trait]
impl ChessApi for MockChessApi {
    async fn service_info(&self) -> ClientResult<String> {
        self.record(MockCall::ServiceInfo);

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.service_info {
            f()
        } else {
            Err(ClientError::NotConfigured("service_info".to_string()))
        }
    }

    async fn create_game(&self) -> ClientResult<RemoteGame> {
        self.record(MockCall::CreateGame);

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.create_game {
            f()
        } else {
            Err(ClientError::NotConfigured("create_game".to_string()))
        }
    }

    async fn get_game(&self, game_id: &str) -> ClientResult<RemoteGame> {
        self.record(MockCall::GetGame {
            game_id: game_id.to_string(),
        });

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.get_game {
            f(game_id)
        } else {
            Err(ClientError::NotConfigured("get_game".to_string()))
        }
    }

    async fn delete_game(&self, game_id: &str) -> ClientResult<()> {
        self.record(MockCall::DeleteGame {
            game_id: game_id.to_string(),
        });

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.delete_game {
            f(game_id)
        } else {
            Ok(())
        }
    }

    async fn make_move(&self, game_id: &str, mv: &MoveBody) -> ClientResult<()> {
        self.record(MockCall::MakeMove {
            game_id: game_id.to_string(),
            from: mv.from.clone(),
            to: mv.to.clone(),
        });

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.make_move {
            f(game_id, mv)
        } else {
            Err(ClientError::NotConfigured("make_move".to_string()))
        }
    }

    async fn get_moves(&self, game_id: &str) -> ClientResult<Vec<RemoteMove>> {
        self.record(MockCall::GetMoves {
            game_id: game_id.to_string(),
        });

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.get_moves {
            f(game_id)
        } else {
            Ok(Vec::new())
        }
    }

    async fn get_valid_moves(
        &self,
        game_id: &str,
        square: &str,
    ) -> ClientResult<Vec<RemoteSquare>> {
        self.record(MockCall::GetValidMoves {
            game_id: game_id.to_string(),
            square: square.to_string(),
        });

        let responses = self.responses.lock().unwrap();
        if let Some(ref f) = responses.get_valid_moves {
            f(game_id, square)
        } else {
            Ok(Vec::new())
        }
    }
}
