//! End-to-end tests of the HTTP transport against a throwaway in-process
//! hyper server imitating the game service.

use chess_common::from_notation;
use bytes::Bytes;
use chess_client::{
    ClientError, GameSessionClient, GridCoord, MoveRequest, PieceColor, PieceKind,
};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::{TcpListener, TcpStream};

const PREFIX: &str = "/api/chess";

#[derive(Default)]
struct FakeService {
    next_id: usize,
    games: HashMap<String, Vec<(String, String)>>,
    requests: Vec<String>,
}

struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl Reply {
    fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

fn coord_json(square: &str) -> Value {
    let bytes = square.as_bytes();
    let col = (bytes[0] - b'a') as usize;
    let row = 8 - (bytes[1] - b'0') as usize;
    json!({ "row": row, "col": col })
}

fn game_json(id: &str, moves: &[(String, String)]) -> Value {
    let mut squares = vec![vec![Value::Null; 8]; 8];
    squares[0][4] = json!({ "type": "KING", "color": "BLACK", "hasMoved": false });
    squares[7][4] = json!({ "type": "KING", "color": "WHITE", "hasMoved": false });
    let turn = if moves.len() % 2 == 0 { "WHITE" } else { "BLACK" };

    json!({
        "id": id,
        "board": { "squares": squares },
        "currentTurn": turn,
        "moveHistory": [],
        "status": "ACTIVE"
    })
}

impl FakeService {
    fn handle(&mut self, method: &str, path: &str, body: &str) -> Reply {
        self.requests.push(format!("{} {}", method, path));

        let Some(rest) = path.strip_prefix(PREFIX) else {
            return Reply::text(404, "");
        };
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        match (method, segments.as_slice()) {
            ("GET", []) => Reply::text(200, "Chess API is running"),
            ("POST", ["games"]) => {
                self.next_id += 1;
                let id = format!("g{}", self.next_id);
                self.games.insert(id.clone(), Vec::new());
                Reply::json(201, game_json(&id, &[]))
            }
            ("GET", ["games", id]) => match self.games.get(*id) {
                Some(moves) => Reply::json(200, game_json(id, moves)),
                None => Reply::text(404, ""),
            },
            ("DELETE", ["games", id]) => {
                self.games.remove(*id);
                Reply::text(204, "")
            }
            ("POST", ["games", id, "moves"]) => {
                let Some(moves) = self.games.get_mut(*id) else {
                    return Reply::text(404, "");
                };
                let request: Value = serde_json::from_str(body).unwrap_or(Value::Null);
                let from = request["from"].as_str().unwrap_or_default().to_string();
                let to = request["to"].as_str().unwrap_or_default().to_string();
                if from == "e3" {
                    return Reply::text(400, "No piece at position e3");
                }
                moves.push((from.clone(), to.clone()));
                Reply::json(
                    200,
                    json!({ "from": coord_json(&from), "to": coord_json(&to), "promotion": false }),
                )
            }
            ("GET", ["games", id, "moves"]) => match self.games.get(*id) {
                Some(moves) => Reply::json(
                    200,
                    Value::Array(
                        moves
                            .iter()
                            .map(|(from, to)| {
                                json!({ "from": coord_json(from), "to": coord_json(to) })
                            })
                            .collect(),
                    ),
                ),
                None => Reply::text(404, ""),
            },
            ("GET", ["games", _, "valid-moves", square]) => {
                let coord = coord_json(square);
                let row = coord["row"].as_u64().unwrap_or_default();
                let col = coord["col"].as_u64().unwrap_or_default();
                Reply::json(
                    200,
                    json!([{ "row": row - 1, "col": col }, { "row": row - 2, "col": col }]),
                )
            }
            _ => Reply::text(404, ""),
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

async fn serve(stream: TcpStream, service: Arc<Mutex<FakeService>>) {
    let handler = service_fn(move |req: Request<Incoming>| {
        let service = service.clone();
        async move {
            let method = req.method().to_string();
            let path = req.uri().path().to_string();
            let bytes = req.into_body().collect().await?.to_bytes();
            let body = String::from_utf8_lossy(&bytes).into_owned();
            let reply = service.lock().unwrap().handle(&method, &path, &body);

            let response = Response::builder()
                .status(reply.status)
                .header(CONTENT_TYPE, reply.content_type)
                .body(Full::new(Bytes::from(reply.body)))?;
            Ok::<_, BoxError>(response)
        }
    });

    let connection =
        tokio::spawn(http1::Builder::new().serve_connection(TokioIo::new(stream), handler));
    if let Ok(Err(err)) = connection.await {
        eprintln!("fake service connection error: {err}");
    }
}

async fn spawn_fake_service() -> (String, Arc<Mutex<FakeService>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = Arc::new(Mutex::new(FakeService::default()));

    let shared = service.clone();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(serve(stream, shared.clone()));
        }
    });

    (format!("http://{}{}", addr, PREFIX), service)
}

fn request(from: &str, to: &str) -> MoveRequest {
    MoveRequest::new(
        from_notation(from).unwrap(),
        from_notation(to).unwrap(),
    )
}

#[tokio::test]
async fn test_full_game_flow_over_http() {
    let (base_url, service) = spawn_fake_service().await;
    let mut client = GameSessionClient::connect(&base_url).unwrap();

    assert_eq!(client.service_info().await.unwrap(), "Chess API is running");
    assert!(client.fetch_move_history().await.unwrap().is_empty());

    let board = client.fetch_board().await.unwrap();
    assert_eq!(client.session_id(), Some("g1"));
    assert_eq!(board.piece_count(), 2);
    assert_eq!(board.current_player, PieceColor::White);
    assert_eq!(
        board.piece_at(GridCoord::new(7, 4)).map(|p| (p.kind, p.color)),
        Some((PieceKind::King, PieceColor::White))
    );

    let accepted = client.submit_move(request("e2", "e4")).await.unwrap();
    assert!(accepted.valid);
    assert_eq!(accepted.notation, "e2-e4");
    assert_eq!(
        accepted.board.map(|b| b.current_player),
        Some(PieceColor::Black)
    );

    let rejected = client.submit_move(request("e3", "e5")).await.unwrap();
    assert!(!rejected.valid);
    assert_eq!(rejected.message, "No piece at position e3");
    assert_eq!(rejected.notation, "e3-e5");
    assert!(rejected.board.is_none());

    assert_eq!(client.fetch_move_history().await.unwrap(), vec!["e2-e4"]);
    assert_eq!(
        client.fetch_valid_moves(6, 4).await.unwrap(),
        vec![GridCoord::new(5, 4), GridCoord::new(4, 4)]
    );

    let fresh = client.reset_game().await.unwrap();
    assert_eq!(client.session_id(), Some("g2"));
    assert_eq!(fresh.current_player, PieceColor::White);
    assert!(client.fetch_move_history().await.unwrap().is_empty());

    let service = service.lock().unwrap();
    assert!(!service.games.contains_key("g1"));
    assert!(service
        .requests
        .contains(&"DELETE /api/chess/games/g1".to_string()));
    assert!(service
        .requests
        .contains(&"POST /api/chess/games/g1/moves".to_string()));
}

#[tokio::test]
async fn test_unreachable_service_on_create() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = format!("http://{}{}", addr, PREFIX);
    let mut client = GameSessionClient::connect(&base_url).unwrap();
    let err = client.fetch_board().await.unwrap_err();
    match err {
        ClientError::SessionUnavailable(cause) => {
            assert!(matches!(*cause, ClientError::Request(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(client.session_id(), None);
}

#[tokio::test]
async fn test_session_lost_on_server_is_a_rejected_move() {
    let (base_url, service) = spawn_fake_service().await;
    let mut client = GameSessionClient::connect(&base_url).unwrap();
    client.fetch_board().await.unwrap();

    service.lock().unwrap().games.clear();

    let result = client.submit_move(request("e2", "e4")).await.unwrap();
    assert!(!result.valid);
    assert_eq!(result.message, "Invalid move");
    assert_eq!(client.session_id(), Some("g1"));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let (base_url, service) = spawn_fake_service().await;
    let client = GameSessionClient::connect(&format!("{}/", base_url)).unwrap();

    assert_eq!(client.service_info().await.unwrap(), "Chess API is running");
    assert_eq!(
        service.lock().unwrap().requests,
        vec!["GET /api/chess".to_string()]
    );
}
