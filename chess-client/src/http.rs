//! HTTP/JSON implementation of [`ChessApi`]

use crate::error::{ClientError, ClientResult};
use crate::remote::{MoveBody, RemoteGame, RemoteMove, RemoteSquare};
use crate::traits::ChessApi;
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON: &str = "application/json";

/// Network client for the chess REST service.
///
/// `base_url` includes the API prefix, e.g. `http://localhost:8080/api/chess`.
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpChessApi {
    client: Client<HttpConnector, Full<Bytes>>,
    base_url: String,
}

impl HttpChessApi {
    /// Validate `base_url` and build a pooled plain-HTTP client.
    ///
    /// The connector does not speak TLS: any scheme other than `http` is
    /// rejected with [`ClientError::InvalidAddress`].
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let uri: Uri = base_url
            .parse()
            .map_err(|e| ClientError::InvalidAddress(format!("{}: {}", base_url, e)))?;

        if uri.scheme_str() != Some("http") || uri.authority().is_none() {
            return Err(ClientError::InvalidAddress(format!(
                "{}: expected an http:// URL with a host",
                base_url
            )));
        }

        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self { client, base_url })
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Bytes> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "Sending request");

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(&url)
            .header(ACCEPT, JSON);
        let body = match body {
            Some(bytes) => {
                builder = builder.header(CONTENT_TYPE, JSON);
                Full::new(Bytes::from(bytes))
            }
            None => Full::new(Bytes::new()),
        };
        let request = builder
            .body(body)
            .map_err(|e| ClientError::InvalidAddress(format!("{}: {}", url, e)))?;

        let response = self.client.request(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();

        tracing::debug!(%method, %url, status = status.as_u16(), "Received response");

        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: error_message(&bytes),
            });
        }

        Ok(bytes)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let bytes = self.send(Method::GET, path, None).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<Bytes> {
        let payload = serde_json::to_vec(body)?;
        self.send(Method::POST, path, Some(payload)).await
    }
}

#[async_trait]
impl ChessApi for HttpChessApi {
    async fn service_info(&self) -> ClientResult<String> {
        let bytes = self.send(Method::GET, "", None).await?;
        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }

    async fn create_game(&self) -> ClientResult<RemoteGame> {
        let bytes = self.post_json("/games", &serde_json::json!({})).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_game(&self, game_id: &str) -> ClientResult<RemoteGame> {
        self.get_json(&format!("/games/{}", game_id)).await
    }

    async fn delete_game(&self, game_id: &str) -> ClientResult<()> {
        self.send(Method::DELETE, &format!("/games/{}", game_id), None)
            .await?;
        Ok(())
    }

    async fn make_move(&self, game_id: &str, mv: &MoveBody) -> ClientResult<()> {
        // The accepted-move payload is not needed; callers re-read the game.
        self.post_json(&format!("/games/{}/moves", game_id), mv)
            .await?;
        Ok(())
    }

    async fn get_moves(&self, game_id: &str) -> ClientResult<Vec<RemoteMove>> {
        self.get_json(&format!("/games/{}/moves", game_id)).await
    }

    async fn get_valid_moves(
        &self,
        game_id: &str,
        square: &str,
    ) -> ClientResult<Vec<RemoteSquare>> {
        self.get_json(&format!("/games/{}/valid-moves/{}", game_id, square))
            .await
    }
}

/// Extract a human-readable message from an error response body.
///
/// Accepts a bare JSON string, an object with a `message` or `error` field,
/// or plain text.
pub(crate) fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        match &value {
            serde_json::Value::String(s) => return s.trim().to_string(),
            serde_json::Value::Object(map) => {
                for key in ["message", "error"] {
                    if let Some(serde_json::Value::String(s)) = map.get(key) {
                        return s.trim().to_string();
                    }
                }
            }
            _ => {}
        }
    }

    String::from_utf8_lossy(body).trim().to_string()
}
