//! Error types for the chess client

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    #[error("Request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),

    #[error("Failed to read response: {0}")]
    Body(#[from] hyper::Error),

    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("No active session")]
    NoActiveSession,

    #[error("Could not create game session: {0}")]
    SessionUnavailable(#[source] Box<ClientError>),

    #[error("Coordinate out of range: row {row}, col {col}")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server returned invalid data: {0}")]
    InvalidData(String),

    #[error("Mock response not configured for: {0}")]
    NotConfigured(String),
}

impl ClientError {
    /// Message supplied by the server, if this error carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => Some(message.as_str()),
            Self::SessionUnavailable(inner) => inner.server_message(),
            _ => None,
        }
    }
}
