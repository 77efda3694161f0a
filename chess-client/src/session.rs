//! Ownership of the single remote game session

use crate::error::{ClientError, ClientResult};
use crate::traits::ChessApi;

/// Holds the id of the active remote game, if any.
///
/// The id is opaque: it is only ever passed back to the service.
#[derive(Debug, Default)]
pub struct SessionManager {
    session_id: Option<String>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Return the held session id, creating a remote game if there is none.
    pub async fn ensure<A: ChessApi + ?Sized>(&mut self, api: &A) -> ClientResult<String> {
        if let Some(id) = &self.session_id {
            return Ok(id.clone());
        }
        self.create(api).await
    }

    /// Replace the current session with a new one.
    ///
    /// The old id is dropped before it is destroyed remotely, so it is never
    /// reused. A failed destroy is logged and does not stop the reset.
    pub async fn reset<A: ChessApi + ?Sized>(&mut self, api: &A) -> ClientResult<String> {
        if let Some(old_id) = self.session_id.take() {
            if let Err(e) = api.delete_game(&old_id).await {
                tracing::warn!(session_id = %old_id, "Failed to delete previous game: {}", e);
            }
        }
        self.create(api).await
    }

    /// Drop the current session and destroy it remotely.
    pub async fn destroy<A: ChessApi + ?Sized>(&mut self, api: &A) -> ClientResult<()> {
        if let Some(session_id) = self.session_id.take() {
            api.delete_game(&session_id).await?;
            tracing::info!(%session_id, "Game session closed");
        }
        Ok(())
    }

    async fn create<A: ChessApi + ?Sized>(&mut self, api: &A) -> ClientResult<String> {
        let game = api
            .create_game()
            .await
            .map_err(|e| ClientError::SessionUnavailable(Box::new(e)))?;
        let session_id = game
            .session_id()
            .map_err(|e| ClientError::SessionUnavailable(Box::new(e)))?;

        tracing::info!(%session_id, "New game created");
        self.session_id = Some(session_id.clone());
        Ok(session_id)
    }
}
