use async_trait::async_trait;

use domain::{GameError, GameSnapshot, SessionId};

#[derive(Debug)]
pub enum SessionServiceError {
    SessionNotFound(SessionId),
    Game(GameError),
}

impl From<GameError> for SessionServiceError {
    fn from(err: GameError) -> Self {
        SessionServiceError::Game(err)
    }
}

/// Delivery boundary for the per-tick state the renderer consumes.
#[async_trait]
pub trait SnapshotNotifier: Send + Sync {
    async fn publish(&self, session_id: SessionId, snapshot: &GameSnapshot);
}
