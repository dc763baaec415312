use serde::{Deserialize, Serialize};

/// One websocket connection owns one session; the session outlives
/// individual runs of the game.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        SessionId::new()
    }
}

/// Minted on every run start. Periodic tick actions carry the id of the
/// run that scheduled them, so a tick chain left over from a previous run
/// can never advance the current one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct RunId(pub uuid::Uuid);

impl RunId {
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        RunId::new()
    }
}
