use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use application::ports::out_::{Clock, SnapshotNotifier};
use domain::{GameSnapshot, SessionId};

/// Recording notifier for tests: keeps every published snapshot instead
/// of sending it anywhere.
pub struct InMemory {
    snapshots: RwLock<Vec<(SessionId, GameSnapshot)>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<(SessionId, GameSnapshot)> {
        self.snapshots.read().unwrap().clone()
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotNotifier for InMemory {
    async fn publish(&self, session_id: SessionId, snapshot: &GameSnapshot) {
        self.snapshots.write().unwrap().push((session_id, snapshot.clone()));
    }
}

/// Settable clock so tests control target expiry without sleeping.
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(now_ms),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
