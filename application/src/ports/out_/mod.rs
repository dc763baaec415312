mod common;
mod game;

pub use common::Clock;
pub use game::{SessionServiceError, SnapshotNotifier};
