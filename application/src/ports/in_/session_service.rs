use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ports::out_::{Clock, SessionServiceError, SnapshotNotifier};
use domain::{Direction, GameAction, GameEffect, GameState, SessionId};

/// All live sessions. Every `process_action` runs under the write lock,
/// which is what serializes the movement and price drivers: ticks never
/// overlap, and input lands between them.
pub type SessionStore = Arc<RwLock<HashMap<SessionId, GameState>>>;

pub enum SessionUseCase {
    StartRun { session_id: SessionId, player: String },
    Steer { session_id: SessionId, direction: Direction },
    Reset { session_id: SessionId },
}

pub async fn execute<N: SnapshotNotifier + 'static>(
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
    sessions: SessionStore,
    use_case: SessionUseCase,
) -> Result<(), SessionServiceError> {
    match use_case {
        SessionUseCase::StartRun { session_id, player } => {
            process_action(notifier, clock, sessions, session_id, GameAction::Start { player }).await
        }
        SessionUseCase::Steer { session_id, direction } => {
            process_action(notifier, clock, sessions, session_id, GameAction::Steer(direction)).await
        }
        SessionUseCase::Reset { session_id } => {
            process_action(notifier, clock, sessions, session_id, GameAction::Reset).await
        }
    }
}

pub async fn process_action<N: SnapshotNotifier + 'static>(
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
    sessions: SessionStore,
    session_id: SessionId,
    action: GameAction,
) -> Result<(), SessionServiceError> {
    let effects = {
        let mut store = sessions.write().await;
        let Some(state) = store.get_mut(&session_id) else {
            return Err(SessionServiceError::SessionNotFound(session_id));
        };
        state.process_action(action, clock.now_ms())?
    };

    process_effects(notifier, clock, sessions, session_id, effects);
    Ok(())
}

/// Publishes snapshots and re-arms the self-scheduling tick chains. A
/// chain dies as soon as its action comes back as an error (game over,
/// stale run), which is how the drivers halt.
fn process_effects<N: SnapshotNotifier + 'static>(
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
    sessions: SessionStore,
    session_id: SessionId,
    effects: Vec<GameEffect>,
) {
    for effect in effects {
        match effect {
            GameEffect::Publish(snapshot) => {
                let notifier = Arc::clone(&notifier);
                tokio::spawn(async move {
                    notifier.publish(session_id, &snapshot).await;
                });
            }
            GameEffect::DelayedAction { delay, action } => {
                let notifier = Arc::clone(&notifier);
                let clock = Arc::clone(&clock);
                let sessions = Arc::clone(&sessions);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = process_action(notifier, clock, sessions, session_id, action).await;
                });
            }
        }
    }
}
