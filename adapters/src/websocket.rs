use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::{Mutex as TokioMutex, RwLock};
use tracing::{debug, info, warn};

use application::ports::in_::{SessionStore, SessionUseCase, execute};
use application::ports::out_::{Clock, SnapshotNotifier};
use domain::{CompanyCatalog, Direction, GameConfig, GameSnapshot, GameState, SessionId};

type WebSocketSender = SplitSink<WebSocket, Message>;

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IncomingMessage {
    StartRun { player: String },
    Steer { direction: Direction },
    Reset,
}

pub struct AppState {
    pub notifier: Arc<WebSocketNotifier>,
    pub clock: Arc<dyn Clock>,
    pub sessions: SessionStore,
    pub catalog: CompanyCatalog,
    pub config: GameConfig,
}

impl AppState {
    pub fn new(
        notifier: Arc<WebSocketNotifier>,
        clock: Arc<dyn Clock>,
        sessions: SessionStore,
        catalog: CompanyCatalog,
        config: GameConfig,
    ) -> Self {
        Self {
            notifier,
            clock,
            sessions,
            catalog,
            config,
        }
    }
}

/// Pushes each published snapshot down the session's socket as JSON.
pub struct WebSocketNotifier {
    connections: RwLock<HashMap<SessionId, TokioMutex<WebSocketSender>>>,
}

impl WebSocketNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    pub async fn register(&self, session_id: SessionId, sender: WebSocketSender) {
        self.connections
            .write()
            .await
            .insert(session_id, TokioMutex::new(sender));
    }

    pub async fn unregister(&self, session_id: SessionId) {
        self.connections.write().await.remove(&session_id);
    }
}

impl Default for WebSocketNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotNotifier for WebSocketNotifier {
    async fn publish(&self, session_id: SessionId, snapshot: &GameSnapshot) {
        let payload = match serde_json::to_string(snapshot) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(?session_id, %err, "failed to serialize snapshot");
                return;
            }
        };

        let connections = self.connections.read().await;
        let Some(sender) = connections.get(&session_id) else {
            debug!(?session_id, "snapshot for a session with no connection");
            return;
        };
        if let Err(err) = sender.lock().await.send(Message::Text(payload.into())).await {
            debug!(?session_id, %err, "failed to push snapshot");
        }
    }
}

pub async fn handle_connection(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();
    let session_id = SessionId::new();

    state.notifier.register(session_id, sender).await;
    state.sessions.write().await.insert(
        session_id,
        GameState::new(state.catalog.clone(), state.config.clone()),
    );
    info!(?session_id, "session opened");

    while let Some(Ok(message)) = receiver.next().await {
        let Message::Text(text) = message else {
            continue;
        };

        let incoming: IncomingMessage = match serde_json::from_str(&text) {
            Ok(incoming) => incoming,
            Err(err) => {
                warn!(?session_id, %err, "unparseable message");
                continue;
            }
        };

        let use_case = match incoming {
            IncomingMessage::StartRun { player } => SessionUseCase::StartRun { session_id, player },
            IncomingMessage::Steer { direction } => SessionUseCase::Steer { session_id, direction },
            IncomingMessage::Reset => SessionUseCase::Reset { session_id },
        };

        if let Err(err) = execute(
            Arc::clone(&state.notifier),
            Arc::clone(&state.clock),
            Arc::clone(&state.sessions),
            use_case,
        )
        .await
        {
            // Phase violations are routine here: a tick chain may have
            // ended the run between two inputs.
            debug!(?session_id, ?err, "action rejected");
        }
    }

    state.sessions.write().await.remove(&session_id);
    state.notifier.unregister(session_id).await;
    info!(?session_id, "session closed");
}
