mod companies;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

use adapters::{AppState, SystemClock, WebSocketNotifier, handle_connection};
use application::ports::out_::Clock;
use domain::{CompanyCatalog, GameConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = CompanyCatalog::new(companies::nifty_companies())
        .expect("static company list must be valid");

    let notifier = Arc::new(WebSocketNotifier::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let sessions = Arc::new(RwLock::new(HashMap::new()));

    let app_state = Arc::new(AppState::new(
        notifier,
        clock,
        sessions,
        catalog,
        GameConfig::default(),
    ));

    let app = Router::new()
        .route("/ws", get(handle_connection))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server listening on 0.0.0.0:3000");
    axum::serve(listener, app).await.unwrap();
    info!("Server shut down");
}
