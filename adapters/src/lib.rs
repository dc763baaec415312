mod in_memory;
mod system_clock;
mod websocket;

pub use in_memory::{InMemory, ManualClock};
pub use system_clock::SystemClock;
pub use websocket::{AppState, IncomingMessage, WebSocketNotifier, handle_connection};
