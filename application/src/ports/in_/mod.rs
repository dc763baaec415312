mod session_service;

pub use session_service::{SessionStore, SessionUseCase, execute, process_action};
