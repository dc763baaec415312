use thiserror::Error;

use crate::RunId;

use super::config::GamePhase;

#[derive(Debug, Clone, Error)]
pub enum GameError {
    #[error("action {action} not valid in phase {phase:?}")]
    InvalidPhase { action: &'static str, phase: GamePhase },

    #[error("tick from stale run {tick_run:?}, current run is {current_run:?}")]
    StaleRun { tick_run: RunId, current_run: RunId },
}
