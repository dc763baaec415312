use std::time::Duration;

use super::action::GameAction;
use super::snapshot::GameSnapshot;

#[derive(Clone, Debug)]
pub enum GameEffect {
    /// Full per-tick state for the rendering/UI collaborator.
    Publish(GameSnapshot),
    DelayedAction { delay: Duration, action: GameAction },
}
