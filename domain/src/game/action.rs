use crate::RunId;

use super::grid::Direction;

#[derive(Clone, Debug)]
pub enum GameAction {
    /// idle/gameOver -> playing; resets all run state.
    Start { player: String },
    /// Movement driver firing. Carries the run that scheduled it.
    MoveTick { run: RunId },
    /// Price driver firing, independent of movement.
    PriceTick { run: RunId },
    /// Buffered direction intent; applied at the next movement tick.
    Steer(Direction),
    /// gameOver -> idle.
    Reset,
}
