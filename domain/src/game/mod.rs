mod action;
mod body;
mod config;
mod effect;
mod error;
mod grid;
mod prices;
mod snapshot;
mod spawner;
mod state;


pub use action::GameAction;
pub use body::{Body, PortfolioSlot, Segment};
pub use config::{GameConfig, GamePhase};
pub use effect::GameEffect;
pub use error::GameError;
pub use grid::{Cell, Direction};
pub use snapshot::GameSnapshot;
pub use spawner::{Target, TargetKind};
pub use state::{GameState, RunStats};
