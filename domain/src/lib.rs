mod company;
mod game;
mod types;

pub use company::{CatalogError, Company, CompanyCatalog};
pub use game::{
    Body, Cell, Direction, GameAction, GameConfig, GameEffect, GameError, GamePhase, GameSnapshot,
    GameState, PortfolioSlot, RunStats, Segment, Target, TargetKind,
};
pub use types::{RunId, SessionId};
