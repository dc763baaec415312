use serde::Serialize;

use crate::Company;

use super::body::Segment;
use super::config::GamePhase;
use super::spawner::Target;

/// Everything the rendering/UI collaborator needs, published once per
/// movement or price tick.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub player: String,
    pub body: Vec<Segment>,
    pub targets: Vec<Target>,
    pub wallet: i64,
    pub current_value: i64,
    pub returns: i64,
    pub score: u32,
    pub buy_count: u32,
    pub sell_count: u32,
    /// Most recently spawned buy-target company ("new listing" panel).
    pub current_target: Option<Company>,
}
