use std::time::Duration;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Idle,
    Playing,
    GameOver,
}

#[derive(Clone)]
pub struct GameConfig {
    pub grid_size: i32,
    pub move_interval: Duration,
    pub price_interval: Duration,
    pub starting_wallet: i64,
    /// Live targets the spawner keeps on the board while playing.
    pub target_population: usize,
    /// The first N spawns of a run are forced buys.
    pub buy_only_spawns: u32,
    /// Uniform draws tried per spawn before the spawn is dropped.
    pub place_attempts: u32,
    /// Spawn attempts per replenish call; under-population is accepted
    /// over spinning on a crowded board.
    pub replenish_spawn_cap: usize,
    pub target_lifetime_min: Duration,
    pub target_lifetime_max: Duration,
    /// Total width of the per-tick uniform price drift, i.e. delta is
    /// drawn from [-drift/2, +drift/2).
    pub price_drift: f64,
    /// Prices never fall below this fraction of the base price.
    pub price_floor_ratio: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            move_interval: Duration::from_millis(150),
            price_interval: Duration::from_millis(500),
            starting_wallet: 25_000,
            target_population: 4,
            buy_only_spawns: 8,
            place_attempts: 100,
            replenish_spawn_cap: 8,
            target_lifetime_min: Duration::from_millis(5_000),
            target_lifetime_max: Duration::from_millis(10_000),
            price_drift: 0.08,
            price_floor_ratio: 0.1,
        }
    }
}
