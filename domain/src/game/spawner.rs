use rand::Rng;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{Company, CompanyCatalog};

use super::body::Body;
use super::config::GameConfig;
use super::grid::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    Buy,
    Sell,
}

/// A consumable grid cell tagged with the trade it triggers.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub cell: Cell,
    pub company: Company,
    pub kind: TargetKind,
    /// Absolute expiry, milliseconds on the driver's clock.
    pub expires_at: u64,
}

/// Places buy/sell targets and holds them until consumption or expiry.
#[derive(Clone, Debug, Default)]
pub(super) struct Spawner {
    targets: Vec<Target>,
    spawn_count: u32,
    cursor: usize,
    current_target: Option<Company>,
}

impl Spawner {
    /// Fresh spawner for a new run. The round-robin cursor starts at 1,
    /// so the first listing shown is the catalog's second entry.
    pub(super) fn fresh() -> Self {
        Self {
            targets: Vec::new(),
            spawn_count: 0,
            cursor: 1,
            current_target: None,
        }
    }

    pub(super) fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Most recently selected buy-target company, surfaced to the UI as
    /// the "new listing".
    pub(super) fn current_target(&self) -> Option<&Company> {
        self.current_target.as_ref()
    }

    /// Removes lapsed targets. Returns whether anything expired so the
    /// caller can replenish.
    pub(super) fn expire(&mut self, now: u64) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.expires_at > now);
        self.targets.len() < before
    }

    /// Removes and returns the target at `cell`, if any.
    pub(super) fn consume_at(&mut self, cell: Cell) -> Option<Target> {
        let index = self.targets.iter().position(|t| t.cell == cell)?;
        Some(self.targets.remove(index))
    }

    /// Tops the population back up to the configured count. Spawn
    /// attempts are capped per call; a crowded board under-populates
    /// instead of looping.
    pub(super) fn replenish(
        &mut self,
        config: &GameConfig,
        catalog: &CompanyCatalog,
        body: &Body,
        rng: &mut SmallRng,
        now: u64,
    ) {
        for _ in 0..config.replenish_spawn_cap {
            if self.targets.len() >= config.target_population {
                break;
            }
            self.spawn_one(config, catalog, body, rng, now);
        }
    }

    /// One spawn: pick kind and company, then try to place. The spawn
    /// counter advances even when placement fails.
    fn spawn_one(
        &mut self,
        config: &GameConfig,
        catalog: &CompanyCatalog,
        body: &Body,
        rng: &mut SmallRng,
        now: u64,
    ) {
        self.spawn_count += 1;

        let holdings = body.holdings();
        let kind = if self.spawn_count <= config.buy_only_spawns || holdings.is_empty() {
            TargetKind::Buy
        } else if rng.gen_bool(0.5) {
            TargetKind::Buy
        } else {
            TargetKind::Sell
        };

        let company = match kind {
            TargetKind::Sell => holdings[rng.gen_range(0..holdings.len())].clone(),
            TargetKind::Buy => {
                let company = catalog.get(self.cursor).clone();
                self.cursor += 1;
                self.current_target = Some(company.clone());
                company
            }
        };

        let Some(cell) = self.place(config, body, rng) else {
            return;
        };

        let min = config.target_lifetime_min.as_millis() as u64;
        let max = config.target_lifetime_max.as_millis() as u64;
        let lifetime = rng.gen_range(min..max);
        self.targets.push(Target {
            cell,
            company,
            kind,
            expires_at: now + lifetime,
        });
    }

    #[cfg(test)]
    pub(super) fn push_target(&mut self, target: Target) {
        self.targets.push(target);
    }

    #[cfg(test)]
    pub(super) fn clear_targets(&mut self) {
        self.targets.clear();
    }

    #[cfg(test)]
    pub(super) fn spawn_count(&self) -> u32 {
        self.spawn_count
    }

    #[cfg(test)]
    pub(super) fn set_spawn_count(&mut self, count: u32) {
        self.spawn_count = count;
    }

    /// Bounded search for a free cell; `None` drops the spawn silently.
    fn place(&self, config: &GameConfig, body: &Body, rng: &mut SmallRng) -> Option<Cell> {
        for _ in 0..config.place_attempts {
            let cell = Cell::new(
                rng.gen_range(0..config.grid_size),
                rng.gen_range(0..config.grid_size),
            );
            let taken = body.occupies(cell) || self.targets.iter().any(|t| t.cell == cell);
            if !taken {
                return Some(cell);
            }
        }
        None
    }
}
