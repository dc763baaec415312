use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{Company, CompanyCatalog, RunId};

use super::body::{Body, PortfolioSlot};
use super::config::{GameConfig, GamePhase};
use super::grid::{Cell, Direction};
use super::prices::PriceTable;
use super::snapshot::GameSnapshot;
use super::spawner::{Spawner, TargetKind};
use super::{GameAction, GameEffect, GameError};

const STARTING_LENGTH: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct RunStats {
    pub score: u32,
    pub buy_count: u32,
    pub sell_count: u32,
}

/// One session's simulation state. All run state (body, wallet, prices,
/// targets, stats) is rebuilt on `Start` and frozen on `GameOver`.
#[derive(Clone)]
pub struct GameState {
    pub(super) phase: GamePhase,
    pub(super) config: GameConfig,
    pub(super) catalog: CompanyCatalog,
    pub(super) run: RunId,
    player: String,
    pub(super) body: Body,
    pub(super) wallet: i64,
    pub(super) prices: PriceTable,
    pub(super) spawner: Spawner,
    pub(super) stats: RunStats,
    pub(super) direction: Direction,
    pub(super) pending_direction: Direction,
    pub(super) rng: SmallRng,
}

impl GameState {
    #[must_use]
    pub fn new(catalog: CompanyCatalog, config: GameConfig) -> Self {
        Self::with_rng(catalog, config, SmallRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    #[must_use]
    pub fn with_seed(catalog: CompanyCatalog, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(catalog, config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: CompanyCatalog, config: GameConfig, rng: SmallRng) -> Self {
        let wallet = config.starting_wallet;
        let prices = PriceTable::seeded(&catalog);
        Self {
            phase: GamePhase::Idle,
            config,
            catalog,
            run: RunId::new(),
            player: String::new(),
            body: Body::default(),
            wallet,
            prices,
            spawner: Spawner::fresh(),
            stats: RunStats::default(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            rng,
        }
    }

    /// Single entry point of the state machine. `now` is the driver's
    /// clock in milliseconds, sampled when the action executes.
    pub fn process_action(
        &mut self,
        action: GameAction,
        now: u64,
    ) -> Result<Vec<GameEffect>, GameError> {
        match action {
            GameAction::Start { player } => self.handle_start(player, now),
            GameAction::MoveTick { run } => {
                self.require_run(run)?;
                self.handle_move_tick(now)
            }
            GameAction::PriceTick { run } => {
                self.require_run(run)?;
                self.handle_price_tick()
            }
            GameAction::Steer(direction) => self.handle_steer(direction),
            GameAction::Reset => self.handle_reset(),
        }
    }

    fn require_phase(&self, required: GamePhase, action: &'static str) -> Result<(), GameError> {
        if self.phase != required {
            return Err(GameError::InvalidPhase {
                action,
                phase: self.phase.clone(),
            });
        }
        Ok(())
    }

    /// Tick chains from a finished run must not touch the current one.
    fn require_run(&self, run: RunId) -> Result<(), GameError> {
        if run != self.run {
            return Err(GameError::StaleRun {
                tick_run: run,
                current_run: self.run,
            });
        }
        Ok(())
    }

    fn handle_start(&mut self, player: String, now: u64) -> Result<Vec<GameEffect>, GameError> {
        if self.phase == GamePhase::Playing {
            return Err(GameError::InvalidPhase {
                action: "Start",
                phase: self.phase.clone(),
            });
        }

        let head = Cell::new(self.config.grid_size / 4, self.config.grid_size / 2);

        self.phase = GamePhase::Playing;
        self.run = RunId::new();
        self.player = player;
        self.body = Body::spawn(head, STARTING_LENGTH);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.wallet = self.config.starting_wallet;
        self.stats = RunStats::default();
        self.prices = PriceTable::seeded(&self.catalog);
        self.spawner = Spawner::fresh();
        self.spawner
            .replenish(&self.config, &self.catalog, &self.body, &mut self.rng, now);

        Ok(vec![
            GameEffect::Publish(self.snapshot()),
            GameEffect::DelayedAction {
                delay: self.config.move_interval,
                action: GameAction::MoveTick { run: self.run },
            },
            GameEffect::DelayedAction {
                delay: self.config.price_interval,
                action: GameAction::PriceTick { run: self.run },
            },
        ])
    }

    fn handle_move_tick(&mut self, now: u64) -> Result<Vec<GameEffect>, GameError> {
        self.require_phase(GamePhase::Playing, "MoveTick")?;

        if self.spawner.expire(now) {
            self.spawner
                .replenish(&self.config, &self.catalog, &self.body, &mut self.rng, now);
        }

        self.direction = self.pending_direction;

        let Some(head) = self.body.head() else {
            return Ok(vec![]);
        };
        let next = head.step(self.direction);

        if !next.in_bounds(self.config.grid_size) || self.body.would_collide(next) {
            return Ok(self.finish_run());
        }

        match self.spawner.consume_at(next) {
            Some(target) => {
                let price = self.prices.live(&target.company);
                match target.kind {
                    TargetKind::Buy => self.resolve_buy(next, &target.company, price),
                    TargetKind::Sell => self.resolve_sell(next, &target.company, price),
                }
                self.stats.score += 1;
                self.spawner
                    .replenish(&self.config, &self.catalog, &self.body, &mut self.rng, now);
            }
            None => self.body.advance(next),
        }

        Ok(vec![
            GameEffect::Publish(self.snapshot()),
            GameEffect::DelayedAction {
                delay: self.config.move_interval,
                action: GameAction::MoveTick { run: self.run },
            },
        ])
    }

    /// Buy resolution. Liquidates tail-most holdings while the wallet is
    /// short (the most recent purchase rides at the head and is never a
    /// candidate), then buys at the live price. If the candidates run
    /// out, funds are not re-checked: the purchase still goes through and
    /// the wallet may go negative.
    fn resolve_buy(&mut self, head: Cell, company: &Company, price: i64) {
        while self.wallet < price && self.body.len() > 1 {
            let Some(index) = self.body.rfind_holding(|_| true) else {
                break;
            };
            let segment = self.body.remove(index);
            if let PortfolioSlot::Holding { company: sold, .. } = segment.slot {
                self.wallet += self.prices.live(&sold);
                self.stats.sell_count += 1;
            }
        }

        self.body.push_front(
            head,
            PortfolioSlot::Holding {
                company: company.clone(),
                cost_basis: price,
            },
        );
        self.wallet -= price;
        self.stats.buy_count += 1;
    }

    /// Sell resolution. The body advances as on a plain move; if the
    /// ticker is also held behind the head, that pair is spliced out for
    /// its live price. The head position itself is never sold.
    fn resolve_sell(&mut self, head: Cell, company: &Company, price: i64) {
        self.body.advance(head);

        if let Some(index) = self.body.rfind_holding(|c| c.ticker == company.ticker) {
            if self.body.len() > 1 {
                self.body.remove(index);
                self.wallet += price;
                self.stats.sell_count += 1;
            }
        }
    }

    fn handle_price_tick(&mut self) -> Result<Vec<GameEffect>, GameError> {
        self.require_phase(GamePhase::Playing, "PriceTick")?;

        self.prices.fluctuate(
            &self.catalog,
            &mut self.rng,
            self.config.price_drift,
            self.config.price_floor_ratio,
        );

        Ok(vec![
            GameEffect::Publish(self.snapshot()),
            GameEffect::DelayedAction {
                delay: self.config.price_interval,
                action: GameAction::PriceTick { run: self.run },
            },
        ])
    }

    /// Direction intent, silently ignored outside playing. Only a turn
    /// onto the other axis lands in the one-slot buffer; latest wins.
    fn handle_steer(&mut self, direction: Direction) -> Result<Vec<GameEffect>, GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(vec![]);
        }
        if direction.is_orthogonal_to(self.direction) {
            self.pending_direction = direction;
        }
        Ok(vec![])
    }

    fn handle_reset(&mut self) -> Result<Vec<GameEffect>, GameError> {
        self.require_phase(GamePhase::GameOver, "Reset")?;
        self.phase = GamePhase::Idle;
        Ok(vec![GameEffect::Publish(self.snapshot())])
    }

    /// Terminal transition: freeze state, publish final tallies, arm
    /// nothing. The price chain dies on its next firing with
    /// `InvalidPhase`.
    fn finish_run(&mut self) -> Vec<GameEffect> {
        self.phase = GamePhase::GameOver;
        vec![GameEffect::Publish(self.snapshot())]
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let (current_value, returns) = self.body.valuate(|c| self.prices.live(c));
        GameSnapshot {
            phase: self.phase.clone(),
            player: self.player.clone(),
            body: self.body.segments().to_vec(),
            targets: self.spawner.targets().to_vec(),
            wallet: self.wallet,
            current_value,
            returns,
            score: self.stats.score,
            buy_count: self.stats.buy_count,
            sell_count: self.stats.sell_count,
            current_target: self.spawner.current_target().cloned(),
        }
    }
}
