//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the path, the ledger and the
//! wave scheduler, processes player requests, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use pathwarden_core::commands::PlayerCommand;
use pathwarden_core::constants::*;
use pathwarden_core::enums::GamePhase;
use pathwarden_core::error::{CommandError, ConfigError};
use pathwarden_core::events::GameEvent;
use pathwarden_core::state::GameStateSnapshot;
use pathwarden_core::types::{Position, SimTime, TowerId};

use crate::economy::EconomyLedger;
use crate::path::Path;
use crate::placement::PlacementValidator;
use crate::systems;
use crate::systems::wave_spawner::WaveScheduler;
use crate::world_setup::IdAllocator;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub starting_money: u32,
    pub starting_lives: u32,
    /// Enemy path, at least two points.
    pub waypoints: Vec<Position>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_money: STARTING_MONEY,
            starting_lives: STARTING_LIVES,
            waypoints: Path::default_waypoints(),
        }
    }
}

impl SimConfig {
    /// Check the config and build its path.
    pub fn build_path(&self) -> Result<Path, ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(Path::new(self.waypoints.clone())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_path().map(|_| ())
    }
}

/// What a click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Placed(TowerId),
    Upgraded { tower_id: TowerId, level: u32 },
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine<R = ChaCha8Rng> {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: R,
    path: Path,
    placement: PlacementValidator,
    ledger: EconomyLedger,
    waves: WaveScheduler,
    ids: IdAllocator,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create a new simulation engine with an RNG seeded from the config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create an engine driven by the given random source (enemy kind rolls).
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        let path = config.build_path()?;
        let placement = PlacementValidator::new(&path);
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            path,
            placement,
            ledger: EconomyLedger::new(config.starting_money, config.starting_lives),
            waves: WaveScheduler::default(),
            ids: IdAllocator::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the game is over, ticks no longer mutate anything.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.ledger,
            &self.waves,
            events,
        )
    }

    /// Current state without advancing. Pending events are included but not drained.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.ledger,
            &self.waves,
            self.events.clone(),
        )
    }

    /// Build a tower at `(x, y)` for `TOWER_COST`.
    pub fn place_tower(&mut self, x: f64, y: f64) -> Result<TowerId, CommandError> {
        self.ensure_not_over()?;
        if !self.ledger.can_afford(TOWER_COST) {
            return Err(CommandError::InsufficientFunds {
                cost: TOWER_COST,
                available: self.ledger.money(),
            });
        }
        if !self.placement.is_valid_placement(x, y) {
            return Err(CommandError::InvalidPlacement { x, y });
        }
        self.ledger.spend(TOWER_COST)?;

        let position = Position::new(x, y);
        let tower_id = systems::fire_control::place(&mut self.world, &mut self.ids, position);
        log::info!("Tower {} placed at ({:.0}, {:.0})", tower_id, x, y);
        self.events.push(GameEvent::TowerPlaced { tower_id, position });
        Ok(tower_id)
    }

    /// Upgrade a tower for `UPGRADE_COST`. Returns the new level.
    pub fn upgrade_tower(&mut self, tower_id: TowerId) -> Result<u32, CommandError> {
        self.ensure_not_over()?;
        if systems::fire_control::find(&self.world, tower_id).is_none() {
            return Err(CommandError::UnknownTower(tower_id));
        }
        self.ledger.spend(UPGRADE_COST)?;

        let Some(tower) = systems::fire_control::upgrade(&mut self.world, tower_id) else {
            self.ledger.earn(UPGRADE_COST);
            return Err(CommandError::UnknownTower(tower_id));
        };

        log::info!(
            "Tower {} upgraded to level {}: range = {}, fires every {} ticks",
            tower_id,
            tower.level,
            tower.range,
            tower.fire_delay
        );
        self.events.push(GameEvent::TowerUpgraded {
            tower_id,
            level: tower.level,
            range: tower.range,
            fire_delay: tower.fire_delay,
        });
        Ok(tower.level)
    }

    /// A pointer press: upgrades the tower under the pointer if there is one,
    /// otherwise tries to build at the point. A click on a tower never builds.
    pub fn click(&mut self, x: f64, y: f64) -> Result<ClickOutcome, CommandError> {
        self.ensure_not_over()?;
        let point = Position::new(x, y);
        match systems::fire_control::tower_at(&self.world, point, TOWER_CLICK_RADIUS) {
            Some(tower_id) => {
                let level = self.upgrade_tower(tower_id)?;
                Ok(ClickOutcome::Upgraded { tower_id, level })
            }
            None => self.place_tower(x, y).map(ClickOutcome::Placed),
        }
    }

    pub fn money(&self) -> u32 {
        self.ledger.money()
    }

    pub fn lives(&self) -> u32 {
        self.ledger.lives()
    }

    pub fn wave_number(&self) -> u32 {
        self.waves.wave_number()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn waves(&self) -> &WaveScheduler {
        &self.waves
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn ensure_not_over(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::GameOver {
            return Err(CommandError::GameOver);
        }
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let result = match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
            PlayerCommand::PlaceTower { x, y } => self.place_tower(x, y).map(|_| ()),
            PlayerCommand::UpgradeTower { tower_id } => self.upgrade_tower(tower_id).map(|_| ()),
            PlayerCommand::Click { x, y } => self.click(x, y).map(|_| ()),
        };

        if let Err(reason) = result {
            log::debug!("Command {:?} rejected: {}", command, reason);
            self.events
                .push(GameEvent::CommandRejected { command, reason });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;

        // 1. Release due wave spawns
        systems::wave_spawner::spawn_due(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            &mut self.ids,
            &self.path,
            tick,
            &mut self.events,
        );
        // 2. Enemy motion and leaks
        systems::enemies::advance(&mut self.world, &self.path, &mut self.ledger, &mut self.events);
        if self.ledger.is_game_over() {
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
            self.enter_game_over();
            return;
        }
        // 3. Tower cooldowns, targeting, firing
        systems::fire_control::run(&mut self.world, &mut self.ids, &mut self.events);
        // 4. Projectile homing and impacts
        systems::intercept::run(&mut self.world, &mut self.ledger, &mut self.events);
        // 5. Orphaned projectiles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Next wave once the field is clear
        systems::wave_spawner::observe(&self.world, &mut self.waves, tick, &mut self.events);
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let wave = self.waves.wave_number();
        log::warn!("Game over on wave {}", wave);
        self.events.push(GameEvent::GameOver { wave });
    }
}
