//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built on the caller's thread so config errors surface before
//! anything is spawned, then moved into the loop. Commands arrive via `mpsc`
//! channel. Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;

use pathwarden_core::constants::TICK_RATE;
use pathwarden_core::enums::GamePhase;
use pathwarden_core::state::GameStateSnapshot;
use pathwarden_sim::engine::SimulationEngine;

use crate::state::{AppConfig, GameLoopCommand};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// The HUD values worth logging when they change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hud {
    money: u32,
    lives: u32,
    wave: u32,
}

impl Hud {
    fn of(snapshot: &GameStateSnapshot) -> Self {
        Self {
            money: snapshot.money,
            lives: snapshot.lives,
            wave: snapshot.wave.number,
        }
    }
}

/// Tick pacing for a given speed multiplier.
fn tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

/// Spawns the game loop in a new thread.
///
/// Scripted placements from the config are queued ahead of the first tick.
/// The join handle yields the last snapshot produced.
pub fn spawn_game_loop(
    config: AppConfig,
) -> anyhow::Result<(
    mpsc::Sender<GameLoopCommand>,
    Arc<Mutex<Option<GameStateSnapshot>>>,
    JoinHandle<Option<GameStateSnapshot>>,
)> {
    let mut engine = SimulationEngine::new(config.sim.clone())?;
    engine.queue_commands(config.placement_commands());

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("pathwarden-game-loop".into())
        .spawn(move || run_game_loop(engine, &config, cmd_rx, &shared))
        .context("spawning game loop thread")?;

    Ok((cmd_tx, latest_snapshot, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, game over, or `max_ticks`.
fn run_game_loop(
    mut engine: SimulationEngine,
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> Option<GameStateSnapshot> {
    let step = tick_duration(config.time_scale);
    let mut next_tick_time = Instant::now();
    let mut last: Option<GameStateSnapshot> = None;
    let mut hud: Option<Hud> = None;
    let mut ticks: u64 = 0;

    loop {
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("Reached {} ticks, stopping", ticks);
            return last;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return last;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        ticks += 1;

        // 3. Log HUD changes
        let current = Hud::of(&snapshot);
        if hud != Some(current) {
            log::info!(
                "Money: {}  Lives: {}  Wave: {}",
                current.money,
                current.lives,
                current.wave
            );
            hud = Some(current);
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        let over = snapshot.phase == GamePhase::GameOver;
        last = Some(snapshot);
        if over {
            return last;
        }

        // 5. Sleep until next tick
        next_tick_time += step;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > step * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
