//! Wave scheduling system: escalates waves and releases staggered spawns.
//!
//! Idle until the enemy registry is empty with nothing pending, then each
//! wave raises the enemy count by 2 and base health by 1 and schedules one
//! spawn every `SPAWN_STAGGER_TICKS`. Spawn timers are plain due-tick
//! counters released in the order they were scheduled.

use std::collections::VecDeque;

use hecs::World;
use rand::Rng;

use pathwarden_core::constants::*;
use pathwarden_core::enums::WavePhase;
use pathwarden_core::events::GameEvent;
use pathwarden_core::state::WaveView;

use crate::path::Path;
use crate::systems::enemies;
use crate::world_setup::IdAllocator;

/// Escalation state and pending spawn timers.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveScheduler {
    wave_number: u32,
    enemies_per_wave: u32,
    base_health: u32,
    /// Due ticks of spawns not yet released, oldest first.
    pending: VecDeque<u64>,
}

impl Default for WaveScheduler {
    fn default() -> Self {
        Self {
            wave_number: 0,
            enemies_per_wave: INITIAL_ENEMIES_PER_WAVE,
            base_health: INITIAL_BASE_HEALTH,
            pending: VecDeque::new(),
        }
    }
}

impl WaveScheduler {
    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    pub fn enemies_per_wave(&self) -> u32 {
        self.enemies_per_wave
    }

    pub fn base_health(&self) -> u32 {
        self.base_health
    }

    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    pub fn phase(&self) -> WavePhase {
        if self.pending.is_empty() {
            WavePhase::Idle
        } else {
            WavePhase::Spawning
        }
    }

    /// Escalate and schedule the next wave. Spawn `i` is due `i` staggers
    /// after the tick following `current_tick`.
    pub fn start_wave(&mut self, current_tick: u64) -> GameEvent {
        self.wave_number += 1;
        self.enemies_per_wave += ENEMIES_PER_WAVE_STEP;
        self.base_health += BASE_HEALTH_STEP;

        let first_due = current_tick + 1;
        self.pending.extend(
            (0..self.enemies_per_wave as u64).map(|i| first_due + i * SPAWN_STAGGER_TICKS),
        );

        GameEvent::WaveStarted {
            wave: self.wave_number,
            enemy_count: self.enemies_per_wave,
            base_health: self.base_health,
        }
    }

    /// Pop every spawn due at or before `current_tick`. Returns how many.
    pub fn take_due(&mut self, current_tick: u64) -> u32 {
        let mut due = 0;
        while self.pending.front().is_some_and(|&t| t <= current_tick) {
            self.pending.pop_front();
            due += 1;
        }
        due
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            number: self.wave_number,
            enemies_per_wave: self.enemies_per_wave,
            base_health: self.base_health,
            pending_spawns: self.pending.len() as u32,
            phase: self.phase(),
        }
    }
}

/// Release spawns that have come due this tick.
pub fn spawn_due<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    scheduler: &mut WaveScheduler,
    ids: &mut IdAllocator,
    path: &Path,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    for _ in 0..scheduler.take_due(current_tick) {
        enemies::spawn_rolled(world, rng, ids, path, scheduler.base_health, events);
    }
}

/// Start the next wave once the field is clear and nothing is pending.
pub fn observe(
    world: &World,
    scheduler: &mut WaveScheduler,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    if scheduler.phase() != WavePhase::Idle || enemies::count(world) > 0 {
        return;
    }

    let event = scheduler.start_wave(current_tick);
    log::info!(
        "Wave {} started: {} enemies, base health {}",
        scheduler.wave_number,
        scheduler.enemies_per_wave,
        scheduler.base_health
    );
    events.push(event);
}
