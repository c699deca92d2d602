//! Runner configuration and the command type sent to the game loop thread.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use pathwarden_core::commands::PlayerCommand;
use pathwarden_core::types::Position;
use pathwarden_sim::engine::SimConfig;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Runner configuration, loaded from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Speed multiplier over real time. 2.0 runs ticks twice as fast.
    pub time_scale: f64,
    /// Stop after this many loop iterations.
    pub max_ticks: Option<u64>,
    /// Towers to build before the first tick, in order.
    pub placements: Vec<Position>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            time_scale: 1.0,
            max_ticks: None,
            placements: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.sim.validate()?;
        if !(config.time_scale.is_finite() && config.time_scale > 0.0) {
            anyhow::bail!("time_scale must be positive, got {}", config.time_scale);
        }
        Ok(config)
    }

    /// Scripted placements as queued player commands.
    pub fn placement_commands(&self) -> impl Iterator<Item = PlayerCommand> + '_ {
        self.placements
            .iter()
            .map(|p| PlayerCommand::PlaceTower { x: p.x, y: p.y })
    }
}
