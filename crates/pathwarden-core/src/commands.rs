//! Player commands sent from the shell to the simulation.
//!
//! Commands are either applied immediately through the engine's request
//! methods or queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::TowerId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Build a tower at an arena point.
    PlaceTower { x: f64, y: f64 },
    /// Upgrade an existing tower by one level.
    UpgradeTower { tower_id: TowerId },
    /// A raw pointer press: upgrades a tower under the pointer, otherwise places one.
    Click { x: f64, y: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
