//! Error types for rejected player requests and invalid configuration.
//!
//! None of these interrupt the tick loop: a rejected request leaves the
//! simulation untouched and reports why.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TowerId;

/// Why a placement or upgrade request did nothing.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum CommandError {
    #[error("insufficient funds: need {cost}, have {available}")]
    InsufficientFunds { cost: u32, available: u32 },
    #[error("position ({x:.1}, {y:.1}) is too close to the path")]
    InvalidPlacement { x: f64, y: f64 },
    #[error("no tower with id {0}")]
    UnknownTower(TowerId),
    #[error("the game is over")]
    GameOver,
}

/// Why a path could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("a path needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),
    #[error("waypoint {0} is not finite")]
    NonFiniteWaypoint(usize),
    #[error("path has zero total length")]
    ZeroLength,
}

/// Why a simulation config was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
    #[error("starting lives must be at least 1")]
    NoLives,
}
