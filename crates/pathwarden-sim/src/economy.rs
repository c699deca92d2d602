//! Money and lives bookkeeping.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Money never goes
//! negative: every spend is gated by an affordability check before mutation.

use serde::{Deserialize, Serialize};

use pathwarden_core::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyLedger {
    money: u32,
    lives: u32,
    game_over: bool,
}

impl EconomyLedger {
    pub fn new(money: u32, lives: u32) -> Self {
        Self {
            money,
            lives,
            game_over: lives == 0,
        }
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// True once lives have reached zero. Never resets.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.money >= cost
    }

    /// Deduct `cost`, or leave money untouched if it is not affordable.
    pub fn spend(&mut self, cost: u32) -> Result<(), CommandError> {
        if !self.can_afford(cost) {
            return Err(CommandError::InsufficientFunds {
                cost,
                available: self.money,
            });
        }
        self.money -= cost;
        Ok(())
    }

    pub fn earn(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Take one life. Returns true if this raised the game-over flag.
    pub fn lose_life(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            return true;
        }
        false
    }
}
