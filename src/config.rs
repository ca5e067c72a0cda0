use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Largest board side accepted by `validate`.
pub const MAX_SIZE: usize = 64;

/// Tunables for a game. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub size: usize,
    /// Tiles placed when a game starts or resets
    pub initial_tiles: usize,
    /// Chance that a spawned tile is a 4 instead of a 2
    pub four_probability: f64,
    /// Tile value that marks the game as won (play may continue)
    pub win_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            initial_tiles: 2,
            four_probability: 0.1,
            win_value: 2048,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SIZE).contains(&self.size) {
            return Err(GameError::InvalidConfig(format!(
                "size must be in 2..={}, got {}",
                MAX_SIZE, self.size
            )));
        }
        let cells = self.size.checked_mul(self.size).ok_or_else(|| {
            GameError::InvalidConfig(format!("size {} overflows the cell count", self.size))
        })?;
        if self.initial_tiles == 0 || self.initial_tiles > cells {
            return Err(GameError::InvalidConfig(format!(
                "initial_tiles must be in 1..={}, got {}",
                cells, self.initial_tiles
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidConfig(format!(
                "four_probability must be in [0, 1], got {}",
                self.four_probability
            )));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(GameError::InvalidConfig(format!(
                "win_value must be a power of two >= 4, got {}",
                self.win_value
            )));
        }
        Ok(())
    }
}
