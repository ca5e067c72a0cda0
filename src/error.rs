use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
	#[error("Invalid direction: {0:?} (expected up, down, left or right)")]
	InvalidDirection(String),
	#[error("Game is over")]
	GameOver,
	#[error("Invalid tile value: {0} (must be a power of two >= 2)")]
	InvalidTile(u32),
	#[error("Position ({row},{col}) is outside a {size}x{size} board")]
	OutOfBounds { row: usize, col: usize, size: usize },
	#[error("Invalid board: {0}")]
	InvalidBoard(String),
	#[error("No empty cell to spawn a tile in")]
	NoEmptyCell,
	#[error("Invalid config: {0}")]
	InvalidConfig(String),
	#[error("Config parse error: {0}")]
	ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
