use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::{GameError, Result};
use crate::movement::Move;
use crate::rng::TileRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
	InProgress,
	Over,
}

/// A single game: the board plus everything that evolves with it.
#[derive(Debug, Clone)]
pub struct Game {
	board: Board,
	config: GameConfig,
	rng: TileRng,
	status: GameStatus,
	score: u64,
	moves: u32,
	won: bool,
}

impl Game {
	pub fn new(config: GameConfig) -> Result<Self> {
		Self::with_rng(config, TileRng::from_entropy())
	}

	pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
		Self::with_rng(config, TileRng::new(seed))
	}

	pub fn with_rng(config: GameConfig, rng: TileRng) -> Result<Self> {
		config.validate()?;
		let mut game = Self {
			board: Board::new(config.size),
			config,
			rng,
			status: GameStatus::InProgress,
			score: 0,
			moves: 0,
			won: false,
		};
		game.place_initial_tiles()?;
		Ok(game)
	}

	/// Resume from a fixed position. The board's size overrides `config.size`;
	/// `initial_tiles` is ignored.
	pub fn from_board(board: Board, config: GameConfig, rng: TileRng) -> Result<Self> {
		let config = GameConfig { size: board.size(), ..config };
		config.validate()?;
		let mut game = Self {
			board,
			config,
			rng,
			status: GameStatus::InProgress,
			score: 0,
			moves: 0,
			won: false,
		};
		game.refresh_status();
		Ok(game)
	}

	/// Start over on an empty board, keeping the config and the random stream.
	pub fn reset(&mut self) -> Result<()> {
		self.board = Board::new(self.config.size);
		self.status = GameStatus::InProgress;
		self.score = 0;
		self.moves = 0;
		self.won = false;
		self.place_initial_tiles()
	}

	fn place_initial_tiles(&mut self) -> Result<()> {
		for _ in 0..self.config.initial_tiles {
			self.board.spawn_random(&mut self.rng, self.config.four_probability)?;
		}
		self.refresh_status();
		Ok(())
	}

	fn refresh_status(&mut self) {
		if !self.won && self.board.max_tile().is_some_and(|v| v >= self.config.win_value) {
			self.won = true;
			info!("reached {} after {} moves", self.config.win_value, self.moves);
		}
		if self.status == GameStatus::InProgress && self.board.is_over() {
			self.status = GameStatus::Over;
			info!("game over: score {} after {} moves", self.score, self.moves);
		}
	}

	/// Shift, merge and spawn. A direction that moves nothing returns an empty
	/// list and leaves the board untouched.
	pub fn play(&mut self, direction: Direction) -> Result<Vec<Move>> {
		if self.status == GameStatus::Over {
			return Err(GameError::GameOver);
		}
		let shift = self.board.shift(direction);
		if !shift.changed() {
			debug!("{} changed nothing", direction);
			return Ok(shift.moves);
		}
		let spawned = self.board.spawn_random(&mut self.rng, self.config.four_probability)?;
		self.score += shift.points;
		self.moves += 1;
		debug!(
			"{}: {} tiles moved, {} merges, spawned at ({},{})",
			direction,
			shift.moves.len(),
			shift.merges,
			spawned.row,
			spawned.col
		);
		self.refresh_status();
		Ok(shift.moves)
	}

	/// Parse `name` as a direction, then play it. A bad name never touches the board.
	pub fn play_named(&mut self, name: &str) -> Result<Vec<Move>> {
		let direction: Direction = name.parse()?;
		self.play(direction)
	}

	pub fn is_over(&self) -> bool {
		self.status == GameStatus::Over
	}

	pub fn status(&self) -> GameStatus {
		self.status
	}

	/// Set once any tile reaches the configured win value. Play goes on.
	pub fn has_won(&self) -> bool {
		self.won
	}

	pub fn legal_directions(&self) -> Vec<Direction> {
		if self.is_over() {
			return Vec::new();
		}
		Direction::ALL.into_iter().filter(|&d| self.board.can_move(d)).collect()
	}

	pub fn board(&self) -> &Board {
		&self.board
	}

	pub fn config(&self) -> &GameConfig {
		&self.config
	}

	pub fn score(&self) -> u64 {
		self.score
	}

	/// Successful plays so far (no-ops are not counted).
	pub fn moves(&self) -> u32 {
		self.moves
	}

	pub fn seed(&self) -> u64 {
		self.rng.seed()
	}
}
