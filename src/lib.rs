pub mod board;
pub mod config;
pub mod coords;
pub mod direction;
pub mod engine;
pub mod error;
pub mod movement;
pub mod render;
pub mod rng;
pub mod tile;

// Re-exports for convenience in tests and integration users.
pub use board::{Board, Shift};
pub use config::GameConfig;
pub use coords::Position;
pub use direction::Direction;
pub use engine::{Game, GameStatus};
pub use error::GameError;
pub use movement::Move;
pub use render::{format_board, format_status};
pub use rng::TileRng;
pub use tile::Tile;
