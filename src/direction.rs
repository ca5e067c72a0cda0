use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A direction to shift every tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Up,
	Down,
	Left,
	Right,
}

impl Direction {
	pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

	pub fn name(self) -> &'static str {
		match self {
			Direction::Up => "up",
			Direction::Down => "down",
			Direction::Left => "left",
			Direction::Right => "right",
		}
	}

	/// Up and down shift columns; left and right shift rows.
	pub fn is_vertical(self) -> bool {
		matches!(self, Direction::Up | Direction::Down)
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Direction {
	type Err = GameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"up" | "w" => Ok(Direction::Up),
			"down" | "s" => Ok(Direction::Down),
			"left" | "a" => Ok(Direction::Left),
			"right" | "d" => Ok(Direction::Right),
			_ => Err(GameError::InvalidDirection(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_names_and_keys() {
		assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
		assert_eq!(" Left ".parse::<Direction>().unwrap(), Direction::Left);
		assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
		assert_eq!("s".parse::<Direction>().unwrap(), Direction::Down);
	}

	#[test]
	fn rejects_unknown() {
		match "north".parse::<Direction>() {
			Err(GameError::InvalidDirection(s)) => assert_eq!(s, "north"),
			other => panic!("unexpected {:?}", other),
		}
		assert!("".parse::<Direction>().is_err());
	}

	#[test]
	fn display_roundtrips_through_parse() {
		for d in Direction::ALL {
			assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
		}
	}

	#[test]
	fn serde_uses_lowercase_names() {
		assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
	}
}
