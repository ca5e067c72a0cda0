use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A numbered tile. The value is always a power of two >= 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tile(u32);

impl Tile {
	pub const TWO: Tile = Tile(2);
	pub const FOUR: Tile = Tile(4);
	/// Largest power of two a `u32` holds. Two of these never merge.
	pub const MAX: Tile = Tile(1 << 31);

	pub fn new(value: u32) -> Result<Self, GameError> {
		if value >= 2 && value.is_power_of_two() {
			Ok(Tile(value))
		} else {
			Err(GameError::InvalidTile(value))
		}
	}

	pub fn value(self) -> u32 {
		self.0
	}

	/// log2 of the value: 1 for a 2, 11 for a 2048.
	pub fn exponent(self) -> u32 {
		self.0.trailing_zeros()
	}

	/// `None` for `Tile::MAX`, whose double does not fit.
	pub fn doubled(self) -> Option<Tile> {
		self.0.checked_mul(2).map(Tile)
	}

	pub fn can_merge_with(self, other: Tile) -> bool {
		self == other && self != Tile::MAX
	}
}

impl TryFrom<u32> for Tile {
	type Error = GameError;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Tile::new(value)
	}
}

impl From<Tile> for u32 {
	fn from(t: Tile) -> u32 {
		t.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_powers_of_two() {
		assert!(Tile::new(2).is_ok());
		assert!(Tile::new(2048).is_ok());
		assert!(matches!(Tile::new(0), Err(GameError::InvalidTile(0))));
		assert!(Tile::new(1).is_err());
		assert!(Tile::new(6).is_err());
	}

	#[test]
	fn doubling_and_exponent() {
		assert_eq!(Tile::TWO.doubled(), Some(Tile::FOUR));
		assert_eq!(Tile::new(2048).unwrap().exponent(), 11);
		assert_eq!(Tile::TWO.exponent(), 1);
	}

	#[test]
	fn top_of_range_does_not_double() {
		let top = Tile::new(1 << 31).unwrap();
		assert_eq!(top, Tile::MAX);
		assert_eq!(top.doubled(), None);
		assert!(!top.can_merge_with(top));
		let below = Tile::new(1 << 30).unwrap();
		assert_eq!(below.doubled(), Some(Tile::MAX));
		assert!(below.can_merge_with(below));
		assert!(!below.can_merge_with(Tile::MAX));
	}

	#[test]
	fn serde_rejects_bad_values() {
		assert_eq!(serde_json::to_string(&Tile::FOUR).unwrap(), "4");
		assert!(serde_json::from_str::<Tile>("3").is_err());
		assert_eq!(serde_json::from_str::<Tile>("8").unwrap().value(), 8);
	}
}
