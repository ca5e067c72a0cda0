use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::Position;

/// How one tile travelled during a single play.
///
/// `value` is what sits at `to` once the play completes, so for a merge it is
/// the doubled value. The tile that gets absorbed carries `merged = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
	pub from: Position,
	pub to: Position,
	pub merged: bool,
	pub value: u32,
}

impl Move {
	pub fn distance(&self) -> usize {
		self.from.row.abs_diff(self.to.row) + self.from.col.abs_diff(self.to.col)
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({},{}) -> ({},{})",
			self.from.row, self.from.col, self.to.row, self.to.col
		)?;
		if self.merged {
			write!(f, " merged into {}", self.value)?;
		}
		Ok(())
	}
}
