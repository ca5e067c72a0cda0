use crate::board::Board;
use crate::engine::{Game, GameStatus};

const MIN_CELL_WIDTH: usize = 6;

pub fn format_board(board: &Board) -> String {
	let widest = board.max_tile().map(|v| v.to_string().len()).unwrap_or(1);
	let width = MIN_CELL_WIDTH.max(widest + 2);
	let rule = format!("+{}\n", format!("{}+", "-".repeat(width)).repeat(board.size()));

	let mut out = rule.clone();
	for row in board.rows() {
		out.push('|');
		for cell in row {
			let label = cell.map(|v| v.to_string()).unwrap_or_default();
			out.push_str(&format!("{:^width$}|", label, width = width));
		}
		out.push('\n');
		out.push_str(&rule);
	}
	out
}

pub fn format_status(game: &Game) -> String {
	let state = match game.status() {
		GameStatus::Over => "Game over",
		GameStatus::InProgress if game.has_won() => "Won",
		GameStatus::InProgress => "In progress",
	};
	format!("Score: {} | Moves: {} | {}", game.score(), game.moves(), state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::GameConfig;
	use crate::rng::TileRng;

	#[test]
	fn board_format() {
		let board = Board::from_rows(vec![vec![2, 0], vec![0, 1024]]).unwrap();
		let s = format_board(&board);
		let lines: Vec<&str> = s.lines().collect();
		assert_eq!(lines.len(), 5);
		assert_eq!(lines[0], "+------+------+");
		assert_eq!(lines[1], "|  2   |      |");
		assert_eq!(lines[3], "|      | 1024 |");
	}

	#[test]
	fn wide_tiles_widen_cells() {
		let board = Board::from_rows(vec![vec![131072, 0], vec![0, 0]]).unwrap();
		let s = format_board(&board);
		assert!(s.starts_with("+--------+--------+"));
		assert!(s.contains("| 131072 |"));
	}

	#[test]
	fn status_format() {
		let board = Board::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
		let game = Game::from_board(board, GameConfig::default(), TileRng::new(0)).unwrap();
		assert_eq!(format_status(&game), "Score: 0 | Moves: 0 | Game over");

		let game = Game::with_seed(GameConfig::default(), 3).unwrap();
		assert!(format_status(&game).ends_with("In progress"));
	}
}
