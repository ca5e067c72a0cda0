use serde::{Deserialize, Serialize};

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Right and down neighbours that fall inside a `size` board.
    pub fn forward_neighbours(self, size: usize) -> impl Iterator<Item = Position> {
        let right = (self.col + 1 < size).then(|| Position::new(self.row, self.col + 1));
        let down = (self.row + 1 < size).then(|| Position::new(self.row + 1, self.col));
        right.into_iter().chain(down)
    }
}

/// Cells of line `index` (a column for up/down, a row for left/right),
/// starting at the edge tiles travel toward.
pub fn line(direction: Direction, size: usize, index: usize) -> Vec<Position> {
    let steps: Box<dyn Iterator<Item = usize>> = match direction {
        Direction::Up | Direction::Left => Box::new(0..size),
        Direction::Down | Direction::Right => Box::new((0..size).rev()),
    };
    if direction.is_vertical() {
        steps.map(|row| Position::new(row, index)).collect()
    } else {
        steps.map(|col| Position::new(index, col)).collect()
    }
}

pub fn lines(direction: Direction, size: usize) -> impl Iterator<Item = Vec<Position>> {
    (0..size).map(move |index| line(direction, size, index))
}

pub fn iter_positions(size: usize) -> impl Iterator<Item = Position> {
    (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_start_at_leading_edge() {
        assert_eq!(
            line(Direction::Left, 3, 1),
            vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );
        assert_eq!(
            line(Direction::Right, 3, 1),
            vec![Position::new(1, 2), Position::new(1, 1), Position::new(1, 0)]
        );
        assert_eq!(
            line(Direction::Up, 3, 2),
            vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
        assert_eq!(
            line(Direction::Down, 3, 0),
            vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)]
        );
    }

    #[test]
    fn lines_cover_board_once() {
        for d in Direction::ALL {
            let mut all: Vec<_> = lines(d, 4).flatten().collect();
            all.sort();
            let expected: Vec<_> = iter_positions(4).collect();
            assert_eq!(all, expected);
        }
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        assert_eq!(Position::new(0, 0).forward_neighbours(2).count(), 2);
        assert_eq!(Position::new(0, 1).forward_neighbours(2).count(), 1);
        assert_eq!(Position::new(1, 1).forward_neighbours(2).count(), 0);
    }
}
