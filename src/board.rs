use std::collections::BTreeMap;

use rand::Rng;

use crate::coords::{Position, iter_positions, lines};
use crate::direction::Direction;
use crate::error::{GameError, Result};
use crate::movement::Move;
use crate::rng::pick_value;
use crate::tile::Tile;

/// Outcome of shifting the whole board once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shift {
    pub moves: Vec<Move>,
    pub merges: u32,
    /// Sum of the values created by merges.
    pub points: u64,
}

impl Shift {
    pub fn changed(&self) -> bool {
        !self.moves.is_empty()
    }
}

/// Square grid of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from rows of raw values, 0 meaning empty.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidBoard("board has no rows".into()));
        }
        let mut board = Self::new(size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GameError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }
            for (col, v) in values.into_iter().enumerate() {
                if v != 0 {
                    board.set(Position::new(row, col), Tile::new(v)?)?;
                }
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, p: Position) -> Option<usize> {
        if p.row >= self.size || p.col >= self.size {
            return None;
        }
        Some(p.row * self.size + p.col)
    }

    fn checked_index(&self, p: Position) -> Result<usize> {
        self.index(p).ok_or(GameError::OutOfBounds {
            row: p.row,
            col: p.col,
            size: self.size,
        })
    }

    pub fn get(&self, p: Position) -> Result<Option<Tile>> {
        self.checked_index(p).map(|i| self.cells[i])
    }

    /// Value at `(row, col)`; `None` for an empty or out-of-range cell.
    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        self.index(Position::new(row, col))
            .and_then(|i| self.cells[i])
            .map(Tile::value)
    }

    pub fn set(&mut self, p: Position, tile: Tile) -> Result<()> {
        let i = self.checked_index(p)?;
        self.cells[i] = Some(tile);
        Ok(())
    }

    pub fn clear(&mut self, p: Position) -> Result<Option<Tile>> {
        let i = self.checked_index(p)?;
        Ok(self.cells[i].take())
    }

    pub fn rows(&self) -> Vec<Vec<Option<u32>>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.map(Tile::value)).collect())
            .collect()
    }

    /// Occupied cells only.
    pub fn tiles(&self) -> BTreeMap<Position, u32> {
        iter_positions(self.size)
            .filter_map(|p| self.value_at(p.row, p.col).map(|v| (p, v)))
            .collect()
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        iter_positions(self.size)
            .filter(|&p| self.value_at(p.row, p.col).is_none())
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().flatten().map(|t| t.value()).max()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn tile_at(&self, p: Position) -> Option<Tile> {
        self.index(p).and_then(|i| self.cells[i])
    }

    fn has_mergeable_neighbours(&self) -> bool {
        iter_positions(self.size).any(|p| {
            self.tile_at(p).is_some_and(|here| {
                p.forward_neighbours(self.size)
                    .filter_map(|n| self.tile_at(n))
                    .any(|there| here.can_merge_with(there))
            })
        })
    }

    /// No empty cell and no two orthogonal neighbours that could merge.
    pub fn is_over(&self) -> bool {
        self.is_full() && !self.has_mergeable_neighbours()
    }

    pub fn has_moves(&self) -> bool {
        !self.is_over()
    }

    /// Whether shifting in `direction` would change anything. Does not mutate.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.clone().shift(direction).changed()
    }

    /// Slide every line toward the edge `direction` points at, merging equal
    /// neighbours once each.
    pub fn shift(&mut self, direction: Direction) -> Shift {
        let mut out = Shift::default();
        for cells in lines(direction, self.size) {
            self.shift_line(&cells, &mut out);
        }
        out
    }

    // `cells` runs from the leading edge backward. Tiles are packed into the
    // front of the line in scan order; a tile equal to the last packed tile
    // that has not merged yet is absorbed into it instead.
    fn shift_line(&mut self, cells: &[Position], out: &mut Shift) {
        struct Packed {
            tile: Tile,
            merged: bool,
            record: Option<usize>,
        }

        let mut packed: Vec<Packed> = Vec::with_capacity(cells.len());
        for &from in cells {
            let Some(tile) = self.tile_at(from) else {
                continue;
            };
            let doubled = match packed.last() {
                Some(last) if !last.merged && last.tile.can_merge_with(tile) => tile.doubled(),
                _ => None,
            };
            if let Some(doubled) = doubled {
                let slot = packed.len() - 1;
                let survivor = &mut packed[slot];
                survivor.tile = doubled;
                survivor.merged = true;
                let value = survivor.tile.value();
                if let Some(r) = survivor.record {
                    out.moves[r].value = value;
                }
                out.moves.push(Move {
                    from,
                    to: cells[slot],
                    merged: true,
                    value,
                });
                out.merges += 1;
                out.points += u64::from(value);
            } else {
                let to = cells[packed.len()];
                let record = (to != from).then(|| {
                    out.moves.push(Move {
                        from,
                        to,
                        merged: false,
                        value: tile.value(),
                    });
                    out.moves.len() - 1
                });
                packed.push(Packed {
                    tile,
                    merged: false,
                    record,
                });
            }
        }

        for (k, &p) in cells.iter().enumerate() {
            if let Some(i) = self.index(p) {
                self.cells[i] = packed.get(k).map(|pk| pk.tile);
            }
        }
    }

    /// Drop a 2 (or a 4, with `four_probability`) on a uniformly chosen
    /// empty cell.
    pub fn spawn_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        four_probability: f64,
    ) -> Result<Position> {
        let empty = self.empty_positions();
        if empty.is_empty() {
            return Err(GameError::NoEmptyCell);
        }
        let at = empty[rng.gen_range(0..empty.len())];
        let tile = pick_value(rng, four_probability);
        self.set(at, tile)?;
        Ok(at)
    }
}
