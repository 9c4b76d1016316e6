//! Grid module - the 4x4 tile matrix
//!
//! Tiles are stored row-major as plain integers: `0` is an empty cell, every
//! other value is a power of two starting at 2. The grid is `Copy`, so history
//! snapshots are deep copies by construction.

use arrayvec::ArrayVec;

use crate::reducer::mergeable;
use crate::types::{is_tile_value, Cells, Line, Pos, Tile, GRID_SIZE};

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The game board - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from row-major rows
    pub fn from_rows(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    /// Get the tile at `pos`. Returns None if out of bounds.
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.cells
            .get(pos.row as usize)
            .and_then(|r| r.get(pos.col as usize))
            .copied()
    }

    /// Set the tile at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, value: Tile) -> bool {
        match self
            .cells
            .get_mut(pos.row as usize)
            .and_then(|r| r.get_mut(pos.col as usize))
        {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                out.cells[c][r] = v;
            }
        }
        out
    }

    /// Iterate `(pos, value)` over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &v)| (Pos::new(r as u8, c as u8), v))
        })
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.iter().filter(|&(_, v)| v == 0).map(|(p, _)| p).collect()
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.iter().filter(|&(_, v)| v != 0).map(|(p, _)| p).collect()
    }

    pub fn tile_count(&self) -> usize {
        self.iter().filter(|&(_, v)| v != 0).count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.iter().map(|(_, v)| v as u64).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.iter().map(|(_, v)| v).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }

    /// Every cell is either empty or a power of two >= 2.
    pub fn is_well_formed(&self) -> bool {
        self.iter().all(|(_, v)| v == 0 || is_tile_value(v))
    }

    /// Whether any direction would change the grid.
    ///
    /// True when an empty cell exists or two orthogonally adjacent cells can
    /// merge.
    pub fn can_move(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.cells[r][c];
                if v == 0 {
                    return true;
                }
                if c + 1 < GRID_SIZE && mergeable(v, self.cells[r][c + 1]) {
                    return true;
                }
                if r + 1 < GRID_SIZE && mergeable(v, self.cells[r + 1][c]) {
                    return true;
                }
            }
        }
        false
    }
}

impl From<Cells> for Grid {
    fn from(cells: Cells) -> Self {
        Self::from_rows(cells)
    }
}
