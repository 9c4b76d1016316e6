//! Shuffle engine - redistributes tile values over the occupied cells
//!
//! Empty cells stay empty and the multiset of values is preserved. When at
//! least two distinct values exist the result always differs from the input.

use arrayvec::ArrayVec;

use crate::grid::{Grid, CELL_COUNT};
use crate::rng::TileRng;
use crate::types::Tile;

/// Return a shuffled copy of `grid`.
///
/// Fewer than two tiles, or all tiles equal, returns the grid unchanged.
/// Otherwise permutations are drawn until one differs from the input; some
/// non-identity arrangement always exists, so the loop ends with probability 1.
pub fn shuffle(grid: &Grid, rng: &mut TileRng) -> Grid {
    let positions = grid.occupied_cells();
    let mut values: ArrayVec<Tile, CELL_COUNT> = positions
        .iter()
        .filter_map(|&p| grid.get(p))
        .collect();

    if values.len() < 2 || values.iter().all(|&v| v == values[0]) {
        return *grid;
    }

    loop {
        rng.shuffle(&mut values);
        let mut next = *grid;
        for (&pos, &value) in positions.iter().zip(values.iter()) {
            next.set(pos, value);
        }
        if next != *grid {
            return next;
        }
    }
}
