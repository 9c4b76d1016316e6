//! Move engine - applies one direction to every line of the grid
//!
//! [`slide`] is pure: it returns the new grid alongside a [`MoveOutcome`].
//! [`apply_move`] writes the result back in place for callers that own a
//! mutable grid (the session).

use arrayvec::ArrayVec;

use crate::grid::{Grid, CELL_COUNT};
use crate::transform::Orientation;
use crate::types::{Direction, MergeEvent, ShiftEvent, TileEvent, GRID_SIZE};

/// Maximum merges a whole-grid move can produce
pub const MAX_MERGES: usize = CELL_COUNT / 2;

/// Everything a single move did to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one line changed.
    pub changed: bool,
    pub score_delta: u32,
    /// Merges in line order, grid coordinates.
    pub merges: ArrayVec<MergeEvent, MAX_MERGES>,
    /// Shifts in line order, grid coordinates.
    pub shifts: ArrayVec<ShiftEvent, CELL_COUNT>,
}

impl MoveOutcome {
    /// Merge events followed by shift events.
    pub fn events(&self) -> impl Iterator<Item = TileEvent> + '_ {
        self.merges
            .iter()
            .copied()
            .map(TileEvent::from)
            .chain(self.shifts.iter().copied().map(TileEvent::from))
    }
}

/// Compute the grid after moving in `direction`.
///
/// Every line is reduced and written back, including unchanged ones. The
/// outcome's `changed` flag is the OR of the per-line flags.
pub fn slide(grid: &Grid, direction: Direction) -> (Grid, MoveOutcome) {
    let orientation = Orientation::of(direction);
    let work = orientation.to_work(grid);

    let mut next = work;
    let mut outcome = MoveOutcome::default();

    for index in 0..GRID_SIZE {
        let reduced = orientation.reduce(&work.row(index), index as u8);
        next.set_row(index, reduced.line);
        outcome.changed |= reduced.changed;
        outcome.score_delta += reduced.score;
        outcome.merges.extend(reduced.merges);
        outcome.shifts.extend(reduced.shifts);
    }

    (orientation.from_work(&next), outcome)
}

/// Move `grid` in place.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let (next, outcome) = slide(grid, direction);
    *grid = next;
    outcome
}
