//! Spawner - places new tiles on empty cells and removes random ones

use crate::grid::Grid;
use crate::rng::TileRng;
use crate::types::{Pos, SpawnEvent, SpawnPolicy, Tile};

/// Insert a tile according to `policy`.
///
/// Returns None when the grid is full, or when the policy's spawn roll fails.
/// The cell is uniform over empty cells.
pub fn spawn(
    grid: &mut Grid,
    rng: &mut TileRng,
    policy: SpawnPolicy,
    now_ms: u64,
) -> Option<SpawnEvent> {
    if grid.empty_cells().is_empty() {
        return None;
    }
    if !rng.chance(policy.spawn_chance()) {
        return None;
    }
    spawn_tile(grid, rng, policy, now_ms)
}

/// Insert a tile whenever an empty cell exists, ignoring the spawn roll.
///
/// Used for the opening tiles of a new game.
pub fn spawn_tile(
    grid: &mut Grid,
    rng: &mut TileRng,
    policy: SpawnPolicy,
    now_ms: u64,
) -> Option<SpawnEvent> {
    let empty = grid.empty_cells();
    let pos = rng.pick(&empty)?;
    let value: Tile = if rng.chance(policy.two_chance()) { 2 } else { 4 };
    grid.set(pos, value);
    Some(SpawnEvent {
        pos,
        value,
        created_at_ms: now_ms,
    })
}

/// Clear one uniformly chosen occupied cell. Returns the cleared position.
pub fn remove_random_tile(grid: &mut Grid, rng: &mut TileRng) -> Option<Pos> {
    let occupied = grid.occupied_cells();
    let pos = rng.pick(&occupied)?;
    grid.set(pos, 0);
    Some(pos)
}
