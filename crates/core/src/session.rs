//! Session state - grid, undo history, score, move count and play time
//!
//! Every mutating operation here is one atomic unit: the grid change, the
//! spawn and the history push happen inside a single `&mut self` call, so no
//! caller can observe a grid that history has not caught up with.

use arrayvec::ArrayVec;

use crate::grid::{Grid, CELL_COUNT};
use crate::history::History;
use crate::moves::{apply_move, MoveOutcome};
use crate::rng::TileRng;
use crate::shuffle::shuffle;
use crate::snapshot::SessionSnapshot;
use crate::spawner::{remove_random_tile, spawn, spawn_tile};
use crate::types::{Direction, Pos, SpawnEvent, SpawnPolicy, TileEvent};

/// Number of tiles placed when a game starts
pub const OPENING_TILES: usize = 2;

/// Result of one move request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Turn {
    pub outcome: MoveOutcome,
    /// Tile added after an accepted move, if the policy spawned one.
    pub spawn: Option<SpawnEvent>,
}

impl Turn {
    pub fn changed(&self) -> bool {
        self.outcome.changed
    }

    /// Merges, then shifts, then the spawn.
    pub fn events(&self) -> impl Iterator<Item = TileEvent> + '_ {
        self.outcome
            .events()
            .chain(self.spawn.map(TileEvent::from))
    }
}

/// Complete persisted game state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    grid: Grid,
    history: History,
    score: u64,
    moves: u64,
    accumulated_secs: f64,
}

impl SessionState {
    /// Start a fresh game: empty grid, two opening tiles, history holding
    /// the opening grid.
    pub fn new_game(
        rng: &mut TileRng,
        policy: SpawnPolicy,
        now_ms: u64,
    ) -> (Self, ArrayVec<SpawnEvent, OPENING_TILES>) {
        let mut grid = Grid::new();
        let mut spawned = ArrayVec::new();
        for _ in 0..OPENING_TILES {
            if let Some(ev) = spawn_tile(&mut grid, rng, policy, now_ms) {
                spawned.push(ev);
            }
        }

        let state = Self {
            grid,
            history: History::starting_at(grid),
            score: 0,
            moves: 0,
            accumulated_secs: 0.0,
        };
        (state, spawned)
    }

    /// Rebuild a session from stored parts.
    ///
    /// If the newest history entry does not match `grid` the grid is pushed,
    /// restoring the "newest snapshot is the live grid" invariant.
    pub fn from_parts(
        grid: Grid,
        history: History,
        score: u64,
        moves: u64,
        accumulated_secs: f64,
    ) -> Self {
        let mut history = history;
        if history.latest() != Some(&grid) {
            history.push(grid);
        }
        Self {
            grid,
            history,
            score,
            moves,
            accumulated_secs: accumulated_secs.max(0.0),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Play time banked so far, in seconds
    pub fn accumulated_secs(&self) -> f64 {
        self.accumulated_secs
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn is_game_over(&self) -> bool {
        !self.grid.can_move()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Bank `secs` of play time. Negative or non-finite values are ignored.
    pub fn add_play_time(&mut self, secs: f64) {
        if secs.is_finite() && secs > 0.0 {
            self.accumulated_secs += secs;
        }
    }

    /// Move every tile in `direction`.
    ///
    /// On change: score and move count advance, one tile spawns per `policy`,
    /// and the resulting grid is pushed to history. On no change nothing else
    /// happens.
    pub fn apply_move(
        &mut self,
        direction: Direction,
        rng: &mut TileRng,
        policy: SpawnPolicy,
        now_ms: u64,
    ) -> Turn {
        let outcome = apply_move(&mut self.grid, direction);
        if !outcome.changed {
            return Turn {
                outcome,
                spawn: None,
            };
        }

        self.score += outcome.score_delta as u64;
        self.moves += 1;
        let spawn = spawn(&mut self.grid, rng, policy, now_ms);
        self.history.push(self.grid);

        Turn { outcome, spawn }
    }

    /// Restore the previous snapshot. Returns false when there is none.
    ///
    /// Score and move count are kept.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.grid = previous;
                true
            }
            None => false,
        }
    }

    /// Shuffle tile values. Returns false when the grid could not change.
    ///
    /// The shuffled grid is pushed to history, so undo returns to the
    /// arrangement before the shuffle.
    pub fn shuffle(&mut self, rng: &mut TileRng) -> bool {
        let next = shuffle(&self.grid, rng);
        if next == self.grid {
            return false;
        }
        self.grid = next;
        self.history.push(self.grid);
        true
    }

    /// Clear up to `count` random tiles, pushing the result to history.
    pub fn remove_tiles(&mut self, count: usize, rng: &mut TileRng) -> ArrayVec<Pos, CELL_COUNT> {
        let mut removed = ArrayVec::new();
        for _ in 0..count.min(CELL_COUNT) {
            match remove_random_tile(&mut self.grid, rng) {
                Some(pos) => removed.push(pos),
                None => break,
            }
        }
        if !removed.is_empty() {
            self.history.push(self.grid);
        }
        removed
    }

    /// Fill `out` for the presentation layer. `playtime_secs` is supplied by
    /// the caller's clock.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot, playtime_secs: u64) {
        out.board = *self.grid.rows();
        out.score = self.score;
        out.moves = self.moves;
        out.playtime_secs = playtime_secs;
        out.history_len = self.history.len() as u8;
        out.can_undo = self.history.can_undo();
        out.max_tile = self.grid.max_tile();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self, playtime_secs: u64) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s, playtime_secs);
        s
    }
}
