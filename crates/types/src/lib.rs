//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, persistence, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid. Cells are addressed as `(row, col)` with
//! `(0, 0)` in the top-left corner.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Rows and columns of the board |
//! | `MAX_HISTORY` | 20 | Undo snapshots kept, oldest evicted first |
//! | `SHIFT_DURATION_MS` | 70 | Slide duration attached to shift events |
//! | `EFFECT_MS` | 300 | Lifetime of spawn/merge highlights |
//! | `TICK_MS` | 16 | Render tick (~60 FPS) |
//! | `WIN_TILE` | 2048 | Last milestone tile |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 board can reach |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{is_tile_value, Pos, GRID_SIZE};
//!
//! assert!(is_tile_value(2048));
//! assert!(!is_tile_value(3));
//!
//! let p = Pos::new(1, 0);
//! assert_eq!(p.mirrored(), Pos::new(1, GRID_SIZE as u8 - 1));
//! assert_eq!(p.transposed(), Pos::new(0, 1));
//! ```

/// Board side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Maximum number of grid snapshots kept for undo
pub const MAX_HISTORY: usize = 20;

/// Duration attached to every shift event (70ms)
pub const SHIFT_DURATION_MS: u32 = 70;

/// Lifetime of spawn and merge highlights in the terminal view (300ms)
pub const EFFECT_MS: u32 = 300;

/// Render tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Lifetime of a status line message (1.5s)
pub const STATUS_MS: u32 = 1500;

/// Highest milestone tile
pub const WIN_TILE: Tile = 2048;

/// Phrase that removes two random tiles when typed during play
pub const SECRET_PHRASE: &str = "mytlikelbyforever";

/// Number of tiles removed by the secret phrase
pub const SECRET_REMOVE_COUNT: usize = 2;

/// A tile value. `0` is an empty cell, anything else is a power of two >= 2.
pub type Tile = u32;

/// One row (or transposed column) of the board.
pub type Line = [Tile; GRID_SIZE];

/// Row-major board storage.
pub type Cells = [Line; GRID_SIZE];

/// Largest tile a 4x4 board can reach.
pub const MAX_TILE: Tile = 131072;

/// True when `value` is a legal occupied tile (`2^k`, `1 <= k <= 17`).
pub fn is_tile_value(value: Tile) -> bool {
    (2..=MAX_TILE).contains(&value) && value.is_power_of_two()
}

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Reflect across the vertical axis (`col' = N-1-col`).
    pub fn mirrored(self) -> Self {
        Self {
            row: self.row,
            col: GRID_SIZE as u8 - 1 - self.col,
        }
    }

    /// Swap row and column.
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions that can be applied to a session
///
/// These actions come from keyboard input; each maps to one session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile towards one edge
    Move(Direction),
    /// Restore the previous history snapshot
    Undo,
    /// Redistribute tile values over their current cells
    Shuffle,
    /// Start a new game
    Restart,
    /// Remove random tiles (secret phrase)
    RemoveTiles,
}

/// How new tiles appear after an accepted move
///
/// - **Classic**: always spawn; 2 with probability 0.9, otherwise 4
/// - **Lenient**: spawn with probability 0.8; 2 or 4 with equal odds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    #[default]
    Classic,
    Lenient,
}

impl SpawnPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(SpawnPolicy::Classic),
            "lenient" => Some(SpawnPolicy::Lenient),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Classic => "classic",
            SpawnPolicy::Lenient => "lenient",
        }
    }

    /// Probability that a spawn happens at all.
    pub fn spawn_chance(&self) -> f64 {
        match self {
            SpawnPolicy::Classic => 1.0,
            SpawnPolicy::Lenient => 0.8,
        }
    }

    /// Probability that a spawned tile is a 2 (otherwise 4).
    pub fn two_chance(&self) -> f64 {
        match self {
            SpawnPolicy::Classic => 0.9,
            SpawnPolicy::Lenient => 0.5,
        }
    }
}

/// Two equal tiles combined into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeEvent {
    /// Cell holding the merged tile.
    pub pos: Pos,
    /// Value after merging (twice the source value).
    pub value: Tile,
    /// The two tiles that merged, in scan order.
    pub sources: [Pos; 2],
}

impl MergeEvent {
    /// Apply a coordinate transform to every position in the event.
    pub fn map_pos(self, f: impl Fn(Pos) -> Pos) -> Self {
        Self {
            pos: f(self.pos),
            value: self.value,
            sources: [f(self.sources[0]), f(self.sources[1])],
        }
    }
}

/// A tile that slid to a different cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftEvent {
    pub from: Pos,
    pub to: Pos,
    /// Value of the tile while sliding (pre-merge).
    pub value: Tile,
    pub duration_ms: u32,
}

impl ShiftEvent {
    pub fn map_pos(self, f: impl Fn(Pos) -> Pos) -> Self {
        Self {
            from: f(self.from),
            to: f(self.to),
            ..self
        }
    }
}

/// A tile that just appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnEvent {
    pub pos: Pos,
    pub value: Tile,
    /// Caller-supplied timestamp (milliseconds of play time).
    pub created_at_ms: u64,
}

/// Any board event the presentation layer may animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileEvent {
    Merge(MergeEvent),
    Shift(ShiftEvent),
    Spawn(SpawnEvent),
}

impl From<MergeEvent> for TileEvent {
    fn from(value: MergeEvent) -> Self {
        TileEvent::Merge(value)
    }
}

impl From<ShiftEvent> for TileEvent {
    fn from(value: ShiftEvent) -> Self {
        TileEvent::Shift(value)
    }
}

impl From<SpawnEvent> for TileEvent {
    fn from(value: SpawnEvent) -> Self {
        TileEvent::Spawn(value)
    }
}

/// What a session action did, reported back to the caller for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Tiles moved; a spawn may have followed.
    Moved { direction: Direction, score_delta: u32 },
    /// Nothing could move in that direction (no spawn, no history entry).
    Blocked(Direction),
    Undone,
    NothingToUndo,
    Shuffled,
    /// Fewer than two distinct values on the board.
    ShuffleUnchanged,
    Restarted,
    TilesRemoved(u8),
    NoTilesToRemove,
}

impl ActionOutcome {
    /// True when the session state was mutated.
    pub fn committed(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Moved { .. }
                | ActionOutcome::Undone
                | ActionOutcome::Shuffled
                | ActionOutcome::Restarted
                | ActionOutcome::TilesRemoved(_)
        )
    }

    /// Short status line text, if the outcome is worth announcing.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ActionOutcome::Moved { .. } | ActionOutcome::Blocked(_) => None,
            ActionOutcome::Undone => Some("Undid the last move"),
            ActionOutcome::NothingToUndo => Some("Nothing to undo"),
            ActionOutcome::Shuffled => Some("Tiles shuffled"),
            ActionOutcome::ShuffleUnchanged => Some("Nothing to shuffle"),
            ActionOutcome::Restarted => Some("New game"),
            ActionOutcome::TilesRemoved(_) => Some("Two tiles quietly vanished"),
            ActionOutcome::NoTilesToRemove => Some("No tiles to remove"),
        }
    }
}
