//! Core board engine - pure, deterministic, and testable
//!
//! This crate contains every rule of the game: sliding and merging, spawning,
//! shuffling, undo history and the session state that ties them together.
//! It has **no dependencies** on terminal I/O, clocks or storage:
//!
//! - **Deterministic**: a seeded [`TileRng`] reproduces a whole game
//! - **Pure moves**: [`slide`] returns a new grid plus typed events
//! - **Renderer-agnostic**: merges, shifts and spawns are reported as
//!   [`types::TileEvent`] values for any presentation layer to animate
//!
//! # Module Structure
//!
//! - [`grid`]: the 4x4 tile matrix
//! - [`reducer`]: the single line-collapsing primitive
//! - [`transform`]: maps left/right/up/down onto the reducer
//! - [`moves`]: whole-grid moves and their outcome
//! - [`spawner`]: new tiles (and random removal)
//! - [`shuffle`]: value redistribution that always changes something
//! - [`history`]: bounded undo stack
//! - [`session`]: score, moves, play time and atomic session operations
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{SessionState, TileRng};
//! use tui_2048_types::{Direction, SpawnPolicy};
//!
//! let mut rng = TileRng::new(12345);
//! let (mut state, opening) = SessionState::new_game(&mut rng, SpawnPolicy::Classic, 0);
//! assert_eq!(opening.len(), 2);
//!
//! for d in Direction::ALL {
//!     let turn = state.apply_move(d, &mut rng, SpawnPolicy::Classic, 0);
//!     if turn.changed() {
//!         assert_eq!(state.history().latest(), Some(state.grid()));
//!     }
//! }
//! ```

pub mod grid;
pub mod history;
pub mod moves;
pub mod reducer;
pub mod rng;
pub mod session;
pub mod shuffle;
pub mod snapshot;
pub mod spawner;
pub mod transform;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use history::History;
pub use moves::{apply_move, slide, MoveOutcome};
pub use reducer::{reduce_left, LineReduction};
pub use rng::TileRng;
pub use session::{SessionState, Turn};
pub use shuffle::shuffle;
pub use snapshot::SessionSnapshot;
pub use spawner::{remove_random_tile, spawn, spawn_tile};
pub use transform::{reduce_right, Orientation};
