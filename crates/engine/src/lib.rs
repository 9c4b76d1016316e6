//! Session engine - ties the board rules to the clock and the save slot
//!
//! [`Game`] is what the terminal runner drives: it applies [`GameAction`]s,
//! stamps tile events with play-clock time, banks play time and saves after
//! every committed action. [`Config`] carries the command line and
//! environment settings that shape a session.
//!
//! # Example
//!
//! ```
//! use tui_2048_engine::Game;
//! use tui_2048_types::{ActionOutcome, Direction, GameAction, SpawnPolicy};
//!
//! let mut game = Game::in_memory(42, SpawnPolicy::Classic);
//! let report = game.apply_action(GameAction::Undo);
//! assert_eq!(report.outcome, ActionOutcome::NothingToUndo);
//!
//! let report = game.apply_action(GameAction::Move(Direction::Left));
//! if report.outcome.committed() {
//!     assert!(game.state().can_undo());
//! }
//! ```
//!
//! [`GameAction`]: types::GameAction

pub mod clock;
pub mod config;
pub mod game;

pub use tui_2048_core as core;
pub use tui_2048_store as store;
pub use tui_2048_types as types;

pub use clock::{format_playtime, PlayClock};
pub use config::Config;
pub use game::{Game, Origin, Report, MAX_EVENTS};
