//! Game session orchestrator.
//!
//! Owns the live [`SessionState`], the RNG, the play clock and the optional
//! save slot. Every action that mutates the session is saved before
//! [`Game::apply_action`] returns.

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::clock::{format_playtime, PlayClock};
use crate::config::Config;
use crate::core::grid::CELL_COUNT;
use crate::core::moves::MAX_MERGES;
use crate::core::session::OPENING_TILES;
use crate::core::{SessionSnapshot, SessionState, TileRng};
use crate::store::SaveStore;
use crate::types::{ActionOutcome, GameAction, SpawnPolicy, TileEvent, SECRET_REMOVE_COUNT};

/// Upper bound on events produced by one action (merges, shifts, spawns).
pub const MAX_EVENTS: usize = MAX_MERGES + CELL_COUNT + OPENING_TILES;

/// What one action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: ActionOutcome,
    pub events: ArrayVec<TileEvent, MAX_EVENTS>,
}

impl Report {
    fn bare(outcome: ActionOutcome) -> Self {
        Self {
            outcome,
            events: ArrayVec::new(),
        }
    }
}

/// Where the session came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Loaded,
    NewGame,
}

pub struct Game {
    state: SessionState,
    rng: TileRng,
    policy: SpawnPolicy,
    store: Option<SaveStore>,
    clock: PlayClock,
    origin: Origin,
}

impl Game {
    /// Load the saved session (unless `--fresh`), or start a new one and
    /// save it immediately.
    pub fn start(config: &Config) -> Self {
        let store = (!config.no_save).then(|| SaveStore::new(&config.save_path));
        let rng = match config.seed {
            Some(seed) => TileRng::new(seed),
            None => TileRng::from_entropy(),
        };
        Self::with_store(store, rng, config.spawn_policy, config.fresh)
    }

    /// Build a game around an explicit store and RNG.
    pub fn with_store(store: Option<SaveStore>, rng: TileRng, policy: SpawnPolicy, fresh: bool) -> Self {
        let loaded = match (&store, fresh) {
            (Some(store), false) => store.load(),
            _ => None,
        };

        match loaded {
            Some(state) => {
                info!(
                    score = state.score(),
                    moves = state.moves(),
                    history = state.history().len(),
                    "resumed saved game"
                );
                Self {
                    state,
                    rng,
                    policy,
                    store,
                    clock: PlayClock::new(),
                    origin: Origin::Loaded,
                }
            }
            None => {
                let mut rng = rng;
                let clock = PlayClock::new();
                let (state, _) = SessionState::new_game(&mut rng, policy, clock.now_ms());
                info!(policy = policy.as_str(), seed = ?rng.seed(), "started new game");
                let mut game = Self {
                    state,
                    rng,
                    policy,
                    store,
                    clock,
                    origin: Origin::NewGame,
                };
                game.save();
                game
            }
        }
    }

    /// An in-memory game with a fixed seed and no save slot.
    pub fn in_memory(seed: u64, policy: SpawnPolicy) -> Self {
        Self::with_store(None, TileRng::new(seed), policy, true)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    pub fn store(&self) -> Option<&SaveStore> {
        self.store.as_ref()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Milliseconds on the play clock, used to stamp events.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Banked play time plus the current run, in whole seconds.
    pub fn playtime_secs(&self) -> u64 {
        (self.state.accumulated_secs() + self.clock.pending_secs()) as u64
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.state.snapshot_into(out, self.playtime_secs());
    }

    pub fn apply_action(&mut self, action: GameAction) -> Report {
        let now_ms = self.clock.now_ms();
        let report = match action {
            GameAction::Move(direction) => {
                let turn = self.state.apply_move(direction, &mut self.rng, self.policy, now_ms);
                if !turn.changed() {
                    return Report::bare(ActionOutcome::Blocked(direction));
                }
                debug!(
                    direction = direction.as_str(),
                    gained = turn.outcome.score_delta,
                    score = self.state.score(),
                    spawned = turn.spawn.is_some(),
                    "move"
                );
                Report {
                    outcome: ActionOutcome::Moved {
                        direction,
                        score_delta: turn.outcome.score_delta,
                    },
                    events: turn.events().collect(),
                }
            }
            GameAction::Undo => {
                if !self.state.undo() {
                    return Report::bare(ActionOutcome::NothingToUndo);
                }
                debug!(history = self.state.history().len(), "undo");
                Report::bare(ActionOutcome::Undone)
            }
            GameAction::Shuffle => {
                if !self.state.shuffle(&mut self.rng) {
                    return Report::bare(ActionOutcome::ShuffleUnchanged);
                }
                debug!("shuffle");
                Report::bare(ActionOutcome::Shuffled)
            }
            GameAction::Restart => {
                let (state, opening) = SessionState::new_game(&mut self.rng, self.policy, now_ms);
                self.state = state;
                self.clock.fold();
                info!(policy = self.policy.as_str(), "restarted");
                Report {
                    outcome: ActionOutcome::Restarted,
                    events: opening.into_iter().map(TileEvent::from).collect(),
                }
            }
            GameAction::RemoveTiles => {
                let removed = self.state.remove_tiles(SECRET_REMOVE_COUNT, &mut self.rng);
                if removed.is_empty() {
                    return Report::bare(ActionOutcome::NoTilesToRemove);
                }
                debug!(count = removed.len(), "tiles removed");
                Report::bare(ActionOutcome::TilesRemoved(removed.len() as u8))
            }
        };

        self.save();
        report
    }

    /// Bank elapsed play time and write the save slot. Failures are logged
    /// and reported as `false`; the session keeps running either way.
    pub fn save(&mut self) -> bool {
        self.state.add_play_time(self.clock.fold());
        let Some(store) = &self.store else {
            return true;
        };
        match store.save(&self.state) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %store.path().display(), error = %err, "failed to save game");
                false
            }
        }
    }

    /// Final save on exit.
    pub fn shutdown(&mut self) {
        if self.save() {
            info!(
                score = self.state.score(),
                moves = self.state.moves(),
                playtime = %format_playtime(self.state.accumulated_secs() as u64),
                "session closed"
            );
        }
    }
}
