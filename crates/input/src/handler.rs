//! Stateful input handler: key mapping, yes/no confirmation and the
//! tile-removal phrase.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_affirmative, is_interrupt, should_quit, typed_char};
use crate::phrase::PhraseMatcher;
use crate::types::GameAction;

/// What the runner should do with one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Apply the action now.
    Action(GameAction),
    /// Ask the player to confirm; the next key answers.
    Confirm(GameAction),
    /// The pending confirmation was declined.
    Cancelled(GameAction),
    Quit,
}

/// Turns key events into [`InputCommand`]s.
#[derive(Debug, Clone)]
pub struct InputHandler {
    phrase: PhraseMatcher,
    pending: Option<GameAction>,
    confirm: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            phrase: PhraseMatcher::default(),
            pending: None,
            confirm: true,
        }
    }

    /// Apply shuffle, restart and tile removal without asking first.
    pub fn without_confirmation(mut self) -> Self {
        self.confirm = false;
        self
    }

    /// Action awaiting a yes/no answer.
    pub fn pending(&self) -> Option<GameAction> {
        self.pending
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if is_interrupt(key) {
            return Some(InputCommand::Quit);
        }

        if let Some(action) = self.pending.take() {
            if key.kind == KeyEventKind::Repeat {
                self.pending = Some(action);
                return None;
            }
            return Some(if is_affirmative(key) {
                InputCommand::Action(action)
            } else {
                InputCommand::Cancelled(action)
            });
        }

        if should_quit(key) {
            return Some(InputCommand::Quit);
        }
        if let Some(action) = handle_key_event(key) {
            return Some(self.request(action));
        }
        if key.kind == KeyEventKind::Press {
            if let Some(c) = typed_char(key) {
                if self.phrase.push(c) {
                    return Some(self.request(GameAction::RemoveTiles));
                }
            }
        }
        None
    }

    fn request(&mut self, action: GameAction) -> InputCommand {
        if self.confirm && needs_confirmation(action) {
            self.pending = Some(action);
            InputCommand::Confirm(action)
        } else {
            InputCommand::Action(action)
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions that ask before they run.
pub fn needs_confirmation(action: GameAction) -> bool {
    matches!(
        action,
        GameAction::Shuffle | GameAction::Restart | GameAction::RemoveTiles
    )
}
