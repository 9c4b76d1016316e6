//! Short-lived visual effects driven by tile events, and the status line.
//!
//! Effects are keyed by the time the event was received (play-clock
//! milliseconds). Spawns and merges highlight their cell for [`EFFECT_MS`];
//! shifts leave a trailing marker at their source cell for their own
//! duration.

use crate::types::{Pos, Tile, TileEvent, EFFECT_MS, STATUS_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Spawn,
    Merge,
}

/// An active cell highlight and how far through it we are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub kind: HighlightKind,
    /// 0.0 at receipt, approaching 1.0 as the effect ends.
    pub progress: f32,
}

/// A tile that just slid away from `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trail {
    pub from: Pos,
    pub to: Pos,
    pub value: Tile,
}

#[derive(Debug, Clone, Copy)]
struct Active {
    kind: Kind,
    started_ms: u64,
    duration_ms: u32,
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Cell(Pos, HighlightKind),
    Trail(Trail),
}

impl Active {
    fn progress(&self, now_ms: u64) -> Option<f32> {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if elapsed >= self.duration_ms as u64 {
            return None;
        }
        Some(elapsed as f32 / self.duration_ms.max(1) as f32)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TileEffects {
    active: Vec<Active>,
}

impl TileEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start effects for `events` received at `now_ms`.
    pub fn record(&mut self, events: impl IntoIterator<Item = TileEvent>, now_ms: u64) {
        for event in events {
            let (kind, duration_ms) = match event {
                TileEvent::Spawn(s) => (Kind::Cell(s.pos, HighlightKind::Spawn), EFFECT_MS),
                TileEvent::Merge(m) => (Kind::Cell(m.pos, HighlightKind::Merge), EFFECT_MS),
                TileEvent::Shift(s) => (
                    Kind::Trail(Trail {
                        from: s.from,
                        to: s.to,
                        value: s.value,
                    }),
                    s.duration_ms,
                ),
            };
            self.active.push(Active {
                kind,
                started_ms: now_ms,
                duration_ms,
            });
        }
    }

    /// Drop every effect (the board changed without events).
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Forget finished effects.
    pub fn prune(&mut self, now_ms: u64) {
        self.active.retain(|a| a.progress(now_ms).is_some());
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.active.iter().any(|a| a.progress(now_ms).is_some())
    }

    /// Newest running highlight on `pos`.
    pub fn highlight_at(&self, pos: Pos, now_ms: u64) -> Option<Highlight> {
        self.active.iter().rev().find_map(|a| match a.kind {
            Kind::Cell(p, kind) if p == pos => a.progress(now_ms).map(|progress| Highlight { kind, progress }),
            _ => None,
        })
    }

    /// Running shift trails.
    pub fn trails(&self, now_ms: u64) -> impl Iterator<Item = Trail> + '_ {
        self.active.iter().filter_map(move |a| match a.kind {
            Kind::Trail(t) if a.progress(now_ms).is_some() => Some(t),
            _ => None,
        })
    }
}

/// One transient message shown under the board.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    text: String,
    until_ms: u64,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` for [`STATUS_MS`] from `now_ms`.
    pub fn set(&mut self, text: &str, now_ms: u64) {
        self.text.clear();
        self.text.push_str(text);
        self.until_ms = now_ms + STATUS_MS as u64;
    }

    pub fn current(&self, now_ms: u64) -> Option<&str> {
        (!self.text.is_empty() && now_ms < self.until_ms).then_some(self.text.as_str())
    }
}
