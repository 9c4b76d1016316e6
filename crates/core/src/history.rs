//! History manager - bounded undo stack of grid snapshots
//!
//! Snapshots are kept oldest-first. After every committed mutation the newest
//! entry equals the live grid, so undo pops it and returns the entry below.
//! A history of length 1 means "no prior state".

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::MAX_HISTORY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: VecDeque<Grid>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most [`MAX_HISTORY`] snapshots
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Create an empty history with a custom bound (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// History whose only entry is `grid`
    pub fn starting_at(grid: Grid) -> Self {
        let mut h = Self::new();
        h.push(grid);
        h
    }

    /// Rebuild from stored snapshots (oldest first). Keeps the newest
    /// [`MAX_HISTORY`] entries if there are more.
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = Grid>) -> Self {
        let mut h = Self::new();
        for grid in snapshots {
            h.push(grid);
        }
        h
    }

    /// Append a snapshot, evicting the oldest when over capacity
    pub fn push(&mut self, grid: Grid) {
        self.snapshots.push_back(grid);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// Drop the newest snapshot and return the one below it.
    ///
    /// Returns None (and leaves the history untouched) when fewer than two
    /// snapshots exist. There is no redo.
    pub fn undo(&mut self) -> Option<Grid> {
        if self.snapshots.len() < 2 {
            return None;
        }
        self.snapshots.pop_back();
        self.snapshots.back().copied()
    }

    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    pub fn latest(&self) -> Option<&Grid> {
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshots oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Grid> + '_ {
        self.snapshots.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    fn marked(n: u32) -> Grid {
        let mut g = Grid::new();
        g.set(Pos::new(0, 0), 2u32 << (n % 16));
        g.set(Pos::new(3, 3), 2u32 << (n / 16));
        g
    }

    #[test]
    fn test_undo_requires_two_entries() {
        let mut h = History::starting_at(marked(0));
        assert!(!h.can_undo());
        assert_eq!(h.undo(), None);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_undo_returns_previous() {
        let mut h = History::starting_at(marked(0));
        h.push(marked(1));
        h.push(marked(2));
        assert_eq!(h.undo(), Some(marked(1)));
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest(), Some(&marked(1)));
        assert_eq!(h.undo(), Some(marked(0)));
        assert_eq!(h.undo(), None);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut h = History::new();
        for n in 0..(MAX_HISTORY as u32 + 5) {
            h.push(marked(n));
            assert!(h.len() <= MAX_HISTORY);
        }
        assert_eq!(h.len(), MAX_HISTORY);
        assert_eq!(h.iter().next(), Some(&marked(5)));
        assert_eq!(h.latest(), Some(&marked(MAX_HISTORY as u32 + 4)));
    }

    #[test]
    fn test_from_snapshots_keeps_newest() {
        let h = History::from_snapshots((0..30).map(marked));
        assert_eq!(h.len(), MAX_HISTORY);
        assert_eq!(h.iter().next(), Some(&marked(10)));
        assert_eq!(h.latest(), Some(&marked(29)));
    }

    #[test]
    fn test_custom_capacity_floor() {
        let mut h = History::with_capacity(0);
        h.push(marked(0));
        h.push(marked(1));
        assert_eq!(h.len(), 1);
        assert_eq!(h.capacity(), 1);
    }
}
