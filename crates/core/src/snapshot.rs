use crate::types::{Cells, Tile};

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub board: Cells,
    pub score: u64,
    pub moves: u64,
    pub playtime_secs: u64,
    pub history_len: u8,
    pub can_undo: bool,
    pub max_tile: Tile,
    pub game_over: bool,
}

impl SessionSnapshot {
    /// FNV-1a hash over everything that affects a rendered frame.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut feed = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x00000100000001B3);
            }
        };
        for row in &self.board {
            for v in row {
                feed(&v.to_le_bytes());
            }
        }
        feed(&self.score.to_le_bytes());
        feed(&self.moves.to_le_bytes());
        feed(&self.playtime_secs.to_le_bytes());
        feed(&[self.history_len, self.can_undo as u8, self.game_over as u8]);
        h
    }
}
