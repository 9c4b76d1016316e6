//! Row reducer - collapses one line of tiles towards index 0
//!
//! This is the only merge primitive in the crate. Every direction is expressed
//! as a reflection/transposition around [`reduce_left`] (see [`crate::transform`]).
//!
//! Rules:
//! - Zeros are discarded, the remaining tiles keep their relative order.
//! - Two neighbouring (after zero removal) equal tiles merge into one of double
//!   value, scoring that value.
//! - A tile merges at most once per reduction; the merged result is never
//!   rescanned, so `[2, 2, 4, 0]` becomes `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.
//! - Tiles at [`MAX_TILE`] or above never merge.

use arrayvec::ArrayVec;

use crate::types::{Line, MergeEvent, Pos, ShiftEvent, Tile, GRID_SIZE, MAX_TILE, SHIFT_DURATION_MS};

/// Maximum merges one line can produce
pub const MAX_LINE_MERGES: usize = GRID_SIZE / 2;

/// Whether two neighbouring tiles combine.
pub fn mergeable(a: Tile, b: Tile) -> bool {
    a == b && a != 0 && a < MAX_TILE
}

/// Result of reducing a single line.
///
/// Positions in the events use `row` as the line index and `col` as the
/// position inside the line, in the line's own (untransformed) coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReduction {
    pub line: Line,
    pub score: u32,
    pub merges: ArrayVec<MergeEvent, MAX_LINE_MERGES>,
    pub shifts: ArrayVec<ShiftEvent, GRID_SIZE>,
    pub changed: bool,
}

/// Collapse `line` leftward.
///
/// `index` is the line's row index, used only to label event positions.
pub fn reduce_left(line: &Line, index: u8) -> LineReduction {
    let tiles: ArrayVec<(u32, u8), GRID_SIZE> = line
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(col, &v)| (v, col as u8))
        .collect();

    let mut out = LineReduction {
        line: [0; GRID_SIZE],
        score: 0,
        merges: ArrayVec::new(),
        shifts: ArrayVec::new(),
        changed: false,
    };

    let at = |col: u8| Pos::new(index, col);
    let mut dest: u8 = 0;
    let mut i = 0usize;

    while i < tiles.len() {
        let (value, from) = tiles[i];

        match tiles.get(i + 1) {
            Some(&(next_value, next_from)) if mergeable(value, next_value) => {
                let merged = value * 2;
                out.line[dest as usize] = merged;
                out.score += merged;
                out.merges.push(MergeEvent {
                    pos: at(dest),
                    value: merged,
                    sources: [at(from), at(next_from)],
                });
                for src in [from, next_from] {
                    if src != dest {
                        out.shifts.push(ShiftEvent {
                            from: at(src),
                            to: at(dest),
                            value,
                            duration_ms: SHIFT_DURATION_MS,
                        });
                    }
                }
                i += 2;
            }
            _ => {
                out.line[dest as usize] = value;
                if from != dest {
                    out.shifts.push(ShiftEvent {
                        from: at(from),
                        to: at(dest),
                        value,
                        duration_ms: SHIFT_DURATION_MS,
                    });
                }
                i += 1;
            }
        }
        dest += 1;
    }

    out.changed = out.line != *line;
    out
}
