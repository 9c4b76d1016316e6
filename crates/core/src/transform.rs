//! Direction transform - maps the four move directions onto [`reduce_left`]
//!
//! | Direction | Work grid | Line op | Event remap |
//! |-----------|-----------|---------|-------------|
//! | Left  | as-is      | reduce_left            | none |
//! | Right | as-is      | reverse, reduce, reverse | mirror col |
//! | Up    | transposed | reduce_left            | swap row/col |
//! | Down  | transposed | reverse, reduce, reverse | mirror col, then swap |
//!
//! No direction has its own merge logic.

use crate::grid::Grid;
use crate::reducer::{reduce_left, LineReduction};
use crate::types::{Direction, Line, Pos};

/// How a direction is laid onto the left-reducing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Work on the transposed grid (vertical moves).
    pub transposed: bool,
    /// Reverse each line before reducing (moves towards the high index).
    pub reversed: bool,
}

impl Orientation {
    pub fn of(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                transposed: false,
                reversed: false,
            },
            Direction::Right => Self {
                transposed: false,
                reversed: true,
            },
            Direction::Up => Self {
                transposed: true,
                reversed: false,
            },
            Direction::Down => Self {
                transposed: true,
                reversed: true,
            },
        }
    }

    /// Grid in the space where every line is reduced along its rows.
    pub fn to_work(&self, grid: &Grid) -> Grid {
        if self.transposed {
            grid.transposed()
        } else {
            *grid
        }
    }

    /// Inverse of [`Orientation::to_work`].
    pub fn from_work(&self, work: &Grid) -> Grid {
        // Transposition is its own inverse.
        self.to_work(work)
    }

    /// Map a work-space position back to grid space.
    pub fn map_pos(&self, pos: Pos) -> Pos {
        let pos = if self.reversed { pos.mirrored() } else { pos };
        if self.transposed {
            pos.transposed()
        } else {
            pos
        }
    }

    /// Reduce one work-space row, returning the line in work space and the
    /// events already mapped into grid space.
    pub fn reduce(&self, line: &Line, index: u8) -> LineReduction {
        let mut r = if self.reversed {
            reduce_right(line, index)
        } else {
            reduce_left(line, index)
        };
        if self.transposed {
            for m in r.merges.iter_mut() {
                *m = m.map_pos(Pos::transposed);
            }
            for s in r.shifts.iter_mut() {
                *s = s.map_pos(Pos::transposed);
            }
        }
        r
    }
}

/// Collapse `line` rightward: reverse, reduce left, reverse back, mirror the
/// event columns.
pub fn reduce_right(line: &Line, index: u8) -> LineReduction {
    let mut reversed = *line;
    reversed.reverse();

    let mut r = reduce_left(&reversed, index);
    r.line.reverse();
    for m in r.merges.iter_mut() {
        *m = m.map_pos(Pos::mirrored);
    }
    for s in r.shifts.iter_mut() {
        *s = s.map_pos(Pos::mirrored);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    #[test]
    fn test_right_is_mirror_of_left() {
        let r = reduce_right(&[2, 2, 0, 0], 0);
        assert_eq!(r.line, [0, 0, 0, 4]);

        let mut mirrored = reduce_left(&[0, 0, 2, 2], 0).line;
        mirrored.reverse();
        assert_eq!(r.line, mirrored);
    }

    #[test]
    fn test_right_event_columns_are_mirrored() {
        let r = reduce_right(&[2, 2, 0, 0], 1);
        assert_eq!(r.merges[0].pos, Pos::new(1, 3));
        assert_eq!(r.merges[0].sources, [Pos::new(1, 1), Pos::new(1, 0)]);
        assert_eq!(r.shifts.len(), 2);
        for s in &r.shifts {
            assert_eq!(s.to, Pos::new(1, 3));
        }
    }

    #[test]
    fn test_right_merges_from_the_right_edge() {
        // Right edge pair merges first.
        let r = reduce_right(&[2, 2, 2, 0], 0);
        assert_eq!(r.line, [0, 0, 2, 4]);
    }

    #[test]
    fn test_down_maps_events_mirror_then_swap() {
        let o = Orientation::of(Direction::Down);
        // Work row 2 is grid column 2; work col 0 reversed is grid row 3.
        assert_eq!(o.map_pos(Pos::new(2, 0)), Pos::new(3, 2));

        let r = o.reduce(&[4, 4, 0, 0], 2);
        assert_eq!(r.line, [0, 0, 0, 8]);
        assert_eq!(r.merges[0].pos, Pos::new(3, 2));
        assert_eq!(r.merges[0].sources, [Pos::new(1, 2), Pos::new(0, 2)]);
    }

    #[test]
    fn test_up_swaps_event_axes() {
        let o = Orientation::of(Direction::Up);
        let r = o.reduce(&[0, 0, 0, 2], 1);
        assert_eq!(r.line, [2, 0, 0, 0]);
        assert_eq!(r.shifts[0].from, Pos::new(3, 1));
        assert_eq!(r.shifts[0].to, Pos::new(0, 1));
    }

    #[test]
    fn test_work_grid_round_trip() {
        let grid = Grid::from_rows([[2, 4, 8, 16], [0, 2, 0, 0], [0, 0, 4, 0], [0, 0, 0, 2]]);
        for d in Direction::ALL {
            let o = Orientation::of(d);
            assert_eq!(o.from_work(&o.to_work(&grid)), grid);
        }
    }

    #[test]
    fn test_map_pos_stays_in_bounds() {
        for d in Direction::ALL {
            let o = Orientation::of(d);
            for row in 0..GRID_SIZE as u8 {
                for col in 0..GRID_SIZE as u8 {
                    let p = o.map_pos(Pos::new(row, col));
                    assert!((p.row as usize) < GRID_SIZE && (p.col as usize) < GRID_SIZE);
                }
            }
        }
    }
}
