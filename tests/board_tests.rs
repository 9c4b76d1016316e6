use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_2048::core::{reduce_left, reduce_right, slide, Grid};
use tui_2048::types::{Direction, Pos, TileEvent, GRID_SIZE, MAX_TILE, SHIFT_DURATION_MS};

fn random_grid(rng: &mut StdRng) -> Grid {
    let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
    for row in rows.iter_mut() {
        for v in row.iter_mut() {
            if rng.gen_bool(0.6) {
                *v = 1u32 << rng.gen_range(1u32..=6);
            }
        }
    }
    Grid::from_rows(rows)
}

fn mirrored(g: &Grid) -> Grid {
    let mut rows = *g.rows();
    for row in rows.iter_mut() {
        row.reverse();
    }
    Grid::from_rows(rows)
}

#[test]
fn spec_examples_for_a_single_row() {
    let cases: [([u32; 4], [u32; 4], u32); 6] = [
        ([2, 2, 2, 2], [4, 4, 0, 0], 8),
        ([0, 0, 2, 2], [4, 0, 0, 0], 4),
        ([2, 2, 4, 0], [4, 4, 0, 0], 4),
        ([4, 4, 8, 8], [8, 16, 0, 0], 24),
        ([2, 4, 8, 16], [2, 4, 8, 16], 0),
        ([0, 0, 0, 0], [0, 0, 0, 0], 0),
    ];
    for (input, expected, score) in cases {
        let r = reduce_left(&input, 0);
        assert_eq!(r.line, expected, "{input:?}");
        assert_eq!(r.score, score, "{input:?}");
        assert_eq!(r.changed, input != expected, "{input:?}");
    }
}

#[test]
fn right_reduction_is_mirrored_left() {
    let r = reduce_right(&[2, 2, 2, 0], 0);
    assert_eq!(r.line, [0, 0, 2, 4]);
    assert_eq!(r.merges[0].pos, Pos::new(0, 3));
    assert_eq!(r.merges[0].sources, [Pos::new(0, 2), Pos::new(0, 1)]);
}

#[test]
fn moves_conserve_tile_sum_and_score_counts_merges() {
    let mut rng = StdRng::seed_from_u64(2048);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        for d in Direction::ALL {
            let (next, outcome) = slide(&g, d);
            assert_eq!(next.tile_sum(), g.tile_sum(), "{d:?} {g:?}");
            assert!(next.is_well_formed());
            let merged: u32 = outcome.merges.iter().map(|m| m.value).sum();
            assert_eq!(merged, outcome.score_delta);
            assert_eq!(next.tile_count() + outcome.merges.len(), g.tile_count());
            assert_eq!(outcome.changed, next != g);
        }
    }
}

#[test]
fn moves_are_idempotent_when_nothing_merges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let g = random_grid(&mut rng);
        for d in Direction::ALL {
            let (once, outcome) = slide(&g, d);
            if outcome.merges.is_empty() {
                let (twice, again) = slide(&once, d);
                assert_eq!(twice, once);
                assert!(!again.changed);
            }
        }
    }
}

#[test]
fn right_is_the_mirror_of_left_and_down_the_transpose_of_right() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..300 {
        let g = random_grid(&mut rng);

        let (left_of_mirror, l) = slide(&mirrored(&g), Direction::Left);
        let (right, r) = slide(&g, Direction::Right);
        assert_eq!(mirrored(&left_of_mirror), right);
        assert_eq!(l.score_delta, r.score_delta);

        let (up, _) = slide(&g, Direction::Up);
        let (left_of_t, _) = slide(&g.transposed(), Direction::Left);
        assert_eq!(left_of_t.transposed(), up);

        let (down, _) = slide(&g, Direction::Down);
        let (right_of_t, _) = slide(&g.transposed(), Direction::Right);
        assert_eq!(right_of_t.transposed(), down);
    }
}

#[test]
fn event_positions_are_in_grid_coordinates() {
    let g = Grid::from_rows([[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 4]]);
    let (next, outcome) = slide(&g, Direction::Up);
    assert_eq!(next.row(0), [4, 0, 0, 4]);

    let merge = outcome.merges[0];
    assert_eq!(merge.pos, Pos::new(0, 0));
    assert_eq!(merge.sources, [Pos::new(2, 0), Pos::new(3, 0)]);

    let shifts: Vec<_> = outcome.events().filter_map(|e| match e {
        TileEvent::Shift(s) => Some((s.from, s.to, s.value)),
        _ => None,
    }).collect();
    assert!(shifts.contains(&(Pos::new(2, 0), Pos::new(0, 0), 2)));
    assert!(shifts.contains(&(Pos::new(3, 0), Pos::new(0, 0), 2)));
    assert!(shifts.contains(&(Pos::new(3, 3), Pos::new(0, 3), 4)));
    assert!(outcome.shifts.iter().all(|s| s.duration_ms == SHIFT_DURATION_MS));
}

#[test]
fn merge_events_land_on_the_merged_value() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let g = random_grid(&mut rng);
        for d in Direction::ALL {
            let (next, outcome) = slide(&g, d);
            for m in &outcome.merges {
                assert_eq!(next.get(m.pos), Some(m.value));
                assert_eq!(g.get(m.sources[0]), Some(m.value / 2));
                assert_eq!(g.get(m.sources[1]), Some(m.value / 2));
            }
            for s in &outcome.shifts {
                assert_eq!(g.get(s.from), Some(s.value));
                assert_ne!(s.from, s.to);
            }
        }
    }
}

fn any_move_changes(g: &Grid) -> bool {
    Direction::ALL.into_iter().any(|d| slide(g, d).1.changed)
}

#[test]
fn game_over_iff_no_move_changes_the_board() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        assert_eq!(g.can_move(), any_move_changes(&g), "{g:?}");
    }
    let stuck = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!stuck.can_move());
    assert!(!any_move_changes(&stuck));
}

#[test]
fn oversized_tiles_never_overflow() {
    let huge = 1u32 << 31;
    let g = Grid::from_rows([[huge, huge, 0, 0], [MAX_TILE, MAX_TILE, 0, 0], [0; 4], [0; 4]]);
    for d in Direction::ALL {
        let (next, out) = slide(&g, d);
        assert!(out.merges.is_empty());
        assert_eq!(out.score_delta, 0);
        assert_eq!(next.tile_sum(), g.tile_sum());
    }
    let stuck = Grid::from_rows([[huge, huge, MAX_TILE, MAX_TILE]; 4]);
    assert!(!stuck.can_move());
    assert!(!any_move_changes(&stuck));
}
