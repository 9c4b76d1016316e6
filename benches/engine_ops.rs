use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{reduce_left, shuffle, slide, Grid, SessionState, TileRng};
use tui_2048::term::{FrameBuffer, GameView, Hud, Viewport};
use tui_2048::types::{Direction, SpawnPolicy};

fn sample_grid() -> Grid {
    Grid::from_rows([[2, 2, 4, 8], [0, 4, 4, 0], [16, 0, 16, 2], [2, 4, 8, 16]])
}

fn bench_reduce_line(c: &mut Criterion) {
    c.bench_function("reduce_left", |b| {
        b.iter(|| reduce_left(black_box(&[2, 2, 4, 4]), 0))
    });
}

fn bench_slide(c: &mut Criterion) {
    let grid = sample_grid();
    c.bench_function("slide_all_directions", |b| {
        b.iter(|| {
            for d in Direction::ALL {
                black_box(slide(black_box(&grid), d));
            }
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let grid = sample_grid();
    let mut rng = TileRng::new(12345);
    c.bench_function("shuffle", |b| b.iter(|| shuffle(black_box(&grid), &mut rng)));
}

fn bench_session_move(c: &mut Criterion) {
    let mut rng = TileRng::new(12345);
    let (mut state, _) = SessionState::new_game(&mut rng, SpawnPolicy::Classic, 0);
    let mut i = 0usize;

    c.bench_function("session_apply_move", |b| {
        b.iter(|| {
            i += 1;
            state.apply_move(Direction::ALL[i % 4], &mut rng, SpawnPolicy::Classic, 0);
            if state.is_game_over() {
                state = SessionState::new_game(&mut rng, SpawnPolicy::Classic, 0).0;
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let snap = SessionState::from_parts(sample_grid(), Default::default(), 0, 0, 0.0).snapshot(0);

    c.bench_function("game_view_render_into", |b| {
        b.iter(|| view.render_into(black_box(&snap), &Hud::default(), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_reduce_line,
    bench_slide,
    bench_shuffle,
    bench_session_move,
    bench_render
);
criterion_main!(benches);
