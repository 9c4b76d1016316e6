use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{SessionSnapshot, SessionState, TileRng};
use tui_2048::term::{FrameBuffer, GameView, Hud, TileEffects, TileTheme, Viewport};
use tui_2048::types::{Direction, SpawnPolicy};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn session_hot_paths_do_not_allocate() {
    let mut rng = TileRng::new(1);
    let (mut state, _) = SessionState::new_game(&mut rng, SpawnPolicy::Classic, 0);

    // Warm-up fills the history to capacity.
    for i in 0..100 {
        state.apply_move(Direction::ALL[i % 4], &mut rng, SpawnPolicy::Classic, 0);
    }
    let mut snap = SessionSnapshot::default();

    let allocs = with_alloc_counting(|| {
        for i in 0..400 {
            let turn = state.apply_move(Direction::ALL[i % 4], &mut rng, SpawnPolicy::Lenient, i as u64);
            let _ = turn.events().count();
            if i % 7 == 0 {
                let _ = state.undo();
            }
            if i % 11 == 0 {
                let _ = state.shuffle(&mut rng);
            }
            if state.is_game_over() {
                let _ = state.remove_tiles(2, &mut rng);
            }
            state.snapshot_into(&mut snap, i as u64);
        }
    });

    assert!(allocs == 0);
}

#[test]
fn game_view_render_is_allocation_free_after_warmup() {
    let view = GameView::new(TileTheme::Milestone);
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut rng = TileRng::new(7);
    let (mut state, opening) = SessionState::new_game(&mut rng, SpawnPolicy::Classic, 0);
    let mut fx = TileEffects::new();
    fx.record(opening.iter().copied().map(Into::into), 0);
    let mut snap = state.snapshot(0);
    let hud = Hud {
        effects: Some(&fx),
        status: Some("New game"),
        prompt: None,
        now_ms: 100,
    };

    // Warm-up (resize/initial clears).
    view.render_into(&snap, &hud, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            state.apply_move(Direction::ALL[i % 4], &mut rng, SpawnPolicy::Classic, 0);
            state.snapshot_into(&mut snap, i as u64);
            view.render_into(&snap, &hud, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
