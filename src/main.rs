//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! The session is saved after every committed action and once more on exit.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use tui_2048::core::SessionSnapshot;
use tui_2048::engine::{Config, Game, Report};
use tui_2048::input::{InputCommand, InputHandler};
use tui_2048::term::{
    FrameBuffer, GameView, Hud, RenderThrottle, StatusLine, TerminalRenderer, TileEffects,
    TileTheme, Viewport,
};
use tui_2048::types::{ActionOutcome, GameAction, TICK_MS};

/// Redraw interval while nothing changes (keeps the clock moving).
const IDLE_FRAME_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;
    tracing::info!(
        save = %config.save_path.display(),
        policy = config.spawn_policy.as_str(),
        theme = %config.theme,
        "starting"
    );

    let mut game = Game::start(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    game.shutdown();
    result
}

/// Log to a file so the alternate screen stays clean; no file, no logging.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game, config: &Config) -> Result<()> {
    let view = GameView::new(TileTheme::by_name(&config.theme).unwrap_or_default());
    let mut input = InputHandler::new();
    if config.no_confirm {
        input = input.without_confirmation();
    }

    let mut effects = TileEffects::new();
    let mut status = StatusLine::new();
    let mut throttle = RenderThrottle::new(IDLE_FRAME_MS);
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let now_ms = game.now_ms();
        effects.prune(now_ms);
        game.snapshot_into(&mut snap);
        let hud = Hud {
            effects: Some(&effects),
            status: status.current(now_ms),
            prompt: input.pending().map(prompt_text),
            now_ms,
        };
        let fingerprint = snap.fingerprint() ^ hud.fingerprint();
        if throttle.should_render(now_ms, fingerprint, effects.is_animating(now_ms)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match input.handle_key(key) {
                Some(InputCommand::Quit) => return Ok(()),
                Some(InputCommand::Action(action)) => {
                    let report = game.apply_action(action);
                    present(&report, game.now_ms(), &mut effects, &mut status);
                }
                Some(InputCommand::Cancelled(_)) => status.set("Cancelled", game.now_ms()),
                Some(InputCommand::Confirm(_)) | None => {}
            },
            Event::Resize(_, _) => {
                term.invalidate();
                throttle.reset();
            }
            _ => {}
        }
    }
}

fn present(report: &Report, now_ms: u64, effects: &mut TileEffects, status: &mut StatusLine) {
    // The board jumped; old highlights no longer point at the right tiles.
    if matches!(
        report.outcome,
        ActionOutcome::Restarted | ActionOutcome::Undone | ActionOutcome::Shuffled | ActionOutcome::TilesRemoved(_)
    ) {
        effects.clear();
    }
    effects.record(report.events.iter().copied(), now_ms);
    if let Some(message) = report.outcome.message() {
        status.set(message, now_ms);
    }
}

fn prompt_text(action: GameAction) -> &'static str {
    match action {
        GameAction::Shuffle => "Shuffle the tiles?",
        GameAction::Restart => "Start a new game?",
        GameAction::RemoveTiles => "Remove two tiles?",
        GameAction::Move(_) | GameAction::Undo => "Are you sure?",
    }
}
