//! Terminal sorting game runner (default binary).
//!
//! Uses crossterm for mouse/keyboard input and the framebuffer renderer from
//! `tui_sort::term`. Drag an item with the left mouse button and release it
//! over the bin it belongs in.

use std::env;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use tui_sort::assets::{load_catalog_file, scan_asset_dir};
use tui_sort::cli::{parse_args, CliArgs, USAGE};
use tui_sort::core::{Catalog, GameConfig, GameSnapshot, GameState};
use tui_sort::input::{handle_key_event, should_quit, PointerTracker};
use tui_sort::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_sort::types::TICK_MS;

/// Redraw at least this often even when nothing changed.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(cli) = parse_args(&args)? else {
        print!("{USAGE}");
        return Ok(());
    };

    let _log_guard = init_logging()?;

    let catalog = load_catalog(&cli)?;
    let env_seed = env::var_os("TUI_SORT_SEED").is_some();
    let config = cli.apply(GameConfig::from_env(), env_seed);
    tracing::info!(
        seed = config.seed,
        rounds = config.total_rounds,
        per_round = config.items_per_round,
        "starting game"
    );
    let mut game = GameState::new(&catalog, config).context("cannot start game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn init_logging() -> Result<WorkerGuard> {
    let dir = env::var_os("TUI_SORT_LOG_DIR")
        .map(Into::into)
        .unwrap_or_else(env::temp_dir);
    let appender = tracing_appender::rolling::never(dir, "tui-sort.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("TUI_SORT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;
    Ok(guard)
}

fn load_catalog(cli: &CliArgs) -> Result<Catalog> {
    match (&cli.catalog, &cli.assets) {
        (Some(path), _) => load_catalog_file(path),
        (None, Some(dir)) => scan_asset_dir(dir),
        (None, None) => Ok(Catalog::builtin()),
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut pointer = PointerTracker::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Tick: start the next round if the last one just ended.
        game.tick();
        for event in game.take_events() {
            tracing::trace!(?event, "game event");
        }

        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fingerprint = snap.fingerprint() ^ ((w as u64) << 48 | (h as u64) << 32);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint) {
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input until the next tick.
        let deadline = Instant::now() + tick_duration;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!(
                            score = game.score(),
                            round = game.round(),
                            phase = game.phase().name(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        pointer.reset();
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(ev) = pointer.handle_mouse_event(mouse) {
                        game.apply_pointer(ev);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }
    }
}
