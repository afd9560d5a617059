//! Terminal micro-tetris runner (default binary).
//!
//! Wires the engine to its three collaborators: crossterm events in, a
//! fixed-interval clock calling `tick()`, and the framebuffer renderer reading
//! a snapshot after every change.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use micro_tetris::cli::parse_args;
use micro_tetris::core::{BoardEngine, BoardSnapshot};
use micro_tetris::input::{translate, Input};
use micro_tetris::term::{FrameBuffer, GameView, GravityClock, TerminalRenderer, Viewport};

/// How long to block on input while the clock is disarmed (paused).
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    // Off by default: log output would draw over the alternate screen unless
    // stderr is redirected.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = parse_args(std::env::args().skip(1))?;
    let seed = wall_clock_seed();
    log::info!(
        "starting {}x{} board, {}ms tick, seed {}",
        config.rows,
        config.columns,
        config.tick_interval_ms,
        seed
    );
    let mut engine = BoardEngine::with_config(config, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut BoardEngine) -> Result<()> {
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    let view = GameView::default();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = GravityClock::new(engine.config().tick_interval_ms);
    clock.arm(now_ms());

    let mut dirty = true;
    loop {
        if dirty {
            engine.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = clock.timeout_ms(now_ms()).unwrap_or(IDLE_POLL_MS);
        if event::poll(Duration::from_millis(timeout))? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
                dirty = true;
            }

            match translate(&ev) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Command(cmd)) => dirty |= engine.apply(cmd),
                Some(Input::SetPaused(paused)) => {
                    engine.toggle_pause(Some(paused));
                    dirty = true;
                }
                None => {}
            }
            clock.follow(!engine.paused(), now_ms());
        }

        if clock.poll(now_ms()) {
            let running = engine.tick();
            clock.follow(running, now_ms());
            dirty = true;
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
