//! TUI Tetris - interactive terminal entry point.
//!
//! Wires a monotonic millisecond clock, crossterm key capture, and the
//! timed driver (`tui_tetris::engine::Tetris`) together into a playable
//! terminal game. All Tetris rules live in `tui_tetris::core`/`engine`; this
//! binary only translates real time and real keystrokes into the driver's
//! `DriverEvent` vocabulary and renders its snapshots.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tetris::core::TetrionConfig;
use tui_tetris::engine::{DriverConfig, Tetris};
use tui_tetris::input::{should_quit, InputHandler};
use tui_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tetris::types::DriverEvent;

/// Target poll/tick interval. The driver's own timers run off the
/// timestamps passed to it, not off this constant, so a slow terminal
/// doesn't desync gameplay — it just renders choppier.
const TICK_MS: u64 = 16;

fn main() -> Result<()> {
    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = run(&mut renderer);
    renderer.exit()?;
    result
}

fn run(renderer: &mut TerminalRenderer) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let seed = now_ms();
    let mut driver = Tetris::new(
        now_ms(),
        DriverConfig::default(),
        TetrionConfig {
            seed,
            ..TetrionConfig::default()
        },
    );
    let mut input = InputHandler::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        if driver.is_game_over() {
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(
            &driver.playfield(true),
            &driver.queue(),
            driver.hold(),
            viewport,
            &mut fb,
        );
        renderer.draw_swap(&mut fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if poll_event(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key.code) {
                        return Ok(());
                    }
                    for ev in input.on_key(key.code, now_ms()) {
                        driver.handle_event(ev);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let ms = now_ms();
            for ev in input.poll_releases(ms) {
                driver.handle_event(ev);
            }
            driver.handle_event(DriverEvent::Tick(ms));
        }
    }
}

fn poll_event(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}
