//! Terminal Gem League runner (default binary).
//!
//! Owns the frame loop: polls crossterm for key presses until the next frame is
//! due, advances the state stack with the elapsed time, and redraws through a
//! diffing framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use gem_league::engine::{MainMenu, StateStack};
use gem_league::input::{should_quit, FrameInput};
use gem_league::logging;
use gem_league::term::{FrameBuffer, StackView, TerminalRenderer, Viewport};
use gem_league::Settings;

fn main() -> Result<()> {
    let settings = Settings::from_env();
    logging::init(settings.log_path.as_deref())?;
    settings.log_rejected();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    // Seeded once here; every board draws from generators derived from it.
    let seed = settings.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {} at {} fps", seed, settings.target_fps);

    let mut stack = StateStack::new();
    stack.push(Box::new(MainMenu::new(seed, settings.session())), None);

    let view = StackView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut input = FrameInput::new();
    let frame = settings.frame_duration();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(stack.scenes(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Collect presses until the next frame is due.
        loop {
            let timeout = frame
                .checked_sub(last_frame.elapsed())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    stack.clear();
                    return Ok(());
                }
                Event::Key(key) => {
                    input.handle_key(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Update.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        if !stack.update(dt, &input.take()) {
            info!("state stack finished");
            return Ok(());
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
