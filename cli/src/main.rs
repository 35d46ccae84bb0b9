//! Skillet binary - terminal session management and the event loop.
//!
//! # Event Loop
//!
//! A fixed 50 ms render cadence (the game clock has one-second granularity;
//! anything faster only serves the spinner):
//!
//! 1. Wait for frame tick
//! 2. Drain input actions (non-blocking via [`skillet_tui::InputPump`])
//! 3. Pump session events (timer ticks, judging verdicts)
//! 4. Render frame
//! 5. Check for quit

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillet_engine::{App, SkilletConfig};
use skillet_tui::{Action, InputPump, SHELF_COLUMNS, draw};

const FRAME_PERIOD: Duration = Duration::from_millis(50);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    if let Some(file) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!("Logging initialized");
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<std::fs::File> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skillet");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("skillet.log"))
        .ok()
}

/// RAII terminal guard: raw mode + alternate screen on entry, restored on
/// drop so every exit path (including `?`) leaves the shell usable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(out)).context("failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen);
}

fn apply(app: &mut App, action: Action) {
    match action {
        Action::CursorLeft => app.move_shelf_cursor(-1),
        Action::CursorRight => app.move_shelf_cursor(1),
        Action::CursorUp => app.move_shelf_cursor(-(SHELF_COLUMNS as isize)),
        Action::CursorDown => app.move_shelf_cursor(SHELF_COLUMNS as isize),
        Action::ToggleIngredient => app.toggle_under_cursor(),
        Action::SetHeat(heat) => app.set_heat(heat),
        Action::Cook => app.start_cooking(),
        Action::Serve => app.stop_and_serve(),
        Action::Reset => app.reset(),
        Action::Quit => app.quit(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match SkilletConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("skillet: {e}");
            std::process::exit(1);
        }
    };
    let judge_config = match config.judge_config() {
        Ok(judge_config) => judge_config,
        Err(e) => {
            eprintln!("skillet: {e}");
            std::process::exit(1);
        }
    };
    let mut app = App::new(judge_config);

    // A panic inside the draw loop must not leave the terminal raw.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let mut session = TerminalSession::new()?;
    let input = InputPump::spawn();
    let mut ticker = tokio::time::interval(FRAME_PERIOD);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut frame_count = 0usize;

    loop {
        ticker.tick().await;
        for action in input.drain_actions() {
            apply(&mut app, action);
        }
        app.pump_events();
        session.terminal.draw(|frame| draw(frame, &app, frame_count))?;
        frame_count = frame_count.wrapping_add(1);
        if app.should_quit() {
            break;
        }
    }

    tracing::info!("Kitchen closed");
    Ok(())
}
