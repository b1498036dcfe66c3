#![warn(clippy::all, clippy::pedantic)]

use std::io::{self, Stdout};
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use coconut_catch::Time;
use coconut_catch::app::App;
use coconut_catch::config::{self, Config};
use coconut_catch::game::DEFAULT_FPS;
use coconut_catch::input::{self, FrameInput, HeldKeys};
use coconut_catch::{screen, ui};
use crossterm::{
    event,
    terminal::{disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement},
};
use log::{debug, error, info, warn};
use ratatui::{Terminal, prelude::*};

fn main() -> Result<()> {
    // Create log file and redirect stderr to it so logging never draws over the game
    let log_path = "coconut_catch.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    // Safety: dup2 on two valid, open descriptors owned by this process
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Coconut Catch");

    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };

    // Missing sprites are fatal; nothing has touched the terminal yet
    let app = App::from_config(&config).context("failed to load game assets")?;

    let fps = if config.display.fps == 0 {
        warn!("display.fps must be positive, using {DEFAULT_FPS}");
        DEFAULT_FPS
    } else {
        config.display.fps
    };
    let frame_duration = Duration::from_secs(1) / fps;

    enable_raw_mode()?;
    let enhanced_keys = matches!(supports_keyboard_enhancement(), Ok(true));
    debug!("Keyboard enhancement supported: {enhanced_keys}");

    let mut terminal = match open_terminal(enhanced_keys) {
        Ok(terminal) => terminal,
        Err(err) => {
            // Best effort, the setup error is returned below
            let _ = screen::leave_screen(&mut io::stdout(), enhanced_keys);
            let _ = disable_raw_mode();
            return Err(err);
        }
    };

    let res = run_app(&mut terminal, app, frame_duration);

    // Restore terminal
    disable_raw_mode()?;
    screen::leave_screen(terminal.backend_mut(), enhanced_keys)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }
    info!("Goodbye");

    res
}

fn open_terminal(enhanced_keys: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    screen::enter_screen(&mut stdout, enhanced_keys)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    frame_duration: Duration,
) -> Result<()> {
    let mut time = Time::new();
    let mut held = HeldKeys::default();

    // Flush anything typed before the game started
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }

    debug!("Frame loop started ({frame_duration:?} per frame)");

    loop {
        let frame_start = Instant::now();
        let size = terminal.size()?;
        let field = ui::field_area(Rect::new(0, 0, size.width, size.height)).unwrap_or_default();

        // Collect input until the frame deadline
        let mut frame_input = FrameInput::new();
        loop {
            let remaining = frame_duration.saturating_sub(frame_start.elapsed());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            let raw = event::read()?;
            if let Some(event) = input::translate(&raw, field, &mut held, Instant::now()) {
                frame_input.events.push(event);
            }
        }

        let now = Instant::now();
        frame_input.left_held = held.left_held(now);
        frame_input.right_held = held.right_held(now);

        time.update();
        let scene = app.update(&frame_input, time.take_millis());

        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|f| ui::render(f, &scene))?;
    }
}
