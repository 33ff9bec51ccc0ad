//! Signup TUI - terminal registration form
//!
//! A Ratatui-based form with two interchangeable validation back ends:
//! hand-written rules and a declarative schema. Valid submissions are logged.

mod app;
mod cli;
mod config;
mod controller;
mod logging;
mod sink;
mod state;
mod ui;
mod validation;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::{AppConfig, Settings};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sink::LogSink;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli)?;

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let settings = Settings::resolve(&config, &cli);

    if cli.write_config {
        return write_config(settings, cli.config.clone().or_else(AppConfig::config_path));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let sink = Box::new(LogSink::new(settings.redact_passwords));
    let mut app = App::new(settings, sink);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn write_config(settings: Settings, path: Option<PathBuf>) -> Result<()> {
    let path = path.context("no config directory available; pass --config")?;
    AppConfig::from(settings).save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
