//! mood-tui - A terminal mood tracker
//!
//! This is the main entry point for the mood-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;

/// Log how you feel, straight from the terminal
#[derive(Parser, Debug)]
#[command(name = "mood-tui")]
#[command(about = "Terminal mood tracker with notes, history and statistics")]
struct Args {
    /// Config file (default: ~/.mood-tui/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file, overriding the configured one
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(Config::default_path)
            .context("No config path given and $HOME is not set")?;
        Config::default().save(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(log_file) = args.log_file {
        config.log_file = Some(log_file);
    }
    logging::init(&config, &config.log_path())?;
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "starting mood-tui");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::warn!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
