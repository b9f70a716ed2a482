//! Kōnane - terminal front end
//!
//! Plays Kōnane on a terminal board, replays scripted click sequences, and
//! prints the preview board.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Flow};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use konane::{GameSession, GameState, Position};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { positions } => {
            init_stderr_logging(&config);
            run_replay(positions)
        }
        Command::Preview => {
            init_stderr_logging(&config);
            print_state(&konane::preview_snapshot());
            Ok(())
        }
    }
}

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

fn init_stderr_logging(config: &TuiConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();
}

/// Plays on the terminal board until the user quits.
fn run_play(config: TuiConfig) -> Result<()> {
    // Logs go to a file so they don't tear the board
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Kōnane terminal board");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            info!("Quitting");
            return Ok(());
        }
    }
}

/// Feeds clicks to a fresh game and prints where they lead.
#[instrument(skip(positions), fields(clicks = positions.len()))]
fn run_replay(positions: Vec<Position>) -> Result<()> {
    let mut session = GameSession::from_state(konane::new_game());

    for position in positions {
        let kind = session.interact(position);
        println!("{:>5}  {}", position, kind);
    }

    println!();
    for (i, action) in session.log().iter().enumerate() {
        println!("{:>3}. {}", i + 1, action);
    }
    println!();
    print_state(session.state());
    Ok(())
}

fn print_state(state: &GameState) {
    println!("{}", state.board());
    println!();
    println!("{}", state.status());
}
