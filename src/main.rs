use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use connect_four::config::{AppConfig, UiConfig};
use connect_four::console::Console;
use connect_four::game::{GameEngine, Player};
use connect_four::logging::{self, Fallback};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Play in the line-oriented text console instead of the full-screen UI
    #[arg(long)]
    console: bool,

    /// Override Player One's name
    #[arg(long)]
    player_one: Option<String>,

    /// Override Player Two's name
    #[arg(long)]
    player_two: Option<String>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player_one {
        config.players.one = name;
    }
    if let Some(name) = cli.player_two {
        config.players.two = name;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    config.validate().context("invalid configuration")?;

    let fallback = if cli.console {
        Fallback::Stderr
    } else {
        Fallback::Discard
    };
    logging::init(&config.logging, fallback).context("initializing logging")?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let engine = GameEngine::with_names(config.players.names());
    if cli.console {
        run_console(engine)
    } else {
        run_tui(engine, &config.ui)
    }
}

fn run_console(engine: GameEngine) -> Result<()> {
    info!("starting console session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(engine, stdin.lock(), stdout.lock());
    let summary = console.run().context("console session failed")?;

    if !summary.results.is_empty() {
        let (engine, mut out) = console.into_parts();
        writeln!(
            out,
            "{} {} - {} {} ({} drawn)",
            engine.player_name(Player::One),
            summary.wins(Player::One),
            summary.wins(Player::Two),
            engine.player_name(Player::Two),
            summary.draws()
        )?;
    }
    Ok(())
}

fn run_tui(engine: GameEngine, ui_config: &UiConfig) -> Result<()> {
    info!("starting terminal UI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(engine, ui_config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
