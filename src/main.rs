use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tic_tac_toe::config::{AppConfig, LoggingConfig};
use tic_tac_toe::game::Mark;
use tic_tac_toe::ui::App;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe in the terminal with the mouse.
#[derive(Parser)]
#[command(name = "tic_tac_toe", about = "Two-player tic-tac-toe for the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tic_tac_toe.toml")]
    config: PathBuf,

    /// Override the mark that moves first
    #[arg(long, value_enum)]
    start: Option<StartMark>,

    /// Override the log file location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// Command-line spelling of the starting mark.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartMark {
    Nought,
    Cross,
}

impl From<StartMark> for Mark {
    fn from(start: StartMark) -> Self {
        match start {
            StartMark::Nought => Mark::Nought,
            StartMark::Cross => Mark::Cross,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(start) = cli.start {
        config.game.start = start.into();
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = log_file;
    }

    init_logging(&config.logging)?;
    info!(?config, "Configuration loaded");

    let mut app = App::new(&config);
    let res = run_terminal(&mut app);
    if let Err(err) = &res {
        error!(error = %err, "Game loop failed");
    }
    res.context("running terminal UI")
}

/// Send logs to a file so they do not draw over the board.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(&logging.file)
        .with_context(|| format!("creating log file {}", logging.file.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.filter)
            .with_context(|| format!("parsing log filter '{}'", logging.filter))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn run_terminal(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
