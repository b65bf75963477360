//! Two-player chess in the terminal.
//!
//! Players alternate typing moves as pairs of squares. The game ends when a
//! king is captured.

mod config;
mod input;
mod render;
mod session;

use clap::Parser;
use config::ConsoleConfig;
use session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess in the terminal")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value_os_t = ConsoleConfig::default_path())]
    config: PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Draw the board without file letters and rank numbers
    #[arg(long)]
    no_coordinates: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.no_coordinates {
        config.display.coordinates = false;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(path = ?cli.config, "configuration loaded");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config.display);
    let outcome = session.run()?;
    tracing::info!(?outcome, side_to_move = %session.game().side_to_move(), "session finished");

    Ok(())
}
