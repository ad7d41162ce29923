//! Address Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout. Logs go to stderr.

use address_book::{Config, JsonFileRepository, Session, SystemClock};
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line contact manager with birthday reminders
#[derive(Parser, Debug)]
#[command(name = "address-book")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address book data file (default: $ADDRESS_BOOK_FILE or addressbook.json)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let data_file = cli.file.unwrap_or_else(|| config.data_file.clone());
    info!("Using address book file: {}", data_file.display());

    let repo = JsonFileRepository::new(&data_file);
    let mut session = Session::open(
        Box::new(repo),
        Box::new(SystemClock),
        config.birthday_window_days,
    )
    .with_context(|| format!("Failed to load address book from {}", data_file.display()))?;

    if let Err(e) = session.run(io::stdin().lock(), io::stdout().lock()) {
        error!("Session ended with an error: {}", e);
        return Err(e.into());
    }

    info!("Address book saved to {}", data_file.display());
    Ok(())
}
