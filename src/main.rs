use clap::Parser;
use deckhand::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckhand", about = "Terminal flashcards with a deck review dashboard")]
struct Args {
    /// Directory of JSON deck files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Open the statistics screen for this deck id
    #[arg(long)]
    deck: Option<String>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_path = config::config_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("deckhand.log"))
        .unwrap_or_else(|| PathBuf::from("deckhand.log"));

    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Deckhand starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            log::warn!("{e}");
            config::DeckhandConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.data_dir.as_deref());
    log::info!("Using deck directory {}", resolved.data_dir.display());

    deckhand::tui::run(&resolved, args.deck)
}
