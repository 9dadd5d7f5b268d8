//! Grand Azure Hotel reservation manager.
//!
//! ```sh
//! # Defaults: ./config/*.toml, reservations.json in the working directory
//! hotel
//!
//! # Keep data elsewhere
//! hotel --data-file /var/lib/hotel/reservations.json
//!
//! # Verbose logs on stderr
//! RUST_LOG=hotel_booking=debug hotel
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use hotel_booking::BookingManager;
use hotel_store::{Config, JsonFileStore, ReportWriter};
use hotel_cli::Console;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Menu-driven hotel reservation manager.
#[derive(Parser, Debug)]
#[command(name = "hotel", version, about)]
struct Cli {
    /// Directory holding default.toml / <RUN_MODE>.toml / local.toml.
    #[arg(short, long, default_value = "config", env = "HOTEL_CONFIG_DIR")]
    config_dir: PathBuf,

    /// Override the reservation snapshot file.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Override the exported report file.
    #[arg(long)]
    report_file: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        // stdout belongs to the menu
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::load_from(&cli.config_dir) {
        Ok(cfg) => {
            init_tracing(cli.log_level.as_deref().unwrap_or(&cfg.logging.level));
            info!("Configuration loaded from {}", cli.config_dir.display());
            cfg
        }
        Err(e) => {
            init_tracing(cli.log_level.as_deref().unwrap_or("info"));
            error!("Failed to load config from {}: {}", cli.config_dir.display(), e);
            error!("Using default configuration.");
            Config::default()
        }
    };

    if let Some(path) = cli.data_file {
        info!("CLI override: data_file = {}", path.display());
        config.storage.data_file = path;
    }
    if let Some(path) = cli.report_file {
        info!("CLI override: report_file = {}", path.display());
        config.storage.report_file = path;
    }

    let store = JsonFileStore::new(&config.storage.data_file);
    let (manager, summary) = BookingManager::open(
        Box::new(store),
        &config.booking.id_prefix,
        config.booking.id_base,
    );

    if let Some(reason) = &summary.read_error {
        println!("  Could not load saved data: {}", reason);
    } else if summary.loaded > 0 {
        println!("  Loaded {} reservation(s) from file.", summary.loaded);
    }
    if !summary.conflicts.is_empty() {
        warn!("{} conflict(s) found in saved reservations", summary.conflicts.len());
        println!(
            "  Warning: {} inconsistent record(s) in saved data, see log.",
            summary.conflicts.len()
        );
    }

    let reports = ReportWriter::new(
        &config.storage.report_file,
        config.hotel.currency_symbol.clone(),
    );
    let stdin = io::stdin();
    let mut console = Console::new(manager, reports, config.hotel, stdin.lock(), io::stdout());
    console.run()?;

    Ok(())
}
