use anyhow::Result;
use clap::Parser;
use flood_sens::config::AppConfig;
use flood_sens::digest::render_digest;
use flood_sens::{load_all_records, LevelCounts};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// flood-sens - Load flood monitoring station results and summarize them
#[derive(Parser, Debug, Clone)]
#[command(name = "flood-sens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding 1.json, 2.json, ... (overrides config)
    #[arg(long = "data-dir", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Highest document number to probe (overrides config)
    #[arg(short = 'n', long = "max-records", value_name = "N")]
    max_records: Option<u32>,

    /// Configuration file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the loaded records as JSON instead of the text digest
    #[arg(long = "json")]
    json: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut config = load_config(cli);

    if let Some(ref data_dir) = cli.data_dir {
        config.loader.data_dir = data_dir.clone();
    }
    if let Some(max_records) = cli.max_records {
        config.loader.max_records = max_records;
    }

    info!(
        "Loading station data from '{}' (up to {} documents)",
        config.loader.data_dir.display(),
        config.loader.max_records
    );
    let records = load_all_records(&config.loader);

    if records.is_empty() {
        error!(
            "No station data found. Make sure 1.json, 2.json, ... are in '{}'",
            config.loader.data_dir.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    let counts = LevelCounts::from_records(&records);
    info!(
        "Loaded {} stations: {} flood, {} suspicious, {} normal",
        counts.total, counts.flood, counts.suspicious, counts.normal
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let now = chrono::Local::now().naive_local();
        print!("{}", render_digest(&records, &config.region, now));
    }

    Ok(ExitCode::SUCCESS)
}

/// Load configuration - from the given file if specified, otherwise from the default location
fn load_config(cli: &Cli) -> AppConfig {
    if let Some(ref path) = cli.config {
        match AppConfig::load_from_path(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path.display());
                return config;
            }
            Err(e) => warn!("Failed to load config file '{}': {}", path.display(), e),
        }
    }

    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
