//! CLI entry point: consolidate a quote file and print the reports.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use log::info;

use spreadbook::Config;
use spreadbook::engine;

#[derive(Parser)]
#[command(name = "spreads")]
#[command(about = "Consolidate bid/ask quotes into per-symbol spread reports")]
#[command(version)]
struct Cli {
    /// Quote file: one `timestamp;symbol;bid;ask` record per line
    file: PathBuf,

    /// Path to an optional TOML config (delimiter, decimal separator)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let started = Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = engine::run(&cli.file, &config, &mut out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    info!("completed in {} ms", started.elapsed().as_millis());
}
