//! SACCO portal - terminal member portal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;

/// Terminal member portal for a savings and credit cooperative
#[derive(Parser, Debug)]
#[command(name = "sacco")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding `.sacco/config.toml` and relative fixture paths
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Read settings from this file instead of `.sacco/config.toml`
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default `.sacco/config.toml` and exit
    #[arg(long)]
    init: bool,

    /// Print the dashboard statistics as JSON and exit
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    let base_dir = args
        .dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let path = sacco_portal::init_config(&base_dir)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if args.stats {
        let stats = sacco_portal::dashboard_stats(&base_dir, args.config.as_deref()).await?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    sacco_portal::run(&base_dir, args.config.as_deref()).await?;
    Ok(())
}
