use anyhow::Result;
use clap::Parser;
use log::info;

use square::{config::CliConfig, Measurements, Square};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CliConfig::parse();

    let square = Square::try_new(config.side)?;
    info!("Measuring square with side {}", square.side());

    let report = Measurements::of(&square);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json()?)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
