//! Main application entry point.

use clap::Parser;
use shapetree_app::{App, AppConfig, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::init();
    log::info!("Starting shapetree");

    let result = AppConfig::from_cli(cli).and_then(|config| App::with_config(config).run());
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
