use anyhow::Result;
use clap::Command;

use sysmenu::core::config::Config;
use sysmenu::ui::run_menu_app;

fn main() -> Result<()> {
    // No options beyond --help and --version: launching enters the menu
    Command::new("sysmenu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal menu for host CPU, memory, disk, network and process metrics")
        .get_matches();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: using default configuration: {:#}", e);
        Config::default()
    });

    if let Err(e) = sysmenu::init_logging(&config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    log::info!("sysmenu {} starting", env!("CARGO_PKG_VERSION"));
    let result = run_menu_app(&config);
    log::info!("sysmenu exiting");

    result
}
