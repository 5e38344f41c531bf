/// osu4cros - osu!(lazer) installer for ChromeOS
///
/// Meant to run inside the Steam (Borealis) guest. It performs:
/// 1. Host verification (crosvm guest, not the Crostini container)
/// 2. Download of the latest osu!(lazer) AppImage
/// 3. Extraction and installation into the home directory
/// 4. Registration of a desktop entry for the App Launcher

// Module declarations
mod config;
mod error;
mod execution;
mod install;
mod network;
mod utils;
mod verification;

use std::io;
use std::process::exit;

use config::load_config;
use utils::{init_logging, install_interrupt_handler};

fn main() {
    // Ctrl+C anywhere below ends with a goodbye instead of a raw signal death
    if let Err(e) = install_interrupt_handler() {
        eprintln!("⚠️  Failed to install Ctrl+C handler: {}", e);
    }

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            exit(1);
        }
    };

    init_logging(&config.log_level);
    tracing::debug!("Configuration: {:?}", config);

    let stdin = io::stdin();
    match execution::execute_sync(&config, &mut stdin.lock()) {
        Ok(_) => exit(0),
        Err(e) if e.is_environment_mismatch() => {
            println!("{}", e);
            exit(1);
        }
        Err(e) => {
            tracing::error!("{:?}", e);
            eprintln!("❌ {}", e);
            exit(1);
        }
    }
}
