//! Interactive reminder manager.
//!
//! # Responsibility
//! - Resolve configuration from the working directory and start logging.
//! - Own the single store instance and hand it to the menu loop.

mod console;
mod render;

use console::Console;
use log::{error, info};
use reminder_core::{init_logging, open_store, AppConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match AppConfig::from_current_dir() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Logging is optional; the tool keeps working without it.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut store = open_store(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match console.run(&mut store) {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={}", err);
            eprintln!("terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
