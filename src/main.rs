//! Pong entry point
//!
//! Parses the launch flags, runs the game and maps the outcome to an exit code.

use std::process::ExitCode;

use pong::platform;
use pong::{ExitStatus, LaunchOptions};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    log::debug!("Total arguments: {}", args.len());

    let options = LaunchOptions::from_args(args);
    if options.help {
        println!("{}", LaunchOptions::help_text());
        return ExitStatus::Help.into();
    }

    log::info!("Pong starting...");
    options.log_summary();

    match platform::run(options) {
        Ok(score) => {
            match serde_json::to_string(&score) {
                Ok(json) => log::info!("Final score: {}", json),
                Err(e) => log::warn!("Could not serialize final score: {}", e),
            }
            ExitStatus::Clean.into()
        }
        Err(err) => {
            log::error!("{}", err);
            err.exit_status().into()
        }
    }
}
