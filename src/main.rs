mod config;
mod consts;
mod error;
mod events;
mod logging;
mod session;
mod ui;
mod widget;

use crate::config::{Config, get_config_path};
use crate::session::{SessionOptions, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Simulated login form with lockout and failure injection
struct Args {
    /// Path to the preferences file. Defaults to ~/.login-lockout/config.json
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive login screen
    Start {
        /// Seed for the failure-injection random source
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Start with failure injection enabled
        #[arg(long)]
        failure_injection: bool,

        /// Disable background colors
        #[arg(long)]
        no_background: bool,
    },
    /// Read commands from stdin and print events, without a terminal UI
    Headless {
        /// Seed for the failure-injection random source
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Start with failure injection enabled
        #[arg(long)]
        failure_injection: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };
    let config = Config::load_or_default(&config_path)?;

    match args.command {
        Command::Start {
            seed,
            failure_injection,
            no_background,
        } => {
            let session = setup_session(
                &config,
                SessionOptions {
                    seed,
                    failure_injection,
                    no_background,
                },
            );
            run_tui_mode(session)
        }
        Command::Headless {
            seed,
            failure_injection,
        } => {
            logging::init_headless_logger();
            let session = setup_session(
                &config,
                SessionOptions {
                    seed,
                    failure_injection,
                    no_background: true,
                },
            );
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_headless_mode(session, stdin.lock(), &mut stdout)?;
            Ok(())
        }
    }
}
