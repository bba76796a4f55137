#[path = "modules/app.rs"]
mod app;
#[path = "modules/cli.rs"]
mod cli;
#[path = "modules/error.rs"]
mod error;
#[path = "modules/io.rs"]
mod io;

use chemxplore::DisplayState;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

/// Exit code when the calculation rejected its input.
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match app::run(args) {
        Ok(DisplayState::Success) => ExitCode::SUCCESS,
        Ok(DisplayState::Error) => ExitCode::from(EXIT_INVALID_INPUT),
        Err(e) => {
            eprintln!("Error: {}", e);

            let mut source = e.source();
            while let Some(s) = source {
                eprintln!("Caused by: {}", s);
                source = s.source();
            }

            ExitCode::FAILURE
        }
    }
}
