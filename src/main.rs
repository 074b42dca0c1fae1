use std::path::Path;

use clap::Parser;
use mailpilot::cli::commands::Cli;
use mailpilot::cli::handlers;
use mailpilot::io::config_io;
use mailpilot::io::logging::{LogSink, init_logging};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI; the screen is taken, so log to file only
            init_logging(&config.log, LogSink::FileOnly);
            mailpilot::tui::run(&config)
        }
        Some(command) => {
            init_logging(&config.log, LogSink::Stderr);
            handlers::dispatch(command, cli.json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
