use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::model::config::LogConfig;

const LOG_ENV: &str = "MAILPILOT_LOG";

/// Where log output may go for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Terminal UI owns the screen: file only, or nothing
    FileOnly,
    /// CLI subcommands: stderr
    Stderr,
}

/// Install the global logger. `MAILPILOT_LOG` wins over the configured level.
/// Failing to open the log file leaves logging disabled rather than aborting.
pub fn init_logging(config: &LogConfig, sink: LogSink) {
    // CLI output stays quiet unless asked
    let fallback = match sink {
        LogSink::FileOnly => "info",
        LogSink::Stderr => "warn",
    };
    let default_level = config.level.as_deref().unwrap_or(fallback);
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, default_level));
    builder.format_timestamp_millis();

    match (sink, &config.file) {
        (_, Some(path)) => {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    builder.target(Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    if sink == LogSink::Stderr {
                        eprintln!("warning: could not open log file {}: {}", path.display(), e);
                    } else {
                        return;
                    }
                }
            }
        }
        (LogSink::FileOnly, None) => return,
        (LogSink::Stderr, None) => {
            builder.target(Target::Stderr);
        }
    }

    // A second init (tests, repeated runs in one process) is harmless
    let _ = builder.try_init();
}
