//! Tracing subscriber initialisation.
//!
//! | Flag(s) | Filter level |
//! |---------|--------------|
//! | (none)  | INFO         |
//! | `-v`    | DEBUG        |
//! | `-vv`   | TRACE        |
//!
//! `RUST_LOG` overrides the flag if set. Output goes to stderr so stdout
//! carries only the final status line.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
