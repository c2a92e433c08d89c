//! Tracing setup for the binary.
//!
//! Logs go to stderr so stdout stays clean for selections and JSON output.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a `-v` count
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "catpick=warn",
        1 => "catpick=debug",
        _ => "catpick=trace",
    }
}

/// Initialize tracing based on CLI flags. `RUST_LOG` wins when set.
pub fn init_tracing(verbose: u8, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
