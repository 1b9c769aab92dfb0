//! @acp:module "Logging"
//! @acp:summary "tracing subscriber setup for the CLI"
//! @acp:domain cli
//! @acp:layer infra

use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default filter directive
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; logs go to stderr so stdout stays clean
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    tracing::debug!("Logging initialized at verbosity {}", verbose);
}
