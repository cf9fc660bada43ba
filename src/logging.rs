//! Structured logging setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. The CLI calls [`init_tracing`] once at startup.
//!
//! Log lines go to stderr so `--stdout` output stays clean. The filter is
//! taken from `RUST_LOG` or `CHATCLEAN_LOG` when set, otherwise from the
//! command line.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize structured logging based on CLI arguments.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = filter_directive(verbose, log_level);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("CHATCLEAN_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Resolves the filter directive from CLI arguments.
///
/// A bare level applies to this crate only; anything containing `=` is
/// passed through as a full directive.
fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("chatclean={}", level),
        (true, None) => "chatclean=debug".to_string(),
        (false, None) => "chatclean=warn".to_string(),
    }
}
