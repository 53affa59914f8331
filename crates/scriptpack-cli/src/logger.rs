//! Logging setup for the CLI.
//!
//! Logs go to stderr so `resolve` output on stdout stays machine-readable.
//!
//! The level is determined in this order:
//! 1. `--verbose`: DEBUG for scriptpack crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: WARN for scriptpack crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "scriptpack_config=debug,scriptpack_cli=debug";
const QUIET_FILTER: &str = "scriptpack_config=error,scriptpack_cli=error";
const DEFAULT_FILTER: &str = "scriptpack_config=warn,scriptpack_cli=warn";

pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether stderr output should be colored.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` enables them even without a
/// terminal, otherwise terminal capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
