//! Log subscriber setup for the binary
//!
//! Logs go to stderr so they never interleave with the game's prompts on
//! stdout. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// Default level is `warn` for this crate, `debug` when `verbose` is set.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "pico_fermi_bagel=debug"
    } else {
        "pico_fermi_bagel=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
