use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "LINGO_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,lingo=debug" } else { "warn" }
}

/// Install the stderr log subscriber.
///
/// `LINGO_LOG` takes precedence over the verbose flag. Calling this twice is a
/// no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
