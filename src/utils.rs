use std::io;

use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so that stdout only
/// ever carries the report; the filter comes from `RUST_LOG` and defaults
/// to `warn`.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second]"
        )))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Program name as invoked, for the usage text.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "logtally".to_string())
}
