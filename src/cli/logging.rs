use tracing_subscriber::EnvFilter;

use crate::cli::global::GlobalArgs;

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the
/// `-v`/`-q` flags.
pub fn setup_logging(global: &GlobalArgs) {
    let level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
