//! Logging bootstrap for the CLI.

use tracing_subscriber::EnvFilter;

/// Configure and install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the `-v` count raises
/// the level from the default `info` to `debug` (`-vv` for `trace`).
/// Diagnostics go to stderr so summary output on stdout stays clean.
pub(crate) fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    // Installation fails when a subscriber is already set (tests); that is
    // not a reason to abort the command.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

const fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_level(0), "info");
        assert_eq!(default_level(1), "debug");
        assert_eq!(default_level(2), "trace");
        assert_eq!(default_level(9), "trace");
    }
}
