//! Diagnostics for the `memento` binary, written to stderr so that command
//! output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Targets whose level follows `-v`; everything else stays silent.
const CRATE_TARGETS: &[&str] = &["memento"];

/// `warn` by default, one step louder per `-v`, `trace` from `-vvv` on.
const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. A set `RUST_LOG` replaces the `-v` level.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
