//! Tracing setup
//!
//! Logs always go to stderr so stdout carries nothing but result lines.
//! `RUST_LOG` takes precedence; `--debug` only raises the fallback level.

pub fn init_tracing(debug_enabled: bool) {
    let fallback = if debug_enabled {
        "info,pacsweep=debug,pacsweep_walker=debug,pacsweep_alpm=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();
}
