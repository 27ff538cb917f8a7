use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for a TUI process: compact output on stderr so the
/// quiz keeps stdout, filter overridable via `RUST_LOG`.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "trivia_quiz=debug"
    } else {
        "trivia_quiz=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
