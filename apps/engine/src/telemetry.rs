use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global JSON subscriber for binaries embedding the engine.
///
/// `RUST_LOG` overrides the default `info` filter. Calling this twice is a no-op.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fodinha_engine=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    // A host application may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
