use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Installs the `color_eyre` panic and error report handlers.
///
/// # Errors
///
/// Returns an error if a handler has already been installed.
pub fn init_error_formatter() -> color_eyre::Result<()> {
    color_eyre::install()
}
