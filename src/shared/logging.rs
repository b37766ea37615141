use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter (EnvFilter syntax).
pub const LOG_ENV_VAR: &str = "GODI_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber, writing to stderr.
///
/// Stdout is reserved for the dependency listing, so diagnostics never go there.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
