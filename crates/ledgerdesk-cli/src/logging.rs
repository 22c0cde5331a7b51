use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LEDGERDESK_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Diagnostics go to stderr so stdout stays parseable under `--json`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
