use tracing_subscriber::EnvFilter;

/// Missing sources and failed encodes log below this level; their status
/// lines on stdout are the report.
pub const DEFAULT_FILTER: &str = "warn";

/// `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
