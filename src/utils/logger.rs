use crate::utils::error::{Result, SignupError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output on stderr.
    Compact,
    /// One JSON object per event, fields flattened, for log collectors.
    Json,
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "geo_signup=debug,warn"
    } else {
        "geo_signup=info,warn"
    }
}

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
pub fn init_logger(format: LogFormat, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let layer = fmt::layer()
        .with_target(verbose)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json().flatten_event(true)).try_init(),
    };
    installed.map_err(|e| SignupError::config("logging", e.to_string()))
}
