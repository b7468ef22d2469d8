use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

use crate::args::{LogArgs, LogFormat};

/// `RUST_LOG` wins over the configured level when it is set.
pub fn env_filter(log: &LogArgs) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing(log: &LogArgs) -> Result<(), TryInitError> {
    let base = fmt::layer().with_target(true);
    let fmt_layer = match log.format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Text => base.boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter(log))
        .with(fmt_layer)
        .try_init()
}
