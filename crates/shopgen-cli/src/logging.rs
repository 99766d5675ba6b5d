use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::error::{CliError, CliResult};

/// Set to `json` to emit one JSON object per event.
pub const LOG_FORMAT_ENV: &str = "SHOPGEN_LOG_FORMAT";

/// Install the global subscriber. Events go to stderr so stdout stays
/// reserved for command output.
pub fn init_logging() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|value| value.eq_ignore_ascii_case("json"));

    let result = if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    } else {
        let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };

    result.map_err(|err| CliError::Logging(err.to_string()))
}
