//! Tracing setup
//!
//! The TUI owns stdout, so events go to a log file in the base directory.
//! The filter comes from `EXPENSE_TRACKER_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Environment variable holding the log filter
pub const LOG_FILTER_ENV: &str = "EXPENSE_TRACKER_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, appending to the log file
///
/// Calling this more than once is harmless; only the first call installs.
pub fn init_tracing(paths: &TrackerPaths) -> TrackerResult<()> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();

        tracing::info!("expense tracker tracing initialized");
    });

    Ok(())
}
