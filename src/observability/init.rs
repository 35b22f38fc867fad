//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "notedrill.log";

/// Initializes the tracing subscriber writing to the rotating log file.
///
/// Tracing is only enabled when `NOTEDRILL_LOG` is set; its value is used as
/// an `EnvFilter` directive (e.g. `debug` or `notedrill::app=trace`). Output
/// never goes to the terminal, since the picker owns the screen.
///
/// # Returns
///
/// The log file path when tracing was enabled, `None` otherwise.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips tracing if the directory cannot be created (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let filter = config.log_filter.as_deref()?;
    let data_dir = config.data_dir.as_ref()?;

    if std::fs::create_dir_all(data_dir).is_err() {
        return None;
    }

    let log_file = data_dir.join(LOG_FILE_NAME);
    let fmt_layer = fmt::layer()
        .with_writer(FileWriter::new(log_file.clone()))
        .with_ansi(false)
        .with_target(true)
        .log_internal_errors(false);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(fmt_layer);

    let _ = subscriber.try_init();

    tracing::debug!(log_file = %log_file.display(), "tracing initialized");
    Some(log_file)
}
