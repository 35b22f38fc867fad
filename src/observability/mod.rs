//! File-based tracing for a program that owns the terminal.
//!
//! The picker draws on the alternate screen, so log output can never go to
//! stdout or stderr. Instead a `tracing-subscriber` fmt layer writes plain text
//! lines to a size-rotated file:
//!
//! ```text
//! tracing macros → EnvFilter(NOTEDRILL_LOG) → fmt layer → FileWriter → notedrill.log
//! ```
//!
//! # Features
//!
//! - **Opt-in**: nothing is recorded unless `NOTEDRILL_LOG` is set
//! - **File location**: `$XDG_DATA_HOME/notedrill/notedrill.log`, or
//!   `~/.local/share/notedrill/notedrill.log`
//! - **Automatic rotation**: files rotate at 10 MiB with 3 backups
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
