//! Infrastructure layer for filesystem, process, and environment interactions.
//!
//! - [`scan`]: recursive markdown enumeration under the notes root
//! - [`editor`]: external editor launching
//! - [`paths`]: tilde expansion and the log data directory

pub mod editor;
pub mod paths;
pub mod scan;

pub use editor::{EditorLauncher, ProcessLauncher, DEFAULT_EDITOR};
pub use paths::{expand_tilde, get_data_dir};
pub use scan::enumerate_notes;
