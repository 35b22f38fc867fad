//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never touches the terminal or spawns processes. It returns
//! a `Vec<Action>` and the runtime executes each one in order, feeding results
//! back as events (see [`Event::EditorExited`](crate::app::Event::EditorExited)).
//!
//! # Example
//!
//! ```rust
//! use notedrill::app::Action;
//! use std::path::PathBuf;
//!
//! let actions = vec![Action::OpenEditor {
//!     paths: vec![PathBuf::from("/notes/Maths.md")],
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::path::PathBuf;

/// Commands emitted by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leaves the event loop and exits with status 0.
    Quit,

    /// Suspends the UI and runs the editor on the given paths.
    ///
    /// `paths` is never empty. Control returns to the loop once the editor
    /// exits, whatever its exit status.
    OpenEditor {
        /// Note paths passed to the editor as positional arguments.
        paths: Vec<PathBuf>,
    },
}
