//! Application layer: the interaction state machine.
//!
//! This module sits between the terminal runtime and the domain and
//! infrastructure layers. It implements the unidirectional flow the rest of the
//! crate is built around:
//!
//! ```text
//! Key press → Event → handle_event → State mutation → Actions → Runtime
//!                ↑                                               │
//!                └──────────── EditorExited ─────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Fuzzy matching of notes against a query
//! - [`handler`]: Event processing and mode dispatch
//! - [`input`]: Pending text input for the two text modes
//! - [`modes`]: The input mode enum
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use input::TextInput;
pub use modes::InputMode;
pub use state::AppState;
