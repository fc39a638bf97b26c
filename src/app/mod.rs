//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key press → Event → handle_event → AppState mutations → Actions
//!                 ↑                                          ↓
//!                 └────────── WorkerResponse ←── NotesWorker ┘
//! ```
//!
//! - [`actions`]: Side effects emitted by the reducer
//! - [`controller`]: Executes actions and feeds worker completions back
//! - [`handler`]: The reducer
//! - [`keymap`]: Key bindings
//! - [`modes`]: Keyboard focus
//! - [`state`]: State container and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::NotesController;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::Focus;
pub use state::{AppState, PendingConfirm, BACKEND_ADVISORY};
