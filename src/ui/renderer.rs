//! Top-level rendering coordinator.
//!
//! Rendering is two steps:
//!
//! 1. **View model computation**: `AppState` → `UIViewModel`
//! 2. **Component rendering**: `UIViewModel` → ANSI frame
//!
//! The frame is returned rather than printed so the caller controls when and
//! where it is written.

use crate::app::AppState;
use crate::ui::components;

/// Renders the application into an ANSI frame for a `rows` x `cols` terminal.
///
/// ```rust
/// use simple_notes::app::AppState;
/// use simple_notes::storage::StorageMode;
/// use simple_notes::ui::{render, Theme};
///
/// let state = AppState::new(StorageMode::Local, Theme::default());
/// let frame = render(&state, 24, 80);
/// assert!(frame.contains("Select a note"));
/// ```
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme)
}
