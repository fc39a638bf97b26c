//! Terminal user interface rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Per-region renderers
//! - [`helpers`]: Cursor positioning, truncation and boxes
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ConfirmInfo, DisplayItem, EditorInfo, EmptyState, FooterInfo, Layout, SearchBarInfo, SidebarInfo,
    StatusInfo, UIViewModel,
};
