//! Interactive terminal UI for browsing the roster.
//!
//! [`run`] launches the fetch and drives the event loop. The remaining
//! submodules implement state, key handling, rendering and the widgets and
//! themes that make up the screen.

mod actions;
pub mod components;
mod config;
mod input;
mod render;
mod runtime;
mod state;
pub mod style;

pub use config::UiConfig;
pub use input::SearchInput;
pub use runtime::run;
pub use state::App;
