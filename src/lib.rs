//! Core crate exports for the `roster` terminal browser.
//!
//! The root module re-exports the store, the fetch client and the UI entry
//! point so that embedders can wire the application without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod images;
pub mod logging;
pub mod net;
pub mod search;
pub mod store;
pub mod types;
pub mod ui;

pub use net::{CharacterClient, DEFAULT_ENDPOINT, FetchError, FetchResult};
pub use store::{CharacterStore, StoreEvent};
pub use types::{CharacterRecord, DecodeMode, SearchOutcome};
pub use ui::style::{Theme, builtin_themes, default_theme};
pub use ui::{App, UiConfig, run};
