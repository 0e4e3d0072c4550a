//! HTTP access to the character roster.
//!
//! [`CharacterClient`] performs the single GET and decodes the payload.
//! [`spawn_fetch`] runs it away from the UI thread and hands the result back
//! over a channel that the event loop drains between frames.

mod client;
mod error;
mod worker;

pub use client::{CharacterClient, DEFAULT_ENDPOINT};
pub use error::FetchError;
pub use worker::{FetchResult, fetch_blocking, spawn_fetch};

pub(crate) use worker::current_thread_runtime;
