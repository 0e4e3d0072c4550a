//! Types shared across the store, the network layer and the user interface.

mod character;
mod outcome;

pub use character::{CharacterRecord, DecodeMode, decode_characters};
pub use outcome::SearchOutcome;
