//! Name matching used to derive the filtered view of the roster.
//!
//! Matching is a plain case-insensitive substring test against the display
//! name. The result is always a subsequence of the input, so callers can keep
//! positions into the authoritative list instead of cloning records.

mod filter;

pub use filter::{Needle, filter, matching_indices};
