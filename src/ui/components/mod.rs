//! Widgets that make up the roster screen.

mod portrait;
mod prompt;
mod roster;

pub use portrait::{PortraitContext, render_portrait};
pub use prompt::{ProgressState, PromptContext, render_prompt, render_title};
pub use roster::{RosterContext, match_span, render_roster, rows_visible};
