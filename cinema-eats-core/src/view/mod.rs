//! The view controller and its render-facing types.

mod cards;
mod controller;
mod intent;
mod runtime;

pub use cards::{
    Highlighted, RenderFrame, SceneCard, SearchStatus, Suggestion,
    SuggestionPanel, ViewMode, preview,
};
pub use controller::ViewController;
pub use intent::{Effect, Intent};
pub use runtime::{RenderTarget, run_view_loop};
