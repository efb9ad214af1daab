mod animator;
mod bar;
mod clock;
mod element;
mod settings;
mod state;

pub use animator::*;
pub use bar::{DEFAULT_DURATION, DEFAULT_LOADING_WIDTH, RefreshBar, TRANSITION_DURATION};
pub use clock::*;
pub use element::*;
pub use settings::*;
pub use state::*;
