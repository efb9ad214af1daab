mod geometry;
mod refresh_bar;

pub use geometry::*;
pub use refresh_bar::*;
