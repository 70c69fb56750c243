mod cell;
mod grid;
mod rules;
pub mod patterns;
pub mod initializer;

pub use cell::Cell;
pub use grid::{Glyphs, Grid};
pub use rules::{compute_next_generation, next_state};
pub use patterns::{Pattern, presets};
pub use initializer::Source;
