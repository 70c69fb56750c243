// Domain layer - grid, rules, patterns and seeding
pub mod domain;

// Application layer - the generation loop and its pacing
pub mod application;

// Infrastructure layer - console output, keyboard, command line
pub mod rendering;
pub mod input;
pub mod cli;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Glyphs, Grid, Pattern, Source, presets};
pub use application::{FrameDelay, RunSummary, Simulation, StopReason};
pub use config::{Config, RenderMode};
pub use error::{Error, PatternError, Result};
