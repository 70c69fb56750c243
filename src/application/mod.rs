mod delay;
mod simulation;

pub use delay::FrameDelay;
pub use simulation::{RunSummary, Simulation, StopReason, Tick};
