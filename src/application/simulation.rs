use std::thread;

use log::{debug, info};

use super::FrameDelay;
use crate::domain::{Grid, compute_next_generation};
use crate::rendering::{Renderer, Signal};

/// Why a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A generation changed no cell, every later one would be identical
    Stable,
    /// The renderer asked to quit
    Quit,
}

/// Outcome of one step of the loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Advanced { changed: usize },
    Stopped(StopReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

/// Simulation drives the board from one generation to the next.
/// It owns the grid for the whole run and hands it to the renderer
/// once per generation.
pub struct Simulation {
    grid: Grid,
    delay: FrameDelay,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            delay: FrameDelay::default(),
            generation: 0,
        }
    }

    /// Start with a delay other than the default (builder pattern)
    pub fn with_delay(mut self, delay: FrameDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn delay(&self) -> FrameDelay {
        self.delay
    }

    /// Generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Draw the current generation, then compute and commit the next one.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Tick {
        if renderer.draw(&self.grid, &mut self.delay) == Signal::Quit {
            return Tick::Stopped(StopReason::Quit);
        }

        compute_next_generation(&mut self.grid);
        let changed = self.grid.commit_generation();
        self.generation += 1;
        debug!("generation {}: {changed} cells changed", self.generation);

        if changed == 0 {
            Tick::Stopped(StopReason::Stable)
        } else {
            Tick::Advanced { changed }
        }
    }

    /// Tick until the board settles or the renderer quits,
    /// sleeping for the current delay between generations.
    pub fn run<R: Renderer + ?Sized>(mut self, renderer: &mut R) -> RunSummary {
        let reason = loop {
            match self.tick(renderer) {
                Tick::Advanced { .. } => thread::sleep(self.delay.duration()),
                Tick::Stopped(reason) => break reason,
            }
        };

        let summary = RunSummary {
            generations: self.generation,
            population: self.grid.population(),
            reason,
        };
        info!(
            "stopped ({:?}) after {} generations, {} cells alive",
            summary.reason, summary.generations, summary.population
        );
        summary
    }
}
