use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::application::{FrameDelay, RunSummary, Simulation};
use crate::domain::initializer::{self, Source};
use crate::domain::Glyphs;
use crate::error::Result;
use crate::rendering::{InteractiveRenderer, PlainRenderer, Renderer};

/// How generations are shown, chosen once per run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Clear the console and print every generation as text
    #[default]
    Plain,
    /// Repaint in place with keyboard controls
    Interactive,
}

/// Everything a run needs, validated
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: Source,
    pub glyphs: Glyphs,
    pub mode: RenderMode,
    pub seed: Option<u64>,
    pub delay: FrameDelay,
}

impl Config {
    /// Random number generator for seeding: fixed when a seed is given,
    /// otherwise seeded from the OS.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Build the first generation, open the selected renderer and simulate
    /// until the board settles or the user quits. Every error is raised
    /// before the first frame is drawn.
    pub fn run(&self) -> Result<RunSummary> {
        let grid = initializer::build(&self.source, self.glyphs, &mut self.rng())?;

        let mut renderer: Box<dyn Renderer> = match self.mode {
            RenderMode::Plain => Box::new(PlainRenderer::stdout()),
            RenderMode::Interactive => Box::new(InteractiveRenderer::open(&grid)?),
        };
        info!("running {:?} with delay {:?}", self.mode, self.delay.duration());

        Ok(Simulation::new(grid)
            .with_delay(self.delay)
            .run(renderer.as_mut()))
    }
}
