//! Building the first generation.
//!
//! A run starts either from a randomly seeded board, from a pattern read
//! out of a text source, or from one of the built-in presets.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::Rng;

use super::patterns::presets::Preset;
use super::{Glyphs, Grid, Pattern};
use crate::error::{Error, Result};

/// Path value that selects standard input as the pattern source
pub const STDIN_PATH: &str = "-";

/// Blank cells kept around a preset when no canvas size is given
pub const PRESET_MARGIN: usize = 5;

/// Where the first generation comes from
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Random {
        rows: usize,
        columns: usize,
        probability: f64,
    },
    Pattern {
        path: PathBuf,
    },
    Preset {
        preset: Preset,
        canvas: Option<(usize, usize)>,
    },
}

/// Build the grid described by `source`
pub fn build<R: Rng>(source: &Source, glyphs: Glyphs, rng: &mut R) -> Result<Grid> {
    match source {
        Source::Random {
            rows,
            columns,
            probability,
        } => from_random(*rows, *columns, *probability, glyphs, rng),
        Source::Pattern { path } => from_pattern(read_lines(path)?, glyphs),
        Source::Preset { preset, canvas } => from_preset(preset, *canvas, glyphs),
    }
}

/// Seed every cell independently: alive when a uniform draw from [0, 1)
/// is at most `probability`.
pub fn from_random<R: Rng>(
    rows: usize,
    columns: usize,
    probability: f64,
    glyphs: Glyphs,
    rng: &mut R,
) -> Result<Grid> {
    if !(probability > 0.0 && probability < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "probability must be between 0 and 1 exclusive, got {probability}"
        )));
    }
    let mut grid = Grid::new(rows, columns, glyphs)?;
    for y in 0..rows {
        for x in 0..columns {
            grid.set(y, x, rng.random::<f64>() <= probability);
        }
    }
    info!(
        "seeded {rows}x{columns} grid with probability {probability}: {} alive",
        grid.population()
    );
    Ok(grid)
}

/// Build a grid whose size and contents are exactly the pattern's
pub fn from_pattern<I, S>(lines: I, glyphs: Glyphs) -> Result<Grid>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pattern = Pattern::parse(lines, glyphs)?;
    let (rows, columns) = pattern.dimensions();
    let mut grid = Grid::new(rows, columns, glyphs)?;
    pattern.place_on(&mut grid, 0, 0);
    info!("loaded {rows}x{columns} pattern: {} alive", grid.population());
    Ok(grid)
}

/// Center a preset on a canvas. Without an explicit canvas the preset gets
/// a margin of `PRESET_MARGIN` dead cells on every side.
pub fn from_preset(preset: &Preset, canvas: Option<(usize, usize)>, glyphs: Glyphs) -> Result<Grid> {
    let pattern = preset.pattern();
    let (height, width) = pattern.dimensions();
    let (rows, columns) =
        canvas.unwrap_or((height + 2 * PRESET_MARGIN, width + 2 * PRESET_MARGIN));
    if rows < height || columns < width {
        return Err(Error::InvalidParameter(format!(
            "{} needs at least {height}x{width} cells, canvas is {rows}x{columns}",
            preset.name
        )));
    }

    let mut grid = Grid::new(rows, columns, glyphs)?;
    pattern.place_on(&mut grid, (rows - height) / 2, (columns - width) / 2);
    info!("placed preset {} on {rows}x{columns} grid", preset.name);
    Ok(grid)
}

/// Read every line of a pattern source. `-` reads standard input.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let lines = if path.as_os_str() == STDIN_PATH {
        debug!("reading pattern from standard input");
        collect_lines(io::stdin().lock())
    } else {
        debug!("reading pattern from {}", path.display());
        collect_lines(BufReader::new(File::open(path).map_err(io_error)?))
    };
    lines.map_err(io_error)
}

/// Split a stream into rows. A last line without a newline still counts,
/// and a trailing carriage return is dropped.
pub fn collect_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|mut line| {
                if line.ends_with('\r') {
                    line.pop();
                }
                line
            })
        })
        .collect()
}
