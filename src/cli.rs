use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use unicode_width::UnicodeWidthChar;

use crate::application::FrameDelay;
use crate::config::{Config, RenderMode};
use crate::domain::initializer::Source;
use crate::domain::{Glyphs, presets};
use crate::error::{Error, Result};

pub const DEFAULT_PROBABILITY: f64 = 0.3;
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Conway's Game of Life in the console.
///
/// The board is seeded at random from --rows, --columns and --probability,
/// or read from a pattern file (--file, `-` for standard input), or taken
/// from a built-in --preset. The run ends when a generation changes nothing.
#[derive(Debug, Parser)]
#[command(name = "gol", author, version, about, long_about)]
pub struct Cli {
    /// Number of rows (canvas height with --preset)
    #[arg(
        short,
        long,
        value_name = "ROWS",
        value_parser = clap::value_parser!(u32).range(1..),
        required_unless_present_any = ["file", "preset"],
        requires = "columns"
    )]
    pub rows: Option<u32>,

    /// Number of columns (canvas width with --preset)
    #[arg(
        short,
        long,
        value_name = "COLUMNS",
        value_parser = clap::value_parser!(u32).range(1..),
        required_unless_present_any = ["file", "preset"],
        requires = "rows"
    )]
    pub columns: Option<u32>,

    /// Chance of each cell starting alive, strictly between 0 and 1
    #[arg(short, long, value_name = "P", default_value_t = DEFAULT_PROBABILITY, conflicts_with_all = ["file", "preset"])]
    pub probability: f64,

    /// Character drawn for a live cell
    #[arg(short, long = "alive-character", value_name = "CHAR", default_value_t = 'o')]
    pub alive: char,

    /// Character drawn for a dead cell
    #[arg(short, long = "dead-character", value_name = "CHAR", default_value_t = ' ')]
    pub dead: char,

    /// Pattern file of equal-length rows of the alive and dead characters, `-` for stdin
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["rows", "columns", "preset"])]
    pub file: Option<PathBuf>,

    /// Start from a built-in pattern (block, blinker, toad, beacon, pulsar, glider, lwss, r-pentomino, acorn)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Repaint in place and accept keys: q quit, s stop/resume, + faster, - slower
    #[arg(short, long)]
    pub interactive: bool,

    /// Seed for the random board, for repeatable runs
    #[arg(long, value_name = "N", conflicts_with_all = ["file", "preset"])]
    pub seed: Option<u64>,

    /// Pause between generations
    #[arg(
        long = "delay-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(0..=999)
    )]
    pub delay_ms: u64,
}

impl Cli {
    /// Validate the parsed arguments and turn them into a run configuration
    pub fn into_config(self) -> Result<Config> {
        let glyphs = Glyphs::new(
            single_column("alive-character", self.alive)?,
            single_column("dead-character", self.dead)?,
        );
        if glyphs.alive == glyphs.dead {
            return Err(Error::InvalidParameter(format!(
                "alive and dead characters must differ, both are {:?}",
                glyphs.alive
            )));
        }

        let canvas = self
            .rows
            .zip(self.columns)
            .map(|(rows, columns)| (rows as usize, columns as usize));
        let source = match (self.file, self.preset) {
            (Some(path), _) => Source::Pattern { path },
            (None, Some(name)) => {
                let preset = presets::find(&name).ok_or_else(|| {
                    Error::InvalidParameter(format!(
                        "unknown preset {name:?}, expected one of:\n{}",
                        presets::catalog()
                    ))
                })?;
                Source::Preset { preset, canvas }
            }
            (None, None) => {
                let (rows, columns) = canvas.ok_or_else(|| {
                    Error::InvalidParameter("rows and columns are required".to_string())
                })?;
                if !(self.probability > 0.0 && self.probability < 1.0) {
                    return Err(Error::InvalidParameter(format!(
                        "probability must be between 0 and 1 exclusive, got {}",
                        self.probability
                    )));
                }
                Source::Random {
                    rows,
                    columns,
                    probability: self.probability,
                }
            }
        };

        Ok(Config {
            source,
            glyphs,
            mode: if self.interactive {
                RenderMode::Interactive
            } else {
                RenderMode::Plain
            },
            seed: self.seed,
            delay: FrameDelay::new(Duration::from_millis(self.delay_ms)),
        })
    }
}

/// Glyphs must take exactly one display column
fn single_column(option: &str, c: char) -> Result<char> {
    match c.width() {
        Some(1) => Ok(c),
        _ => Err(Error::InvalidParameter(format!(
            "{option} {c:?} must be a single-column character"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gol").chain(args.iter().copied()))
    }

    fn config(args: &[&str]) -> Result<Config> {
        parse(args).expect("arguments parse").into_config()
    }

    #[test]
    fn test_random_defaults() {
        let config = config(&["-r", "20", "-c", "40"]).unwrap();
        assert_eq!(
            config.source,
            Source::Random {
                rows: 20,
                columns: 40,
                probability: DEFAULT_PROBABILITY
            }
        );
        assert_eq!(config.glyphs, Glyphs::new('o', ' '));
        assert_eq!(config.mode, RenderMode::Plain);
        assert_eq!(config.delay, FrameDelay::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_rows_and_columns_required_without_pattern() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--rows", "5"]).is_err());
        assert!(parse(&["--columns", "5"]).is_err());
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert!(parse(&["-r", "0", "-c", "5"]).is_err());
        assert!(parse(&["-r", "-3", "-c", "5"]).is_err());
    }

    #[test]
    fn test_probability_must_be_open_interval() {
        for p in ["0", "1", "1.5", "-0.1"] {
            let arg = format!("--probability={p}");
            assert!(
                matches!(
                    config(&["-r", "5", "-c", "5", &arg]),
                    Err(Error::InvalidParameter(_))
                ),
                "{p}"
            );
        }
        assert!(config(&["-r", "5", "-c", "5", "-p", "0.999"]).is_ok());
    }

    #[test]
    fn test_file_excludes_random_parameters() {
        assert!(parse(&["-f", "glider.txt", "-r", "5"]).is_err());
        assert!(parse(&["-f", "glider.txt", "-p", "0.5"]).is_err());
        let config = config(&["-f", "-"]).unwrap();
        assert_eq!(config.source, Source::Pattern { path: PathBuf::from("-") });
    }

    #[test]
    fn test_glyph_options() {
        let config = config(&["-r", "5", "-c", "5", "-a", "#", "-d", "."]).unwrap();
        assert_eq!(config.glyphs, Glyphs::new('#', '.'));
    }

    #[test]
    fn test_same_glyph_twice_rejected() {
        assert!(matches!(
            config(&["-r", "5", "-c", "5", "-a", "x", "-d", "x"]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_wide_glyph_rejected() {
        assert!(matches!(
            config(&["-r", "5", "-c", "5", "-a", "世"]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_preset_with_and_without_canvas() {
        let config = config(&["--preset", "Glider"]).unwrap();
        assert_eq!(
            config.source,
            Source::Preset {
                preset: presets::GLIDER,
                canvas: None
            }
        );

        let config = self::config(&["--preset", "glider", "-r", "30", "-c", "60"]).unwrap();
        assert_eq!(
            config.source,
            Source::Preset {
                preset: presets::GLIDER,
                canvas: Some((30, 60))
            }
        );
    }

    #[test]
    fn test_unknown_preset_lists_catalog() {
        let err = config(&["--preset", "spaceship"]).unwrap_err().to_string();
        assert!(err.contains("r-pentomino"));
        assert!(err.contains("Lightweight spaceship (period 4)"));
    }

    #[test]
    fn test_interactive_and_pacing_options() {
        let config = config(&["-r", "5", "-c", "5", "-i", "--delay-ms", "100", "--seed", "9"]).unwrap();
        assert_eq!(config.mode, RenderMode::Interactive);
        assert_eq!(config.delay.duration(), Duration::from_millis(100));
        assert_eq!(config.seed, Some(9));
        assert!(parse(&["-r", "5", "-c", "5", "--delay-ms", "1000"]).is_err());
    }
}
